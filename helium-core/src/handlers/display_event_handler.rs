#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_servers::DisplayServer;
use crate::models::Handle;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Route one event to the handler of the frame it targets.
    /// Returns true if the event touched managed state.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::MapRequest(handle) => self.map_request_handler(handle),
            DisplayEvent::ButtonPress(pointer, button) => {
                self.state.button_press_handler(&pointer, button)
            }
            DisplayEvent::ButtonRelease(pointer, button) => {
                self.state.button_release_handler(&pointer, button)
            }
            DisplayEvent::Motion(pointer) => self.state.motion_handler(&pointer),
            // The client withdrew itself and is handed back to the root.
            DisplayEvent::UnmapNotify(handle) => self.window_destroyed_handler(&handle, true),
            DisplayEvent::DestroyNotify(handle) => self.window_destroyed_handler(&handle, false),
            DisplayEvent::WindowTitleChange(handle, title) => {
                self.state.title_change_handler(&handle, title)
            }
            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_event::PointerEvent;
    use crate::models::{Button, FrameState, MockHandle};

    fn pointer(window: MockHandle, x: i32, y: i32) -> PointerEvent<MockHandle> {
        PointerEvent {
            window: WindowHandle(window),
            event_x: x,
            event_y: y,
            root_x: x,
            root_y: y,
        }
    }

    #[test]
    fn focus_returns_to_the_previous_frame_when_one_goes_away() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::MapRequest(WindowHandle(1)));
        manager.display_event_handler(DisplayEvent::MapRequest(WindowHandle(2)));
        let a = manager.state.frame_by_client(&WindowHandle(1)).unwrap();
        let b = manager.state.frame_by_client(&WindowHandle(2)).unwrap();

        manager.display_event_handler(DisplayEvent::ButtonPress(pointer(1, 1, 1), Button::Left));
        assert_eq!(manager.state.focused_frame(), Some(a));
        manager.display_event_handler(DisplayEvent::ButtonPress(pointer(2, 1, 1), Button::Left));
        assert_eq!(manager.state.focused_frame(), Some(b));

        manager.display_event_handler(DisplayEvent::DestroyNotify(WindowHandle(2)));
        assert_eq!(manager.state.focused_frame(), Some(a));
        assert_eq!(manager.state.focus_queue.head(), Some(a));
        manager.state.assert_focus_invariants();
    }

    #[test]
    fn drag_on_a_decoration_moves_the_frame() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::MapRequest(WindowHandle(1)));
        let id = manager.state.frame_by_client(&WindowHandle(1)).unwrap();
        let decoration = manager.state.frame(id).unwrap().decoration.0;

        manager.display_event_handler(DisplayEvent::ButtonPress(
            pointer(decoration, 100, 10),
            Button::Left,
        ));
        for (x, y) in [(110, 15), (140, 35)] {
            manager.display_event_handler(DisplayEvent::Motion(pointer(decoration, x, y)));
        }
        manager.display_event_handler(DisplayEvent::ButtonRelease(
            pointer(decoration, 140, 35),
            Button::Left,
        ));
        let frame = manager.state.frame(id).unwrap();
        assert_eq!((frame.geometry.x(), frame.geometry.y()), (40, 25));
        assert_eq!(frame.state(), FrameState::Focused);
    }

    #[test]
    fn unmap_and_destroy_of_one_client_clean_up_once() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::MapRequest(WindowHandle(1)));
        assert!(manager.display_event_handler(DisplayEvent::UnmapNotify(WindowHandle(1))));
        assert!(!manager.display_event_handler(DisplayEvent::DestroyNotify(WindowHandle(1))));
        assert!(manager.state.frames.is_empty());
    }

    #[test]
    fn title_change_of_unknown_window_is_ignored() {
        let mut manager = Manager::new_test();
        assert!(!manager.display_event_handler(DisplayEvent::WindowTitleChange(
            WindowHandle(5),
            None
        )));
    }
}
