#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_event::PointerEvent;
use crate::models::{Button, DragKind, Handle};
use crate::state::State;

impl<H: Handle> State<H> {
    pub fn button_press_handler(&mut self, event: &PointerEvent<H>, button: Button) -> bool {
        // Presses during a drag belong to the session until its button is released.
        if self.mode != Mode::Normal {
            return false;
        }
        let Some((id, role)) = self.lookup(&event.window) else {
            return false;
        };
        let root = (event.root_x, event.root_y);
        // The bar spans the top of the decoration, so both share coordinates.
        let local = (event.event_x, event.event_y);
        match role {
            WindowRole::Client => self.focus_frame(id),
            WindowRole::Decoration | WindowRole::Bar if button == self.move_button => {
                self.drag_begin(id, DragKind::Move, root, local)
            }
            WindowRole::Decoration | WindowRole::Bar if button == self.resize_button => {
                self.drag_begin(id, DragKind::Resize, root, local)
            }
            WindowRole::Decoration | WindowRole::Bar => self.focus_frame(id),
        }
    }

    pub fn button_release_handler(&mut self, event: &PointerEvent<H>, button: Button) -> bool {
        match self.mode {
            Mode::MovingWindow(_) if button == self.move_button => return self.drag_end(),
            Mode::ResizingWindow(_) if button == self.resize_button => return self.drag_end(),
            _ => {}
        }
        match self.lookup(&event.window) {
            Some((id, WindowRole::Bar)) if button == self.close_button => self.close_frame(id),
            _ => false,
        }
    }

    pub fn motion_handler(&mut self, event: &PointerEvent<H>) -> bool {
        self.drag_step((event.root_x, event.root_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_action::DisplayAction;
    use crate::handlers::focus_handler::tests::state_with_frames;
    use crate::models::{FrameState, MockHandle};

    fn pointer(window: MockHandle, x: i32, y: i32) -> PointerEvent<MockHandle> {
        PointerEvent {
            window: WindowHandle(window),
            event_x: x,
            event_y: y,
            root_x: x,
            root_y: y,
        }
    }

    fn with_bar(count: usize) -> State<MockHandle> {
        let mut state = state_with_frames(count);
        let ids: Vec<FrameId> = state.frames.keys().copied().collect();
        for id in ids {
            let Some(frame) = state.frames.get_mut(&id) else {
                continue;
            };
            let bar = WindowHandle(frame.decoration.0 + 5);
            frame.bar = Some(bar);
            state
                .registry
                .register(bar, id, crate::models::WindowRole::Bar);
        }
        state
    }

    #[test]
    fn clicking_a_client_focuses_it() {
        let mut state = state_with_frames(2);
        assert!(state.button_press_handler(&pointer(21, 3, 3), Button::Left));
        assert_eq!(state.focused_frame(), Some(FrameId(2)));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn move_button_on_the_bar_starts_and_ends_a_move() {
        let mut state = with_bar(1);
        assert!(state.button_press_handler(&pointer(15, 10, 10), Button::Left));
        assert_eq!(
            state.frame(FrameId(1)).map(Frame::state),
            Some(FrameState::Moving)
        );
        assert!(state.motion_handler(&pointer(15, 30, 40)));
        // releasing another button keeps the session going
        assert!(!state.button_release_handler(&pointer(15, 30, 40), Button::Right));
        assert!(state.button_release_handler(&pointer(15, 30, 40), Button::Left));
        let frame = state.frame(FrameId(1)).unwrap();
        assert_eq!((frame.geometry.x(), frame.geometry.y()), (20, 30));
        assert_eq!(frame.state(), FrameState::Focused);
    }

    #[test]
    fn other_presses_during_a_move_leave_it_running() {
        let mut state = with_bar(1);
        assert!(state.button_press_handler(&pointer(15, 10, 10), Button::Left));
        assert!(!state.button_press_handler(&pointer(10, 12, 12), Button::Middle));
        assert!(!state.button_press_handler(&pointer(11, 12, 12), Button::Left));
        assert_eq!(state.mode, Mode::MovingWindow(FrameId(1)));
        assert!(state.motion_handler(&pointer(15, 30, 40)));
        assert!(state.button_release_handler(&pointer(15, 30, 40), Button::Left));
        let frame = state.frame(FrameId(1)).unwrap();
        assert_eq!((frame.geometry.x(), frame.geometry.y()), (20, 30));
    }

    #[test]
    fn resize_button_on_the_decoration_starts_a_resize() {
        let mut state = state_with_frames(1);
        assert!(state.button_press_handler(&pointer(10, 0, 0), Button::Right));
        assert_eq!(state.mode, Mode::ResizingWindow(FrameId(1)));
    }

    #[test]
    fn close_button_released_on_the_bar_closes_the_client() {
        let mut state = with_bar(1);
        state.button_press_handler(&pointer(15, 5, 5), Button::Middle);
        assert!(state.button_release_handler(&pointer(15, 5, 5), Button::Middle));
        assert_eq!(
            state.actions.back(),
            Some(&DisplayAction::KillWindow(WindowHandle(11)))
        );
        assert!(state.frame(FrameId(1)).is_some());
    }

    #[test]
    fn close_button_on_the_decoration_does_not_close() {
        let mut state = with_bar(1);
        assert!(!state.button_release_handler(&pointer(10, 5, 5), Button::Middle));
        assert!(!state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::KillWindow(_))));
    }

    #[test]
    fn unknown_windows_are_ignored() {
        let mut state = state_with_frames(1);
        assert!(!state.button_press_handler(&pointer(99, 0, 0), Button::Left));
        assert!(!state.button_release_handler(&pointer(99, 0, 0), Button::Middle));
        assert!(!state.motion_handler(&pointer(99, 0, 0)));
        assert!(state.actions.is_empty());
    }
}
