#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::models::{FrameState, Handle};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Give a frame the input focus. Any other frame holding focus loses it first.
    ///
    /// Unmapped frames and frames hidden by their tag cannot take focus.
    pub fn focus_frame(&mut self, id: FrameId) -> bool {
        if !self.frames.get(&id).is_some_and(Frame::is_visible) {
            return false;
        }
        let others: Vec<FrameId> = self
            .frames
            .values()
            .filter(|f| f.id != id && f.has_focus())
            .map(|f| f.id)
            .collect();
        for other in others {
            self.unfocus_frame(other);
        }

        let Some(frame) = self.frames.get_mut(&id) else {
            return false;
        };
        frame.set_state(FrameState::Focused);
        let (decoration, client) = (frame.decoration, frame.client);
        self.focus_queue.promote(id);
        tracing::debug!("Focusing frame {:?}", id);

        self.actions.push_back(DisplayAction::MoveToTop(decoration));
        self.actions
            .push_back(DisplayAction::WindowTakeFocus { client, decoration });
        self.render_bar(id);
        true
    }

    /// Drops focus from a frame. Does nothing unless the frame holds focus.
    pub fn unfocus_frame(&mut self, id: FrameId) -> bool {
        let Some(frame) = self.frames.get_mut(&id) else {
            return false;
        };
        if !frame.has_focus() {
            return false;
        }
        frame.set_state(FrameState::Unfocused);
        // A drag cannot outlive the focus of its frame.
        if self.mode.frame() == Some(id) {
            self.mode = Mode::Normal;
            self.actions.push_back(DisplayAction::NormalMode);
        }
        self.render_bar(id);
        true
    }

    /// Takes a frame out of the focus bookkeeping. When it held focus, the most recently
    /// focused remaining frame takes over.
    pub fn unmap_frame(&mut self, id: FrameId) -> bool {
        let Some(had_focus) = self.frames.get(&id).map(Frame::has_focus) else {
            return false;
        };
        self.unfocus_frame(id);
        if let Some(frame) = self.frames.get_mut(&id) {
            frame.set_state(FrameState::Unmapped);
        }
        self.focus_queue.remove(id);
        if had_focus {
            self.refocus_head();
        }
        true
    }

    pub(crate) fn refocus_head(&mut self) {
        let focused = self
            .focus_queue
            .head()
            .is_some_and(|head| self.focus_frame(head));
        if !focused {
            self.actions.push_back(DisplayAction::Unfocus);
        }
    }

    pub fn focused_frame(&self) -> Option<FrameId> {
        self.frames.values().find(|f| f.has_focus()).map(|f| f.id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{MockHandle, Xyhw};

    pub(crate) fn state_with_frames(count: usize) -> State<MockHandle> {
        let mut state = State::new(&crate::config::TestConfig::default());
        for n in 0..count {
            let id = state.allocate_frame_id();
            let base = (n as MockHandle + 1) * 10;
            let mut frame = Frame::new(
                id,
                WindowHandle(base),
                WindowHandle(base + 1),
                Xyhw::default(),
                20,
            );
            frame.hidden = false;
            state.insert_frame(frame);
            state.focus_queue.push_back(id);
        }
        state
    }

    #[test]
    fn focusing_a_frame_unfocuses_the_previous_one() {
        let mut state = state_with_frames(2);
        assert!(state.focus_frame(FrameId(1)));
        assert!(state.focus_frame(FrameId(2)));
        assert_eq!(state.focused_frames(), 1);
        assert_eq!(state.focused_frame(), Some(FrameId(2)));
        assert_eq!(
            state.frame(FrameId(1)).map(Frame::state),
            Some(FrameState::Unfocused)
        );
        state.assert_focus_invariants();
    }

    #[test]
    fn focus_raises_then_requests_input_focus() {
        let mut state = state_with_frames(1);
        state.focus_frame(FrameId(1));
        let actions: Vec<_> = state.actions.drain(..).collect();
        assert_eq!(
            actions,
            vec![
                DisplayAction::MoveToTop(WindowHandle(10)),
                DisplayAction::WindowTakeFocus {
                    client: WindowHandle(11),
                    decoration: WindowHandle(10),
                },
            ]
        );
    }

    #[test]
    fn unmapping_the_focused_frame_refocuses_the_previous_one() {
        let mut state = state_with_frames(2);
        state.focus_frame(FrameId(1));
        state.focus_frame(FrameId(2));
        assert!(state.unmap_frame(FrameId(2)));
        assert_eq!(state.focused_frame(), Some(FrameId(1)));
        assert_eq!(state.focus_queue.head(), Some(FrameId(1)));
        assert!(!state.focus_queue.contains(FrameId(2)));
        state.assert_focus_invariants();
    }

    #[test]
    fn unmapping_the_last_frame_focuses_the_root() {
        let mut state = state_with_frames(1);
        state.focus_frame(FrameId(1));
        state.actions.clear();
        state.unmap_frame(FrameId(1));
        assert_eq!(state.focused_frame(), None);
        assert_eq!(state.actions.back(), Some(&DisplayAction::Unfocus));
    }

    #[test]
    fn unmapping_an_unfocused_frame_keeps_focus_where_it_is() {
        let mut state = state_with_frames(3);
        state.focus_frame(FrameId(1));
        state.focus_frame(FrameId(2));
        state.unmap_frame(FrameId(1));
        assert_eq!(state.focused_frame(), Some(FrameId(2)));
        state.assert_focus_invariants();
    }

    #[test]
    fn unmapped_frames_ignore_focus_changes() {
        let mut state = state_with_frames(1);
        state.unmap_frame(FrameId(1));
        state.actions.clear();
        assert!(!state.unfocus_frame(FrameId(1)));
        assert!(!state.focus_frame(FrameId(1)));
        assert!(state.actions.is_empty());
        assert!(!state.focus_frame(FrameId(42)));
    }

    #[test]
    fn unfocusing_an_unfocused_frame_does_nothing() {
        let mut state = state_with_frames(1);
        assert!(!state.unfocus_frame(FrameId(1)));
        assert!(state.actions.is_empty());
    }
}
