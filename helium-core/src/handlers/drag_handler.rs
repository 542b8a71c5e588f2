#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::models::{DragKind, FrameState, Handle};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Start a move or resize session on a frame. `root` anchors the drag and `event` is the
    /// click position inside the decoration.
    pub fn drag_begin(
        &mut self,
        id: FrameId,
        kind: DragKind,
        root: (i32, i32),
        event: (i32, i32),
    ) -> bool {
        if self.mode != Mode::Normal {
            return false;
        }
        if !self.focus_frame(id) {
            return false;
        }
        let Some(frame) = self.frames.get_mut(&id) else {
            return false;
        };
        if !frame.begin_drag(kind, root, event) {
            return false;
        }
        let decoration = frame.decoration;
        let action = match kind {
            DragKind::Move => {
                self.mode = Mode::MovingWindow(id);
                DisplayAction::ReadyToMoveWindow(decoration)
            }
            DragKind::Resize => {
                self.mode = Mode::ResizingWindow(id);
                DisplayAction::ReadyToResizeWindow(decoration, frame.resize_direction())
            }
        };
        tracing::debug!("Drag {:?} started on frame {:?}", kind, id);
        self.actions.push_back(action);
        true
    }

    /// Pointer motion during a session. Anything outside a session is ignored.
    pub fn drag_step(&mut self, root: (i32, i32)) -> bool {
        let Some(id) = self.mode.frame() else {
            return false;
        };
        let Some(frame) = self.frames.get_mut(&id) else {
            return false;
        };
        if !frame.drag_step(root) {
            return false;
        }
        let resized = frame.state() == FrameState::Resizing;
        self.configure_frame(id);
        if resized {
            self.render_bar(id);
        }
        true
    }

    /// Finish the current session and release the pointer.
    pub fn drag_end(&mut self) -> bool {
        let Some(id) = self.mode.frame() else {
            return false;
        };
        self.mode = Mode::Normal;
        self.actions.push_back(DisplayAction::NormalMode);
        if self.frames.get_mut(&id).is_some_and(Frame::end_drag) {
            self.focus_frame(id);
        }
        true
    }
}
