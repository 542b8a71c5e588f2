#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::models::{Handle, TagId};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Move a frame to another tag and show or hide it to match.
    pub fn set_frame_tag(&mut self, id: FrameId, tag: TagId) -> bool {
        let Some(frame) = self.frames.get_mut(&id) else {
            return false;
        };
        if frame.is_unmapped() {
            return false;
        }
        if frame.tag != tag {
            frame.tag = tag;
            let client = frame.client;
            self.actions
                .push_back(DisplayAction::SetWindowTag(client, tag));
        }
        self.apply_visibility(id, true);
        true
    }

    /// Show only `tag`.
    pub fn goto_tag(&mut self, tag: TagId) -> bool {
        if !self.tags.view(tag) {
            tracing::warn!("Cannot switch to unknown tag {}", tag);
            return false;
        }
        self.apply_all_visibility();
        self.actions.push_back(DisplayAction::SetCurrentTag(tag));
        true
    }

    pub fn toggle_tag(&mut self, tag: TagId) -> bool {
        if self.tags.toggle(tag).is_none() {
            tracing::warn!("Cannot toggle unknown tag {}", tag);
            return false;
        }
        self.apply_all_visibility();
        true
    }

    fn apply_all_visibility(&mut self) {
        let ids: Vec<FrameId> = self.frames.keys().copied().collect();
        for id in ids {
            self.apply_visibility(id, false);
        }
        if self.focused_frame().is_none() {
            self.refocus_head();
        }
    }

    /// Brings the display state of a frame in line with the visibility of its tag. Returns
    /// whether anything changed.
    pub(crate) fn apply_visibility(&mut self, id: FrameId, refocus: bool) -> bool {
        let Some(frame) = self.frames.get(&id) else {
            return false;
        };
        if frame.is_unmapped() {
            return false;
        }
        let visible = self.tags.is_visible(frame.tag);
        if visible && frame.hidden {
            self.show_frame(id);
            true
        } else if !visible && !frame.hidden {
            self.hide_frame(id, refocus);
            true
        } else {
            false
        }
    }

    fn show_frame(&mut self, id: FrameId) {
        let Some(frame) = self.frames.get_mut(&id) else {
            return;
        };
        frame.hidden = false;
        let (decoration, client, bar) = (frame.decoration, frame.client, frame.bar);
        self.actions
            .push_back(DisplayAction::ShowFrame { decoration, client });
        if let Some(bar) = bar {
            self.actions.push_back(DisplayAction::ShowBar(bar));
        }
        self.render_bar(id);
        self.focus_queue.push_back(id);
    }

    fn hide_frame(&mut self, id: FrameId, refocus: bool) {
        let Some(had_focus) = self.frames.get(&id).map(Frame::has_focus) else {
            return;
        };
        self.unfocus_frame(id);
        let Some(frame) = self.frames.get_mut(&id) else {
            return;
        };
        frame.hidden = true;
        let (decoration, bar) = (frame.decoration, frame.bar);
        self.focus_queue.remove(id);
        self.actions.push_back(DisplayAction::HideFrame(decoration));
        if let Some(bar) = bar {
            self.actions.push_back(DisplayAction::HideBar(bar));
        }
        if had_focus && refocus {
            self.refocus_head();
        }
    }
}
