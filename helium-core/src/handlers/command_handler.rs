#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command<H>) -> bool {
        tracing::debug!("Handling command {:?}", command);
        process_internal(&mut self.state, command)
    }
}

fn process_internal<H: Handle>(state: &mut State<H>, command: &Command<H>) -> bool {
    match command {
        Command::GoToTag(tag) => state.goto_tag(*tag),
        Command::ToggleTag(tag) => state.toggle_tag(*tag),
        Command::SendWindowToTag { window, tag } => send_window_to_tag(state, window.as_ref(), *tag),
        Command::CloseWindow(window) => target_frame(state, window.as_ref())
            .is_some_and(|id| state.close_frame(id)),
        Command::FocusWindow(window) => focus_window(state, window),
    }
}

/// The frame of `window`, or the focused frame when no window is given.
fn target_frame<H: Handle>(state: &State<H>, window: Option<&WindowHandle<H>>) -> Option<FrameId> {
    match window {
        Some(handle) => state.frame_by_client(handle),
        None => state.focused_frame(),
    }
}

fn send_window_to_tag<H: Handle>(
    state: &mut State<H>,
    window: Option<&WindowHandle<H>>,
    tag: crate::models::TagId,
) -> bool {
    if !state.tags.contains(tag) {
        tracing::warn!("Cannot send a window to unknown tag {}", tag);
        return false;
    }
    target_frame(state, window).is_some_and(|id| state.set_frame_tag(id, tag))
}

/// Pagers activate windows on other tags too. Switch there first.
fn focus_window<H: Handle>(state: &mut State<H>, window: &WindowHandle<H>) -> bool {
    let Some(id) = state.frame_by_client(window) else {
        return false;
    };
    let hidden_on = state.frame(id).filter(|f| f.hidden).map(|f| f.tag);
    if let Some(tag) = hidden_on {
        state.goto_tag(tag);
    }
    state.focus_frame(id)
}
