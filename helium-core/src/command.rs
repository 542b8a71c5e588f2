use crate::models::{Handle, TagId, WindowHandle};

/// Requests from outside the pointer bindings, such as pagers speaking EWMH.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command<H: Handle> {
    /// Show only the given tag.
    GoToTag(TagId),
    /// Flip the visibility of a tag alongside the others. EWMH has no message for this, so it
    /// is only reachable through the library API.
    ToggleTag(TagId),
    /// Move a window to another tag. `None` means the focused window.
    SendWindowToTag {
        window: Option<WindowHandle<H>>,
        tag: TagId,
    },
    /// Ask a window to close. `None` means the focused window.
    CloseWindow(Option<WindowHandle<H>>),
    FocusWindow(WindowHandle<H>),
}
