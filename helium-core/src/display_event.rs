use crate::models::{Button, Handle, WindowHandle};
use crate::Command;

/// Events from the display server, already resolved to window handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    /// A top-level client asks to be shown.
    MapRequest(WindowHandle<H>),
    ButtonPress(PointerEvent<H>, Button),
    ButtonRelease(PointerEvent<H>, Button),
    Motion(PointerEvent<H>),
    UnmapNotify(WindowHandle<H>),
    DestroyNotify(WindowHandle<H>),
    WindowTitleChange(WindowHandle<H>, Option<String>),
    SendCommand(Command<H>),
}

/// Pointer position relative to the event window and to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent<H: Handle> {
    pub window: WindowHandle<H>,
    pub event_x: i32,
    pub event_y: i32,
    pub root_x: i32,
    pub root_y: i32,
}
