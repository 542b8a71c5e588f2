use crate::models::{Direction, Handle, TagId, WindowHandle, Xyhw};

/// These are responses from the window manager.
/// The display server should act on these actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Map a window as it is, without a frame.
    MapWindow(WindowHandle<H>),

    /// Raises a given window.
    MoveToTop(WindowHandle<H>),

    /// Map a decoration and the client inside it.
    ShowFrame {
        decoration: WindowHandle<H>,
        client: WindowHandle<H>,
    },

    /// Unmap a decoration. The client stays mapped inside it.
    HideFrame(WindowHandle<H>),

    /// Move and resize a decoration, fitting the client and bar into it.
    ConfigureFrame {
        decoration: WindowHandle<H>,
        client: WindowHandle<H>,
        bar: Option<WindowHandle<H>>,
        geometry: Xyhw,
        bar_height: i32,
    },

    /// Tell a window that it is to become focused.
    WindowTakeFocus {
        client: WindowHandle<H>,
        decoration: WindowHandle<H>,
    },

    /// Remove focus on any visible window by focusing the root window.
    Unfocus,

    /// Nicely ask a window if it would please close at its convenience.
    KillWindow(WindowHandle<H>),

    /// Grab the pointer for a move drag of this decoration.
    ReadyToMoveWindow(WindowHandle<H>),

    /// Grab the pointer for a resize drag of this decoration.
    ReadyToResizeWindow(WindowHandle<H>, Direction),

    /// Release the pointer grab of a drag.
    NormalMode,

    /// Drop the decoration of a frame that is gone. When `restore` is set the client is still
    /// alive and is reparented back to the root at that position first.
    DestroyFrame {
        decoration: WindowHandle<H>,
        client: WindowHandle<H>,
        restore: Option<(i32, i32)>,
    },

    /// Used to let the WM know of the current displayed tag changes.
    SetCurrentTag(TagId),

    /// Used to let the WM know of the tag for a given window.
    SetWindowTag(WindowHandle<H>, TagId),

    ShowBar(WindowHandle<H>),
    HideBar(WindowHandle<H>),
    /// Redraw a bar in focused or unfocused style.
    RenderBar {
        bar: WindowHandle<H>,
        focused: bool,
        title: Option<String>,
        width: i32,
    },
}
