use helium_core::{models::WindowHandle, DisplayEvent};
use x11rb::protocol::xproto;

use crate::xwrap::XWrap;
use crate::{error::Result, X11rbWindowHandle};

pub(crate) fn from_event(
    event: xproto::PropertyNotifyEvent,
    xw: &XWrap,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    if event.window == xw.get_default_root() || !xw.managed_windows.contains(&event.window) {
        return Ok(None);
    }

    let is_title = event.atom == u32::from(xproto::AtomEnum::WM_NAME)
        || event.atom == xw.atoms.NetWMName;
    if !is_title {
        return Ok(None);
    }
    tracing::trace!("PropertyNotify: title of {}", event.window);

    let handle = WindowHandle(X11rbWindowHandle(event.window));
    // A deleted `_NET_WM_NAME` falls back to `WM_NAME`, both missing read as empty.
    let title = xw.get_window_name(event.window)?;
    Ok(Some(DisplayEvent::WindowTitleChange(
        handle,
        Some(title).filter(|title| !title.is_empty()),
    )))
}
