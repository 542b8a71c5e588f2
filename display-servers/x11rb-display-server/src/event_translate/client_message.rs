use helium_core::{models::WindowHandle, Command, DisplayEvent};
use x11rb::protocol::xproto;

use crate::{xwrap::XWrap, X11rbWindowHandle};

use crate::error::Result;

pub(crate) fn from_event(
    event: xproto::ClientMessageEvent,
    xw: &XWrap,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    if !xw.managed_windows.contains(&event.window) && event.window != xw.get_default_root() {
        return Ok(None);
    }
    let atom_name = xw.atoms.get_name(event.type_);
    tracing::trace!("ClientMessage: {} : {:?}", event.window, atom_name);

    let value = event.data.as_data32();
    let window = WindowHandle(X11rbWindowHandle(event.window));

    if event.type_ == xw.atoms.NetCurrentDesktop {
        return Ok(desktop_index(value[0])
            .map(|tag| DisplayEvent::SendCommand(Command::GoToTag(tag))));
    }

    if event.type_ == xw.atoms.NetWMDesktop {
        return Ok(desktop_index(value[0]).map(|tag| {
            DisplayEvent::SendCommand(Command::SendWindowToTag {
                window: Some(window),
                tag,
            })
        }));
    }

    if event.window == xw.get_default_root() {
        return Ok(None);
    }

    if event.type_ == xw.atoms.NetActiveWindow {
        return Ok(Some(DisplayEvent::SendCommand(Command::FocusWindow(window))));
    }

    if event.type_ == xw.atoms.NetCloseWindow {
        return Ok(Some(DisplayEvent::SendCommand(Command::CloseWindow(Some(
            window,
        )))));
    }

    Ok(None)
}

/// Turns a zero based EWMH desktop index into a tag id.
fn desktop_index(value: u32) -> Option<usize> {
    match usize::try_from(value) {
        Ok(index) => index.checked_add(1),
        Err(err) => {
            tracing::debug!(
                "Received invalid value for desktop index ({}): {}",
                value,
                err,
            );
            None
        }
    }
}
