//! A wrapper around calls to x11rb and X related functions.
// We allow this _ because if we don't we'll receive an error that it isn't read on _task_guard.
#![allow(clippy::used_underscore_binding)]

use std::{collections::HashMap, os::fd::AsRawFd, sync::Arc, time::Duration};

use helium_core::Config;
use tokio::sync::{oneshot, Notify};
use x11rb::{
    connection::Connection,
    errors::ReplyError,
    protocol::{xproto, ErrorKind},
    rust_connection::RustConnection,
    wrapper::ConnectionExt,
    x11_utils::Serialize,
};

use crate::{
    error::{Error, Result},
    xatom::AtomCollection,
    xcursors::XCursor,
};

mod bar;
mod getters;
mod mouse;
mod setters;
mod window;

pub(crate) use bar::BarContent;
pub(crate) use getters::parse_color_string;

const MAX_PROPERTY_VALUE_LEN: u32 = 4096;
const WM_NAME: &str = "helium";

#[inline]
pub fn root_event_mask() -> xproto::EventMask {
    xproto::EventMask::SUBSTRUCTURE_REDIRECT
        | xproto::EventMask::SUBSTRUCTURE_NOTIFY
        | xproto::EventMask::STRUCTURE_NOTIFY
        | xproto::EventMask::PROPERTY_CHANGE
}

#[inline]
pub fn button_event_mask() -> xproto::EventMask {
    xproto::EventMask::BUTTON_PRESS
        | xproto::EventMask::BUTTON_RELEASE
        | xproto::EventMask::BUTTON_MOTION
}

#[inline]
pub fn mouse_event_mask() -> xproto::EventMask {
    button_event_mask() | xproto::EventMask::POINTER_MOTION
}

/// Events selected on a decoration. The client inside it is redirected like a root child.
#[inline]
pub fn decoration_event_mask() -> xproto::EventMask {
    xproto::EventMask::SUBSTRUCTURE_REDIRECT
        | xproto::EventMask::SUBSTRUCTURE_NOTIFY
        | button_event_mask()
}

#[inline]
pub fn bar_event_mask() -> xproto::EventMask {
    button_event_mask() | xproto::EventMask::EXPOSURE
}

pub struct Colors {
    focused: u32,
    unfocused: u32,
    title: u32,
}

/// Contains Xserver information and origins.
pub(crate) struct XWrap {
    conn: RustConnection,
    root: xproto::Window,
    cursors: XCursor,
    pub atoms: AtomCollection,

    colors: Colors,
    bar_style: bar::BarStyle,
    /// Last content drawn into each bar, replayed on expose.
    pub bars: HashMap<xproto::Window, BarContent>,
    /// Framed clients, in the order they were managed.
    pub managed_windows: Vec<xproto::Window>,
    /// The client inside each decoration.
    pub decorations: HashMap<xproto::Window, xproto::Window>,
    /// Root relative geometry of each framed client.
    pub client_geometry: HashMap<xproto::Window, xproto::Rectangle>,
    pub focused_window: xproto::Window,
    pub tag_labels: Vec<String>,

    _task_guard: oneshot::Receiver<()>,
    pub task_notify: Arc<Notify>,
}

impl XWrap {
    /// Connect to the X server and take over the root window.
    ///
    /// Must be called from within a tokio runtime, the connection is watched on a blocking task.
    ///
    /// # Errors
    ///
    /// Fails when the connection cannot be made or another window manager owns the root.
    pub fn new(config: &impl Config) -> Result<Self> {
        const SERVER: mio::Token = mio::Token(0);
        let (conn, display) = x11rb::connect(None)?;

        let fd = conn.stream().as_raw_fd();

        let (guard, _task_guard) = oneshot::channel::<()>();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();

        let mut poll = mio::Poll::new()?;
        let mut events = mio::Events::with_capacity(1);
        poll.registry().register(
            &mut mio::unix::SourceFd(&fd),
            SERVER,
            mio::Interest::READABLE,
        )?;
        let timeout = Duration::from_millis(100);
        tokio::task::spawn_blocking(move || loop {
            if guard.is_closed() {
                tracing::info!("x11rb socket closed");
                return;
            }

            if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                tracing::warn!("x11rb socket poll failed with {:?}", err);
                continue;
            }

            events
                .iter()
                .filter(|event| SERVER == event.token())
                .for_each(|_| notify.notify_one());
        });

        let atoms = AtomCollection::new(&conn)?.reply()?;
        let root = conn.setup().roots[display].root;
        let db = x11rb::resource_manager::new_from_default(&conn)?;
        let cursors = XCursor::new(&conn, display, &db)?;

        let colors = Colors {
            focused: alloc_color(&conn, display, &config.focused_bar_color())?,
            unfocused: alloc_color(&conn, display, &config.unfocused_bar_color())?,
            title: alloc_color(&conn, display, &config.title_color())?,
        };
        let bar_style = bar::BarStyle::new(&conn, root, &colors, config)?;

        let xw = Self {
            conn,
            root,
            cursors,
            atoms,

            colors,
            bar_style,
            bars: HashMap::new(),
            managed_windows: vec![],
            decorations: HashMap::new(),
            client_geometry: HashMap::new(),
            focused_window: root,
            tag_labels: config.create_list_of_tag_labels(),

            _task_guard,
            task_notify,
        };

        xw.become_wm()?;
        xw.init()?;
        Ok(xw)
    }

    /// Select substructure redirection on the root. Only one client may hold it.
    fn become_wm(&self) -> Result<()> {
        let attrs = xproto::ChangeWindowAttributesAux::new()
            .cursor(self.cursors.normal)
            .event_mask(root_event_mask());
        match xproto::change_window_attributes(&self.conn, self.root, &attrs)?.check() {
            Err(ReplyError::X11Error(err)) if err.error_kind == ErrorKind::Access => {
                Err(Error::AnotherWmRunning)
            }
            res => Ok(res?),
        }
    }

    fn init(&self) -> Result<()> {
        let root = self.root;

        // EWMH compliance.
        let supported: Vec<xproto::Atom> = self.atoms.net_supported();
        self.replace_property_u32(
            root,
            self.atoms.NetSupported,
            xproto::AtomEnum::ATOM.into(),
            &supported,
        )?;
        xproto::delete_property(&self.conn, root, self.atoms.NetClientList)?;

        // EWMH compliance for desktops.
        self.init_desktops_hints()?;

        self.sync()?;
        Ok(())
    }

    /// EWMH support used for pagers and bars such as polybar.
    pub fn init_desktops_hints(&self) -> Result<()> {
        let tag_labels = &self.tag_labels;
        let tag_length = u32::try_from(tag_labels.len())?;

        // Set the number of desktop.
        self.set_desktop_prop(&[tag_length], self.atoms.NetNumberOfDesktops)?;

        // Set a current desktop.
        self.set_desktop_prop(&[0_u32], self.atoms.NetCurrentDesktop)?;

        // Set desktop names.
        //
        // A list of null terminated strings, one for each label.
        let names: Vec<u8> = tag_labels
            .iter()
            .flat_map(|label| label.bytes().chain(std::iter::once(0)))
            .collect();
        self.set_desktop_prop_bytes(&names, self.atoms.NetDesktopNames, self.atoms.UTF8String)?;

        // Set the WM NAME.
        self.set_desktop_prop_bytes(
            WM_NAME.as_bytes(),
            self.atoms.NetWMName,
            self.atoms.UTF8String,
        )?;

        self.replace_property_u32(
            self.root,
            self.atoms.NetSupportingWmCheck,
            xproto::AtomEnum::WINDOW.into(),
            &[self.root],
        )?;
        Ok(())
    }

    /// Send a xevent atom for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    fn send_xevent_atom(&self, window: xproto::Window, atom: xproto::Atom) -> Result<bool> {
        if self.can_send_xevent_atom(window, atom)? {
            let msg = xproto::ClientMessageEvent::new(
                32,
                window,
                self.atoms.WMProtocols,
                [atom, x11rb::CURRENT_TIME, 0, 0, 0],
            );
            self.send_xevent(window, false, xproto::EventMask::NO_EVENT, &msg.serialize())?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Send a xevent for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_xevent(
        &self,
        window: xproto::Window,
        propagate: bool,
        mask: xproto::EventMask,
        event: &[u8],
    ) -> Result<()> {
        xproto::send_event(&self.conn, propagate, window, mask, pad_event(event))?;
        Ok(())
    }

    /// Returns whether a window can recieve a xevent atom.
    // `XGetWMProtocols`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMProtocols.html
    fn can_send_xevent_atom(&self, window: xproto::Window, atom: xproto::Atom) -> Result<bool> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            window,
            self.atoms.WMProtocols,
            xproto::AtomEnum::ATOM,
            0,
            MAX_PROPERTY_VALUE_LEN / 4,
        )?
        .reply()?;

        Ok(reply
            .value32()
            .is_some_and(|mut protocols| protocols.any(|protocol| protocol == atom)))
    }

    /// Stop the server from processing requests of other clients.
    pub fn grab_server(&self) -> Result<()> {
        xproto::grab_server(&self.conn)?;
        Ok(())
    }

    pub fn ungrab_server(&self) -> Result<()> {
        xproto::ungrab_server(&self.conn)?;
        self.flush()
    }

    /// Flush and sync the xserver.
    pub fn sync(&self) -> Result<()> {
        self.conn.sync()?;
        Ok(())
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}

/// Allocate a pixel for a `#RRGGBB` color in the default colormap.
fn alloc_color(conn: &RustConnection, display: usize, color: &str) -> Result<u32> {
    let colormap = conn.setup().roots[display].default_colormap;
    let (red, green, blue) = parse_color_string(color)?;
    let reply = xproto::alloc_color(conn, colormap, red, green, blue)?.reply()?;
    Ok(reply.pixel)
}

/// Events on the wire are 32 bytes, some serialize shorter.
fn pad_event(event: &[u8]) -> [u8; 32] {
    let mut data = [0u8; 32];
    let len = event.len().min(data.len());
    data[..len].copy_from_slice(&event[..len]);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_events_are_zero_padded() {
        let configure = xproto::ConfigureNotifyEvent {
            response_type: xproto::CONFIGURE_NOTIFY_EVENT,
            window: 7,
            width: 300,
            ..Default::default()
        };
        let bytes = configure.serialize();
        let data = pad_event(&bytes);
        assert_eq!(&data[..bytes.len()], &bytes[..]);
        assert!(data[bytes.len()..].iter().all(|b| *b == 0));
        assert_eq!(data[0], xproto::CONFIGURE_NOTIFY_EVENT);
    }

    #[test]
    fn full_events_are_kept_as_is() {
        let event = [0xab_u8; 32];
        assert_eq!(pad_event(&event), event);
    }
}
