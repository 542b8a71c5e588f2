//! x11rb backend for helium

use std::pin::Pin;

use futures::Future;
use helium_core::{
    models::{
        Direction, Handle, SizeHints, TagId, WindowAttributes, WindowHandle, WindowType, Xyhw,
    },
    Config, DisplayAction, DisplayEvent, DisplayServer, HeliumError,
};
use x11rb::protocol::xproto;

use crate::xwrap::XWrap;
use error::Result;

pub mod error;
mod event_translate;
mod xatom;
mod xcursors;
mod xwrap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct X11rbWindowHandle(pub xproto::Window);
impl Handle for X11rbWindowHandle {}

type X11rbHandle = WindowHandle<X11rbWindowHandle>;

pub struct X11rbDisplayServer {
    xw: XWrap,
}

impl DisplayServer<X11rbWindowHandle> for X11rbDisplayServer {
    fn new(config: &impl Config) -> helium_core::Result<Self> {
        let xw = XWrap::new(config).map_err(HeliumError::display_server)?;
        tracing::debug!("Connected, managing root {}", xw.get_default_root());
        Ok(Self { xw })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<X11rbWindowHandle>> {
        let mut events = Vec::new();

        loop {
            match self.xw.poll_next_event() {
                Ok(Some(ev)) => {
                    if let Some(ev) = event_translate::translate(ev, &mut self.xw) {
                        events.push(ev);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = ?e, "An error occurred when polling for events.");
                    break;
                }
            }
        }

        event_translate::compress(&mut events);
        events
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<X11rbWindowHandle>,
    ) -> Option<DisplayEvent<X11rbWindowHandle>> {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &mut self.xw;
        let event: Result<Option<DisplayEvent<X11rbWindowHandle>>> = match act.clone() {
            DisplayAction::MapWindow(h) => from_map_window(xw, h),
            DisplayAction::MoveToTop(h) => from_move_to_top(xw, h),
            DisplayAction::ShowFrame { decoration, client } => {
                from_show_frame(xw, decoration, client)
            }
            DisplayAction::HideFrame(h) => from_hide_frame(xw, h),
            DisplayAction::HideBar(h) => from_unmap_window(xw, h),
            DisplayAction::ShowBar(h) => from_map_window(xw, h),
            DisplayAction::ConfigureFrame {
                decoration,
                client,
                bar,
                geometry,
                bar_height,
            } => from_configure_frame(xw, decoration, client, bar, &geometry, bar_height),
            DisplayAction::WindowTakeFocus { client, decoration } => {
                from_window_take_focus(xw, client, decoration)
            }
            DisplayAction::Unfocus => from_unfocus(xw),
            DisplayAction::KillWindow(h) => from_kill_window(xw, h),
            DisplayAction::ReadyToMoveWindow(h) => from_ready_to_move_window(xw, h),
            DisplayAction::ReadyToResizeWindow(h, direction) => {
                from_ready_to_resize_window(xw, h, direction)
            }
            DisplayAction::NormalMode => from_normal_mode(xw),
            DisplayAction::DestroyFrame {
                decoration,
                client,
                restore,
            } => from_destroy_frame(xw, decoration, client, restore),
            DisplayAction::SetCurrentTag(t) => from_set_current_tag(xw, t),
            DisplayAction::SetWindowTag(h, t) => from_set_window_tag(xw, h, t),
            DisplayAction::RenderBar {
                bar,
                focused,
                title,
                width,
            } => from_render_bar(xw, bar, focused, title, width),
        };
        match event {
            Ok(ev) => {
                if ev.is_some() {
                    tracing::trace!("DisplayEvent: {:?}", ev);
                }
                ev
            }
            Err(e) => {
                tracing::error!(action = ?act, error = ?e, "Error when processing a display action.");
                None
            }
        }
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {
        if let Err(e) = self.xw.flush() {
            tracing::error!(error = ?e, "Error when flushing the connection.");
        }
    }

    fn grab_server(&mut self) -> helium_core::Result<()> {
        self.xw.grab_server().map_err(HeliumError::display_server)
    }

    fn ungrab_server(&mut self) -> helium_core::Result<()> {
        self.xw.ungrab_server().map_err(HeliumError::display_server)
    }

    fn window_attributes(&self, window: X11rbHandle) -> helium_core::Result<WindowAttributes> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        let attrs = self
            .xw
            .get_window_attrs(window)
            .map_err(HeliumError::display_server)?;
        Ok(WindowAttributes {
            override_redirect: attrs.override_redirect,
        })
    }

    fn window_geometry(&self, window: X11rbHandle) -> helium_core::Result<Xyhw> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        self.xw
            .get_window_geometry(window)
            .map_err(HeliumError::display_server)
    }

    fn window_type(&self, window: X11rbHandle) -> helium_core::Result<WindowType> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        self.xw
            .get_window_type(window)
            .map_err(HeliumError::display_server)
    }

    fn transient_for(&self, window: X11rbHandle) -> helium_core::Result<Option<X11rbHandle>> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        let parent = self
            .xw
            .get_transient_for(window)
            .map_err(HeliumError::display_server)?;
        Ok(parent.map(|parent| WindowHandle(X11rbWindowHandle(parent))))
    }

    fn size_hints(&self, window: X11rbHandle) -> helium_core::Result<SizeHints> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        self.xw
            .get_hint_sizing(window)
            .map_err(HeliumError::display_server)
    }

    fn window_title(&self, window: X11rbHandle) -> helium_core::Result<Option<String>> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        let title = self
            .xw
            .get_window_name(window)
            .map_err(HeliumError::display_server)?;
        Ok(Some(title).filter(|title| !title.is_empty()))
    }

    fn create_decoration(&mut self, geometry: &Xyhw) -> helium_core::Result<X11rbHandle> {
        let decoration = self
            .xw
            .create_decoration(geometry)
            .map_err(HeliumError::display_server)?;
        Ok(WindowHandle(X11rbWindowHandle(decoration)))
    }

    fn create_bar(
        &mut self,
        decoration: X11rbHandle,
        width: i32,
        height: i32,
    ) -> helium_core::Result<X11rbHandle> {
        let WindowHandle(X11rbWindowHandle(decoration)) = decoration;
        let bar = self
            .xw
            .create_bar(decoration, width, height)
            .map_err(HeliumError::display_server)?;
        Ok(WindowHandle(X11rbWindowHandle(bar)))
    }

    fn reparent(
        &mut self,
        window: X11rbHandle,
        parent: X11rbHandle,
        x: i32,
        y: i32,
    ) -> helium_core::Result<()> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        let WindowHandle(X11rbWindowHandle(parent)) = parent;
        self.xw
            .frame_client(window, parent, x, y)
            .map_err(HeliumError::display_server)
    }

    fn destroy_window(&mut self, window: X11rbHandle) -> helium_core::Result<()> {
        let WindowHandle(X11rbWindowHandle(window)) = window;
        self.xw
            .destroy_window(window)
            .map_err(HeliumError::display_server)
    }
}

// Display actions.
fn from_map_window(
    xw: &mut XWrap,
    handle: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(window)) = handle;
    xw.map_window(window)?;
    Ok(None)
}

fn from_unmap_window(
    xw: &mut XWrap,
    handle: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(window)) = handle;
    xw.unmap_window(window)?;
    Ok(None)
}

fn from_hide_frame(
    xw: &mut XWrap,
    decoration: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(decoration)) = decoration;
    xw.hide_frame(decoration)?;
    Ok(None)
}

fn from_move_to_top(
    xw: &mut XWrap,
    handle: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(window)) = handle;
    xw.move_to_top(window)?;
    Ok(None)
}

fn from_show_frame(
    xw: &mut XWrap,
    decoration: X11rbHandle,
    client: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(decoration)) = decoration;
    let WindowHandle(X11rbWindowHandle(client)) = client;
    xw.show_frame(decoration, client)?;
    Ok(None)
}

fn from_configure_frame(
    xw: &mut XWrap,
    decoration: X11rbHandle,
    client: X11rbHandle,
    bar: Option<X11rbHandle>,
    geometry: &Xyhw,
    bar_height: i32,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(decoration)) = decoration;
    let WindowHandle(X11rbWindowHandle(client)) = client;
    let bar = bar.map(|WindowHandle(X11rbWindowHandle(bar))| bar);
    xw.configure_frame(decoration, client, bar, geometry, bar_height)?;
    Ok(None)
}

fn from_window_take_focus(
    xw: &mut XWrap,
    client: X11rbHandle,
    decoration: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(client)) = client;
    let WindowHandle(X11rbWindowHandle(decoration)) = decoration;
    tracing::debug!("Focusing client {} in decoration {}", client, decoration);
    xw.window_take_focus(client)?;
    Ok(None)
}

fn from_unfocus(xw: &mut XWrap) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    xw.unfocus()?;
    Ok(None)
}

fn from_kill_window(
    xw: &mut XWrap,
    handle: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(window)) = handle;
    xw.kill_window(window)?;
    Ok(None)
}

fn from_ready_to_move_window(
    xw: &mut XWrap,
    handle: X11rbHandle,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    tracing::trace!("Move grab for {:?}", handle);
    xw.ready_to_move()?;
    Ok(None)
}

fn from_ready_to_resize_window(
    xw: &mut XWrap,
    handle: X11rbHandle,
    direction: Direction,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    tracing::trace!("Resize grab for {:?} towards {:?}", handle, direction);
    xw.ready_to_resize(direction)?;
    Ok(None)
}

fn from_normal_mode(xw: &mut XWrap) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    xw.ungrab_pointer()?;
    Ok(None)
}

fn from_destroy_frame(
    xw: &mut XWrap,
    decoration: X11rbHandle,
    client: X11rbHandle,
    restore: Option<(i32, i32)>,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(decoration)) = decoration;
    let WindowHandle(X11rbWindowHandle(client)) = client;
    xw.release_client(decoration, client, restore)?;
    Ok(None)
}

fn from_set_current_tag(
    xw: &mut XWrap,
    tag: TagId,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    xw.set_current_desktop(tag)?;
    Ok(None)
}

fn from_set_window_tag(
    xw: &mut XWrap,
    handle: X11rbHandle,
    tag: TagId,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(window)) = handle;
    xw.set_window_desktop(window, tag)?;
    Ok(None)
}

fn from_render_bar(
    xw: &mut XWrap,
    bar: X11rbHandle,
    focused: bool,
    title: Option<String>,
    width: i32,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    let WindowHandle(X11rbWindowHandle(bar)) = bar;
    xw.render_bar(bar, focused, title, width)?;
    Ok(None)
}
