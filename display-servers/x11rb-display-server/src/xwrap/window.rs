//! Frame windows and the calls that map, place and focus them.
use helium_core::models::Xyhw;
use x11rb::{connection::Connection, protocol::xproto, x11_utils::Serialize};

use super::{bar_event_mask, decoration_event_mask, BarContent, XWrap};
use crate::error::Result;
use crate::xatom::WMStateWindowState;

impl XWrap {
    /// Creates an unmapped decoration on the root.
    pub fn create_decoration(&self, geometry: &Xyhw) -> Result<xproto::Window> {
        let window = self.conn.generate_id()?;
        let attrs = xproto::CreateWindowAux::new()
            .background_pixel(self.colors.unfocused)
            .event_mask(decoration_event_mask());
        xproto::create_window(
            &self.conn,
            x11rb::COPY_DEPTH_FROM_PARENT,
            window,
            self.root,
            i16::try_from(geometry.x())?,
            i16::try_from(geometry.y())?,
            u16::try_from(geometry.w())?,
            u16::try_from(geometry.h())?,
            0,
            xproto::WindowClass::INPUT_OUTPUT,
            x11rb::COPY_FROM_PARENT,
            &attrs,
        )?
        .check()?;
        Ok(window)
    }

    /// Creates an unmapped bar across the top of a decoration.
    pub fn create_bar(
        &mut self,
        decoration: xproto::Window,
        width: i32,
        height: i32,
    ) -> Result<xproto::Window> {
        let window = self.conn.generate_id()?;
        let attrs = xproto::CreateWindowAux::new()
            .background_pixel(self.colors.unfocused)
            .event_mask(bar_event_mask());
        xproto::create_window(
            &self.conn,
            x11rb::COPY_DEPTH_FROM_PARENT,
            window,
            decoration,
            0,
            0,
            u16::try_from(width.max(1))?,
            u16::try_from(height.max(1))?,
            0,
            xproto::WindowClass::INPUT_OUTPUT,
            x11rb::COPY_FROM_PARENT,
            &attrs,
        )?
        .check()?;
        self.bars.insert(
            window,
            BarContent {
                decoration,
                focused: false,
                title: None,
                width,
            },
        );
        Ok(window)
    }

    /// Moves a client into its decoration and starts managing it.
    pub fn frame_client(
        &mut self,
        client: xproto::Window,
        decoration: xproto::Window,
        x: i32,
        y: i32,
    ) -> Result<()> {
        xproto::reparent_window(
            &self.conn,
            client,
            decoration,
            i16::try_from(x)?,
            i16::try_from(y)?,
        )?
        .check()?;
        // Keep the client alive if helium goes away without releasing it.
        xproto::change_save_set(&self.conn, xproto::SetMode::INSERT, client)?;
        self.subscribe_to_window_events(client)?;
        self.grab_mouse_clicks(client)?;
        self.set_wm_state(client, WMStateWindowState::Normal)?;
        self.managed_windows.push(client);
        self.decorations.insert(decoration, client);
        self.set_client_list()
    }

    /// Hands a client back to the root and drops its decoration.
    pub fn release_client(
        &mut self,
        decoration: xproto::Window,
        client: xproto::Window,
        restore: Option<(i32, i32)>,
    ) -> Result<()> {
        if self.managed_windows.contains(&client) {
            self.managed_windows.retain(|w| *w != client);
            self.set_client_list()?;
        }
        self.client_geometry.remove(&client);
        self.decorations.remove(&decoration);
        if self.focused_window == client {
            self.focused_window = self.root;
        }
        if let Some((x, y)) = restore {
            self.ungrab_buttons(client)?;
            self.unsubscribe_from_window_events(client)?;
            xproto::reparent_window(
                &self.conn,
                client,
                self.root,
                i16::try_from(x)?,
                i16::try_from(y)?,
            )?;
            xproto::change_save_set(&self.conn, xproto::SetMode::DELETE, client)?;
            self.set_wm_state(client, WMStateWindowState::Withdrawn)?;
        }
        self.destroy_window(decoration)
    }

    /// Destroys a window created by helium, along with its children.
    pub fn destroy_window(&mut self, window: xproto::Window) -> Result<()> {
        self.bars
            .retain(|bar, content| *bar != window && content.decoration != window);
        xproto::destroy_window(&self.conn, window)?;
        Ok(())
    }

    /// Maps a window.
    pub fn map_window(&self, window: xproto::Window) -> Result<()> {
        xproto::map_window(&self.conn, window)?;
        Ok(())
    }

    /// Unmaps a window.
    pub fn unmap_window(&self, window: xproto::Window) -> Result<()> {
        xproto::unmap_window(&self.conn, window)?;
        Ok(())
    }

    /// Maps a decoration with its client.
    pub fn show_frame(&self, decoration: xproto::Window, client: xproto::Window) -> Result<()> {
        self.map_window(client)?;
        self.map_window(decoration)?;
        self.set_wm_state(client, WMStateWindowState::Normal)
    }

    /// Unmaps a decoration. The client inside stays mapped and becomes iconic.
    pub fn hide_frame(&self, decoration: xproto::Window) -> Result<()> {
        self.unmap_window(decoration)?;
        match self.decorations.get(&decoration) {
            Some(client) => self.set_wm_state(*client, WMStateWindowState::Iconic),
            None => Ok(()),
        }
    }

    /// Places a decoration and fits the bar and client inside it.
    pub fn configure_frame(
        &mut self,
        decoration: xproto::Window,
        client: xproto::Window,
        bar: Option<xproto::Window>,
        geometry: &Xyhw,
        bar_height: i32,
    ) -> Result<()> {
        let client_height = (geometry.h() - bar_height).max(1);
        self.move_resize_window(
            decoration,
            geometry.x(),
            geometry.y(),
            u32::try_from(geometry.w())?,
            u32::try_from(geometry.h())?,
        )?;
        self.move_resize_window(
            client,
            0,
            bar_height,
            u32::try_from(geometry.w())?,
            u32::try_from(client_height)?,
        )?;
        if let Some(bar) = bar {
            self.move_resize_window(
                bar,
                0,
                0,
                u32::try_from(geometry.w())?,
                u32::try_from(bar_height.max(1))?,
            )?;
        }
        let rect = xproto::Rectangle {
            x: i16::try_from(geometry.x())?,
            y: i16::try_from(geometry.y() + bar_height)?,
            width: u16::try_from(geometry.w())?,
            height: u16::try_from(client_height)?,
        };
        self.client_geometry.insert(client, rect);
        self.configure_window(client, rect)
    }

    /// Send a `ConfigureNotify` with the root relative position of a client, as a reparenting
    /// window manager must after moving it.
    pub fn configure_window(&self, window: xproto::Window, rect: xproto::Rectangle) -> Result<()> {
        let configure_event = xproto::ConfigureNotifyEvent {
            response_type: xproto::CONFIGURE_NOTIFY_EVENT,
            event: window,
            window,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            border_width: 0,
            above_sibling: x11rb::NONE,
            override_redirect: false,
            ..Default::default()
        };
        self.send_xevent(
            window,
            false,
            xproto::EventMask::STRUCTURE_NOTIFY,
            &configure_event.serialize(),
        )
    }

    pub fn move_resize_window(
        &self,
        window: xproto::Window,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> Result<()> {
        let attrs = xproto::ConfigureWindowAux {
            x: Some(x),
            y: Some(y),
            width: Some(w),
            height: Some(h),
            ..Default::default()
        };
        xproto::configure_window(&self.conn, window, &attrs)?;
        Ok(())
    }

    /// Raise a window.
    pub fn move_to_top(&self, window: xproto::Window) -> Result<()> {
        let attrs = xproto::ConfigureWindowAux {
            stack_mode: Some(xproto::StackMode::ABOVE),
            ..Default::default()
        };
        xproto::configure_window(&self.conn, window, &attrs)?;
        Ok(())
    }

    /// Makes a client take focus.
    pub fn window_take_focus(&mut self, client: xproto::Window) -> Result<()> {
        let never_focus = match self.get_wmhints(client) {
            Ok(Some(hints)) => !hints.input.unwrap_or(true),
            _ => false,
        };
        self.focused_window = client;
        self.focus(client, never_focus)
    }

    /// Focuses a window.
    pub fn focus(&self, window: xproto::Window, never_focus: bool) -> Result<()> {
        if !never_focus {
            xproto::set_input_focus(
                &self.conn,
                xproto::InputFocus::POINTER_ROOT,
                window,
                x11rb::CURRENT_TIME,
            )?;
        }
        self.set_active_window(window)?;
        // Tell the window to take focus
        self.send_xevent_atom(window, self.atoms.WMTakeFocus)?;
        Ok(())
    }

    /// Unfocuses all windows.
    pub fn unfocus(&mut self) -> Result<()> {
        self.focused_window = self.root;
        xproto::set_input_focus(
            &self.conn,
            xproto::InputFocus::POINTER_ROOT,
            self.root,
            x11rb::CURRENT_TIME,
        )?;
        self.set_active_window(x11rb::NONE)
    }

    /// Asks a window to close. Windows without `WM_DELETE_WINDOW` are left alone.
    pub fn kill_window(&self, window: xproto::Window) -> Result<()> {
        if !self.send_xevent_atom(window, self.atoms.WMDelete)? {
            tracing::warn!(
                "Window {} does not support WM_DELETE_WINDOW, it is left open",
                window
            );
        }
        Ok(())
    }

    /// Subscribe to the wanted events of a client.
    pub fn subscribe_to_window_events(&self, window: xproto::Window) -> Result<()> {
        let attrs = xproto::ChangeWindowAttributesAux::new()
            .event_mask(xproto::EventMask::PROPERTY_CHANGE);
        xproto::change_window_attributes(&self.conn, window, &attrs)?;
        Ok(())
    }

    pub fn unsubscribe_from_window_events(&self, window: xproto::Window) -> Result<()> {
        let attrs = xproto::ChangeWindowAttributesAux::new().event_mask(xproto::EventMask::NO_EVENT);
        xproto::change_window_attributes(&self.conn, window, &attrs)?;
        Ok(())
    }
}
