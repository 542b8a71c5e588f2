use helium_core::models::TagId;
use x11rb::{protocol::xproto, wrapper::ConnectionExt};

use crate::error::Result;
use crate::xatom::WMStateWindowState;

use super::XWrap;

impl XWrap {
    // Public functions.

    /// Replaces a window property.
    pub fn replace_property_u32(
        &self,
        window: xproto::Window,
        property: xproto::Atom,
        r#type: xproto::Atom,
        data: &[u32],
    ) -> Result<()> {
        self.conn.change_property32(
            xproto::PropMode::REPLACE,
            window,
            property,
            r#type,
            data,
        )?;
        Ok(())
    }

    /// Sets the client list to the currently managed windows.
    pub fn set_client_list(&self) -> Result<()> {
        self.replace_property_u32(
            self.root,
            self.atoms.NetClientList,
            xproto::AtomEnum::WINDOW.into(),
            &self.managed_windows,
        )
    }

    /// Sets the current desktop.
    pub fn set_current_desktop(&self, tag: TagId) -> Result<()> {
        let index = u32::try_from(tag.saturating_sub(1))?;
        self.set_desktop_prop(&[index], self.atoms.NetCurrentDesktop)
    }

    /// Sets the desktop of a window.
    pub fn set_window_desktop(&self, window: xproto::Window, tag: TagId) -> Result<()> {
        let index = u32::try_from(tag.saturating_sub(1))?;
        self.replace_property_u32(
            window,
            self.atoms.NetWMDesktop,
            xproto::AtomEnum::CARDINAL.into(),
            &[index],
        )
    }

    /// Sets a desktop property.
    pub fn set_desktop_prop(&self, data: &[u32], atom: xproto::Atom) -> Result<()> {
        self.replace_property_u32(self.root, atom, xproto::AtomEnum::CARDINAL.into(), data)
    }

    /// Sets a desktop property made of bytes, such as a string.
    pub fn set_desktop_prop_bytes(
        &self,
        value: &[u8],
        atom: xproto::Atom,
        encoding: xproto::Atom,
    ) -> Result<()> {
        self.conn.change_property8(
            xproto::PropMode::REPLACE,
            self.root,
            atom,
            encoding,
            value,
        )?;
        Ok(())
    }

    /// Sets the `WM_STATE` of a window.
    pub fn set_wm_state(&self, window: xproto::Window, state: WMStateWindowState) -> Result<()> {
        // The second field is the icon window, helium has none.
        self.replace_property_u32(
            window,
            self.atoms.WMState,
            self.atoms.WMState,
            &[state.into(), x11rb::NONE],
        )
    }

    /// Sets the active window hint for pagers.
    pub fn set_active_window(&self, window: xproto::Window) -> Result<()> {
        self.replace_property_u32(
            self.root,
            self.atoms.NetActiveWindow,
            xproto::AtomEnum::WINDOW.into(),
            &[window],
        )
    }

    /// Applies a configure request to a window as it was asked.
    pub fn set_window_config(
        &self,
        window: xproto::Window,
        window_changes: &xproto::ConfigureWindowAux,
    ) -> Result<()> {
        xproto::configure_window(&self.conn, window, window_changes)?;
        Ok(())
    }
}
