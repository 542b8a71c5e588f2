use helium_core::models::{SizeHints, WindowType, Xyhw, XyhwBuilder};
use x11rb::{
    connection::Connection,
    properties::{WmHints, WmSizeHints},
    protocol::{xproto, Event},
};

use crate::error::{Error, Result};

use super::{XWrap, MAX_PROPERTY_VALUE_LEN};

impl XWrap {
    // Public functions.

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xproto::Window {
        self.root
    }

    /// Returns the next queued event without blocking.
    pub fn poll_next_event(&self) -> Result<Option<Event>> {
        Ok(self.conn.poll_for_event()?)
    }

    /// Returns the size limits in `WM_NORMAL_HINTS` of a window.
    pub fn get_hint_sizing(&self, window: xproto::Window) -> Result<SizeHints> {
        let Some(hints) = WmSizeHints::get(&self.conn, window, self.atoms.WMNormalHints)?.reply()?
        else {
            return Ok(SizeHints::default());
        };
        Ok(SizeHints {
            min: hints.min_size,
            max: hints.max_size,
        })
    }

    /// Returns the transient parent of a window.
    pub fn get_transient_for(&self, window: xproto::Window) -> Result<Option<xproto::Window>> {
        match xproto::get_property(
            &self.conn,
            false,
            window,
            xproto::AtomEnum::WM_TRANSIENT_FOR,
            xproto::AtomEnum::WINDOW,
            0,
            1,
        )?
        .reply()?
        .value32()
        {
            Some(mut i) => Ok(i.next().filter(|parent| *parent != x11rb::NONE)),
            None => Ok(None),
        }
    }

    /// Returns the attributes of a window.
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xproto::Window,
    ) -> Result<xproto::GetWindowAttributesReply> {
        Ok(xproto::get_window_attributes(&self.conn, window)?.reply()?)
    }

    /// Returns the geometry of a window.
    // `XGetGeometry`: https://tronche.com/gui/x/xlib/window-information/XGetGeometry.html
    pub fn get_window_geometry(&self, window: xproto::Window) -> Result<Xyhw> {
        let geo = xproto::get_geometry(&self.conn, window)?.reply()?;
        Ok(XyhwBuilder {
            x: geo.x.into(),
            y: geo.y.into(),
            h: geo.height.into(),
            w: geo.width.into(),
            ..XyhwBuilder::default()
        }
        .into())
    }

    /// Returns a windows name.
    pub fn get_window_name(&self, window: xproto::Window) -> Result<String> {
        match self.get_text_prop(window, self.atoms.NetWMName) {
            Ok(text) if !text.is_empty() => return Ok(text),
            _ => {}
        }
        // fallback to legacy name
        self.get_window_legacy_name(window)
    }

    /// Returns a `WM_NAME` (not `_NET`windows name).
    pub fn get_window_legacy_name(&self, window: xproto::Window) -> Result<String> {
        self.get_text_prop(window, xproto::AtomEnum::WM_NAME.into())
    }

    /// Returns the type of a window.
    pub fn get_window_type(&self, window: xproto::Window) -> Result<WindowType> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            window,
            self.atoms.NetWMWindowType,
            xproto::AtomEnum::ATOM,
            0,
            1,
        )?
        .reply()?;

        let Some(mut val) = reply.value32() else {
            return Ok(WindowType::Normal);
        };

        Ok(match val.next() {
            x if x == Some(self.atoms.NetWMWindowTypeDesktop) => WindowType::Desktop,
            x if x == Some(self.atoms.NetWMWindowTypeDock) => WindowType::Dock,
            x if x == Some(self.atoms.NetWMWindowTypeToolbar) => WindowType::Toolbar,
            x if x == Some(self.atoms.NetWMWindowTypeMenu) => WindowType::Menu,
            x if x == Some(self.atoms.NetWMWindowTypeUtility) => WindowType::Utility,
            x if x == Some(self.atoms.NetWMWindowTypeSplash) => WindowType::Splash,
            x if x == Some(self.atoms.NetWMWindowTypeDialog) => WindowType::Dialog,
            _ => WindowType::Normal,
        })
    }

    /// Returns the `WM_HINTS` of a window.
    // `XGetWMHints`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMHints.html
    pub fn get_wmhints(&self, window: xproto::Window) -> Result<Option<WmHints>> {
        Ok(WmHints::get(&self.conn, window)?.reply()?)
    }

    // Internal functions.

    /// Returns a text property for a window.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xproto::Window, atom: xproto::Atom) -> Result<String> {
        let prop = xproto::get_property(
            &self.conn,
            false,
            window,
            atom,
            xproto::AtomEnum::ANY,
            0,
            MAX_PROPERTY_VALUE_LEN,
        )?
        .reply()?;
        // `WM_NAME` may be Latin-1, keep what can be shown.
        Ok(String::from_utf8_lossy(&prop.value).into_owned())
    }
}

/// Parses a color string written in the hex format #RRGGBB to a tuple of u16.
/// Since colors in hex format are represented using 8 bits, we need to adjust them to represent
/// the right proportion of color on a 16 bits value by multiplying by 257
pub(crate) fn parse_color_string(color: &str) -> Result<(u16, u16, u16)> {
    let invalid = || Error::InvalidColor(color.to_owned());
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    Ok((
        u16::from_str_radix(&hex[0..2], 16)? * 257,
        u16::from_str_radix(&hex[2..4], 16)? * 257,
        u16::from_str_radix(&hex[4..6], 16)? * 257,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_scaled_to_sixteen_bits() {
        assert_eq!(
            parse_color_string("#c1c1c1").unwrap(),
            (0xc1c1, 0xc1c1, 0xc1c1)
        );
        assert_eq!(parse_color_string("#ff0000").unwrap(), (0xffff, 0, 0));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!(matches!(
            parse_color_string("c1c1c1"),
            Err(Error::InvalidColor(_))
        ));
        assert!(matches!(
            parse_color_string("#c1c1"),
            Err(Error::InvalidColor(_))
        ));
        assert!(matches!(parse_color_string("#gg0000"), Err(Error::ParseInt(_))));
    }
}
