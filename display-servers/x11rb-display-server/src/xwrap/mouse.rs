//! Pointer grabs used by click-to-focus and drags.
use x11rb::protocol::xproto;

use super::{mouse_event_mask, XWrap};

use crate::error::Result;

impl XWrap {
    /// Grabs every click on a client synchronously, so the click can be seen before the client
    /// gets it.
    pub fn grab_mouse_clicks(&self, window: xproto::Window) -> Result<()> {
        xproto::grab_button(
            &self.conn,
            false,
            window,
            xproto::EventMask::BUTTON_PRESS,
            xproto::GrabMode::SYNC,
            xproto::GrabMode::ASYNC,
            x11rb::NONE,
            x11rb::NONE,
            xproto::ButtonIndex::ANY,
            xproto::ModMask::ANY,
        )?;
        Ok(())
    }

    /// Cleans all currently grabbed buttons of a window.
    pub fn ungrab_buttons(&self, window: xproto::Window) -> Result<()> {
        xproto::ungrab_button(
            &self.conn,
            xproto::ButtonIndex::ANY,
            window,
            xproto::ModMask::ANY,
        )?;
        Ok(())
    }

    /// Hands a click frozen by [`XWrap::grab_mouse_clicks`] on to the client.
    pub fn replay_click(&self) -> Result<()> {
        xproto::allow_events(
            &self.conn,
            xproto::Allow::REPLAY_POINTER,
            x11rb::CURRENT_TIME,
        )?;
        Ok(())
    }

    /// Grabs the cursor and sets its visual.
    pub fn grab_pointer(&self, cursor: xproto::Cursor) -> Result<()> {
        xproto::grab_pointer(
            &self.conn,
            false,
            self.root,
            mouse_event_mask(),
            xproto::GrabMode::ASYNC,
            xproto::GrabMode::ASYNC,
            x11rb::NONE,
            cursor,
            x11rb::CURRENT_TIME,
        )?;
        Ok(())
    }

    /// Ungrab the cursor.
    pub fn ungrab_pointer(&self) -> Result<()> {
        xproto::ungrab_pointer(&self.conn, x11rb::CURRENT_TIME)?;
        Ok(())
    }

    pub fn ready_to_move(&self) -> Result<()> {
        self.grab_pointer(self.cursors.move_)
    }

    pub fn ready_to_resize(&self, direction: helium_core::models::Direction) -> Result<()> {
        self.grab_pointer(self.cursors.resize(direction))
    }
}
