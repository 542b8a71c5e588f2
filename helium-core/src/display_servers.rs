#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Handle, SizeHints, WindowAttributes, WindowHandle, WindowType, Xyhw};
use crate::DisplayEvent;

use futures::prelude::*;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

pub trait DisplayServer<H: Handle> {
    /// Connect and become the window manager.
    ///
    /// # Errors
    ///
    /// Fails when the connection cannot be set up.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    /// Carry out a deferred effect. Failures are logged by the display server.
    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);

    /// Stop processing requests from other clients. Prefer [`ServerGrab`], which releases
    /// the grab on every exit path.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent.
    fn grab_server(&mut self) -> Result<()>;

    /// # Errors
    ///
    /// Fails when the request cannot be sent.
    fn ungrab_server(&mut self) -> Result<()>;

    // The queries below are used while creating a frame and run synchronously.

    /// # Errors
    ///
    /// Fails when the window is gone or the reply cannot be read.
    fn window_attributes(&self, window: WindowHandle<H>) -> Result<WindowAttributes>;

    /// # Errors
    ///
    /// Fails when the window is gone or the reply cannot be read.
    fn window_geometry(&self, window: WindowHandle<H>) -> Result<Xyhw>;

    /// # Errors
    ///
    /// Fails when the window is gone or the reply cannot be read.
    fn window_type(&self, window: WindowHandle<H>) -> Result<WindowType>;

    /// # Errors
    ///
    /// Fails when the window is gone or the reply cannot be read.
    fn transient_for(&self, window: WindowHandle<H>) -> Result<Option<WindowHandle<H>>>;

    /// # Errors
    ///
    /// Fails when the window is gone or the reply cannot be read.
    fn size_hints(&self, window: WindowHandle<H>) -> Result<SizeHints>;

    /// # Errors
    ///
    /// Fails when the window is gone or the reply cannot be read.
    fn window_title(&self, window: WindowHandle<H>) -> Result<Option<String>>;

    /// Create an unmapped decoration window with the given geometry.
    ///
    /// # Errors
    ///
    /// Fails when the window cannot be allocated.
    fn create_decoration(&mut self, geometry: &Xyhw) -> Result<WindowHandle<H>>;

    /// Create an unmapped bar across the top of `decoration`.
    ///
    /// # Errors
    ///
    /// Fails when the window cannot be allocated.
    fn create_bar(
        &mut self,
        decoration: WindowHandle<H>,
        width: i32,
        height: i32,
    ) -> Result<WindowHandle<H>>;

    /// # Errors
    ///
    /// Fails when either window is gone.
    fn reparent(
        &mut self,
        window: WindowHandle<H>,
        parent: WindowHandle<H>,
        x: i32,
        y: i32,
    ) -> Result<()>;

    /// # Errors
    ///
    /// Fails when the request cannot be sent.
    fn destroy_window(&mut self, window: WindowHandle<H>) -> Result<()>;
}

/// Holds the server grab until dropped.
pub struct ServerGrab<'a, H: Handle, S: DisplayServer<H>> {
    server: &'a mut S,
    marker: PhantomData<H>,
}

impl<'a, H: Handle, S: DisplayServer<H>> ServerGrab<'a, H, S> {
    /// # Errors
    ///
    /// Fails when the grab cannot be acquired. Nothing is held in that case.
    pub fn new(server: &'a mut S) -> Result<Self> {
        server.grab_server()?;
        Ok(Self {
            server,
            marker: PhantomData,
        })
    }
}

impl<H: Handle, S: DisplayServer<H>> Deref for ServerGrab<'_, H, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.server
    }
}

impl<H: Handle, S: DisplayServer<H>> DerefMut for ServerGrab<'_, H, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.server
    }
}

impl<H: Handle, S: DisplayServer<H>> Drop for ServerGrab<'_, H, S> {
    fn drop(&mut self) {
        if let Err(err) = self.server.ungrab_server() {
            tracing::error!("Failed to release the server grab: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    #[test]
    fn grab_is_released_when_dropped() {
        let mut server = MockDisplayServer::default();
        {
            let grab = ServerGrab::<MockHandle, _>::new(&mut server).unwrap();
            assert_eq!(grab.grab_depth, 1);
        }
        assert_eq!(server.grab_depth, 0);
        assert_eq!(server.grab_count, 1);
    }

    #[test]
    fn failed_grab_holds_nothing() {
        let mut server = MockDisplayServer {
            fail_grab: true,
            ..MockDisplayServer::default()
        };
        assert!(ServerGrab::<MockHandle, _>::new(&mut server).is_err());
        assert_eq!(server.grab_depth, 0);
    }
}
