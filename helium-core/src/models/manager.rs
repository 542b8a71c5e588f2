use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Connects to the display server.
    ///
    /// # Errors
    ///
    /// Fails when the display server cannot be set up, for example when another window manager
    /// is already running.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        Ok(Self {
            state: State::new(&config),
            config,
            display_server,
        })
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer,
    >
{
    pub fn new_test() -> Self {
        Self::new_test_with(crate::config::TestConfig::default())
    }

    pub fn new_test_with(config: crate::config::TestConfig) -> Self {
        let display_server = crate::display_servers::MockDisplayServer::default();
        Self {
            state: State::new(&config),
            config,
            display_server,
        }
    }
}
