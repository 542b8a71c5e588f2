//! Error handling and reporting for this backend

use std::num::{ParseIntError, TryFromIntError};

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Another window manager is already running.")]
    AnotherWmRunning,
    #[error("Invalid color {0:?}, expected #RRGGBB.")]
    InvalidColor(String),

    // Conversions
    #[error("Unable to parse a color component: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Value does not fit the protocol field: {0}")]
    TryFromInt(#[from] TryFromIntError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Errors from x11rb
    #[error("Unable to connect to the X server: {0}")]
    ConnectError(#[from] ConnectError),

    #[error("Connection error occured: {0}")]
    ConnectionError(#[from] ConnectionError),

    #[error("Unable to parse reply: {0}")]
    ReplyError(#[from] ReplyError),

    #[error("Unable to parse reply: {0}")]
    ReplyOrIdError(#[from] ReplyOrIdError),
}
