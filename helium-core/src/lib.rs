//! Frame, focus and tag bookkeeping for the helium window manager.
// We warn on clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;

pub use command::Command;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, PointerEvent};
pub use display_servers::{DisplayServer, ServerGrab};
pub use errors::{HeliumError, Result};
pub use models::Frame;
pub use models::FrameId;
pub use models::FrameState;
pub use models::Manager;
pub use models::Mode;
pub use state::State;
