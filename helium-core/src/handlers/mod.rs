mod button_handler;
pub mod command_handler;
pub mod display_event_handler;
mod drag_handler;
mod focus_handler;
mod tag_handler;
mod window_handler;

use super::command::Command;
use super::config::Config;
use super::models::{Frame, FrameId, Manager, Mode, WindowHandle, WindowRole};
use super::DisplayEvent;
