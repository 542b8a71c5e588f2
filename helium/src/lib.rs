//! Configuration and logging for the helium window manager binary.
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod utils;

pub use config::*;
