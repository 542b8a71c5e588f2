//! Window handles shared between the core and the display servers.
use std::fmt::Debug;
use std::hash::Hash;

/// A trait which backend specific window handles need to implement.
pub trait Handle: Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + 'static {}

/// A backend-agnostic handle to a window used to identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle<H>(pub H)
where
    H: Handle;

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}
