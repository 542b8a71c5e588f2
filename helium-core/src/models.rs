//! Objects (such as frames) used to build helium.
mod button;
mod focus_queue;
mod frame;
mod manager;
mod mode;
mod registry;
mod size_hints;
mod tag;
mod window;
mod window_type;
mod xyhw;

pub use button::Button;
pub use focus_queue::FocusQueue;
pub use frame::direction_from_point;
pub use frame::frame_geometry;
pub use frame::{Direction, DragKind, Frame, FrameId, FrameState};
pub use manager::Manager;
pub use mode::Mode;
pub use registry::{WindowRegistry, WindowRole};
pub use size_hints::{SizeHints, WindowAttributes};
pub use tag::{Tag, Tags};
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::WindowHandle;
pub use window_type::WindowType;
pub use xyhw::Xyhw;
pub use xyhw::XyhwBuilder;

pub type TagId = usize;
