use super::FrameId;

/// Whether a drag session is in flight, and for which frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    MovingWindow(FrameId),
    ResizingWindow(FrameId),
    #[default]
    Normal,
}

impl Mode {
    #[must_use]
    pub const fn frame(self) -> Option<FrameId> {
        match self {
            Self::MovingWindow(id) | Self::ResizingWindow(id) => Some(id),
            Self::Normal => None,
        }
    }
}
