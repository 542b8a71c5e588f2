use serde::{Deserialize, Serialize};

/// A pointer button, as reported by the display server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
    Other(u8),
}

impl From<u8> for Button {
    fn from(detail: u8) -> Self {
        match detail {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            4 => Self::ScrollUp,
            5 => Self::ScrollDown,
            other => Self::Other(other),
        }
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => 1,
            Button::Middle => 2,
            Button::Right => 3,
            Button::ScrollUp => 4,
            Button::ScrollDown => 5,
            Button::Other(other) => other,
        }
    }
}
