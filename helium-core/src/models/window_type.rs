/// The declared `_NET_WM_WINDOW_TYPE` of a client.
///
/// Backends map every type they do not recognise to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    #[default]
    Normal,
}

impl WindowType {
    /// Windows of these types are shown as they are, without a frame.
    #[must_use]
    pub const fn is_undecorated(self) -> bool {
        match self {
            Self::Desktop | Self::Dock | Self::Toolbar => true,
            Self::Menu | Self::Utility | Self::Splash | Self::Dialog | Self::Normal => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bars_and_desktops_are_left_undecorated() {
        assert!(WindowType::Dock.is_undecorated());
        assert!(WindowType::Toolbar.is_undecorated());
        assert!(WindowType::Desktop.is_undecorated());
        assert!(!WindowType::Dialog.is_undecorated());
        assert!(!WindowType::default().is_undecorated());
    }
}
