/// The subset of the window attributes the core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowAttributes {
    pub override_redirect: bool,
}

/// Size limits declared by a client in `WM_NORMAL_HINTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeHints {
    pub min: Option<(i32, i32)>,
    pub max: Option<(i32, i32)>,
}
