use std::collections::HashMap;

use super::{Frame, FrameId, Handle, WindowHandle};

/// Which of a frame's windows an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRole {
    Decoration,
    Client,
    Bar,
}

/// Resolves raw window ids to the frame owning them.
#[derive(Debug, Clone)]
pub struct WindowRegistry<H: Handle> {
    windows: HashMap<WindowHandle<H>, (FrameId, WindowRole)>,
}

impl<H: Handle> Default for WindowRegistry<H> {
    fn default() -> Self {
        Self {
            windows: HashMap::new(),
        }
    }
}

impl<H: Handle> WindowRegistry<H> {
    pub fn register(&mut self, handle: WindowHandle<H>, frame: FrameId, role: WindowRole) {
        self.windows.insert(handle, (frame, role));
    }

    /// Registers the decoration, client and bar of `frame`.
    pub fn register_frame(&mut self, frame: &Frame<H>) {
        self.register(frame.decoration, frame.id, WindowRole::Decoration);
        self.register(frame.client, frame.id, WindowRole::Client);
        if let Some(bar) = frame.bar {
            self.register(bar, frame.id, WindowRole::Bar);
        }
    }

    pub fn lookup(&self, handle: &WindowHandle<H>) -> Option<(FrameId, WindowRole)> {
        self.windows.get(handle).copied()
    }

    /// Removes every id associated with `frame`.
    pub fn unregister(&mut self, frame: &Frame<H>) {
        self.windows.retain(|_, (id, _)| *id != frame.id);
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
