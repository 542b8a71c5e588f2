//! The coordinator every handler works on.

use crate::config::Config;
use crate::models::{
    Button, FocusQueue, Frame, FrameId, Handle, Mode, Tags, WindowHandle, WindowRegistry,
    WindowRole,
};
use crate::DisplayAction;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug)]
pub struct State<H: Handle> {
    /// Every managed frame, keyed by a stable id.
    pub frames: BTreeMap<FrameId, Frame<H>>,
    next_frame_id: usize,
    pub registry: WindowRegistry<H>,
    pub focus_queue: FocusQueue,
    pub tags: Tags,
    pub mode: Mode,
    pub actions: VecDeque<DisplayAction<H>>,
    pub bar_height: i32,
    pub focus_new_windows: bool,
    pub default_width: i32,
    pub default_height: i32,
    pub move_button: Button,
    pub resize_button: Button,
    pub close_button: Button,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        let mut tags = Tags::new();
        config.create_list_of_tag_labels().iter().for_each(|label| {
            tags.add_new(label.as_str());
        });
        if tags.all().is_empty() {
            tags.add_new("1");
        }

        Self {
            frames: BTreeMap::new(),
            next_frame_id: 1,
            registry: WindowRegistry::default(),
            focus_queue: FocusQueue::default(),
            tags,
            mode: Mode::default(),
            actions: VecDeque::new(),
            bar_height: config.bar_height().max(0),
            focus_new_windows: config.focus_new_windows(),
            default_width: config.default_width(),
            default_height: config.default_height(),
            move_button: config.move_button(),
            resize_button: config.resize_button(),
            close_button: config.close_button(),
        }
    }

    pub(crate) fn allocate_frame_id(&mut self) -> FrameId {
        let id = FrameId(self.next_frame_id);
        self.next_frame_id += 1;
        id
    }

    /// Adds a frame to the arena and registers all of its windows.
    pub(crate) fn insert_frame(&mut self, frame: Frame<H>) {
        self.registry.register_frame(&frame);
        self.frames.insert(frame.id, frame);
    }

    /// Drops a frame from the arena and the registry. Focus bookkeeping is up to the caller.
    pub(crate) fn remove_frame(&mut self, id: FrameId) -> Option<Frame<H>> {
        let frame = self.frames.remove(&id)?;
        self.registry.unregister(&frame);
        Some(frame)
    }

    pub fn frame(&self, id: FrameId) -> Option<&Frame<H>> {
        self.frames.get(&id)
    }

    /// Resolves any of a frame's windows to the frame.
    pub fn lookup(&self, handle: &WindowHandle<H>) -> Option<(FrameId, WindowRole)> {
        self.registry.lookup(handle)
    }

    pub fn frame_by_client(&self, handle: &WindowHandle<H>) -> Option<FrameId> {
        match self.lookup(handle)? {
            (id, WindowRole::Client) => Some(id),
            _ => None,
        }
    }

    pub(crate) fn configure_frame(&mut self, id: FrameId) {
        let Some(frame) = self.frames.get(&id) else {
            return;
        };
        self.actions.push_back(DisplayAction::ConfigureFrame {
            decoration: frame.decoration,
            client: frame.client,
            bar: frame.bar,
            geometry: frame.geometry,
            bar_height: frame.bar_height,
        });
    }

    pub(crate) fn render_bar(&mut self, id: FrameId) {
        let Some(frame) = self.frames.get(&id) else {
            return;
        };
        let Some(bar) = frame.bar else {
            return;
        };
        self.actions.push_back(DisplayAction::RenderBar {
            bar,
            focused: frame.has_focus(),
            title: frame.title.clone(),
            width: frame.geometry.w(),
        });
    }
}

#[cfg(test)]
impl<H: Handle> State<H> {
    /// Panics when the focus bookkeeping is inconsistent.
    pub(crate) fn assert_focus_invariants(&self) {
        let focused: Vec<_> = self.frames.values().filter(|f| f.has_focus()).collect();
        assert!(focused.len() <= 1, "more than one frame holds focus");
        if let Some(frame) = focused.first() {
            assert_eq!(self.focus_queue.head(), Some(frame.id));
        }
        let queued: Vec<_> = self.focus_queue.iter().copied().collect();
        for id in &queued {
            assert_eq!(queued.iter().filter(|q| *q == id).count(), 1);
            assert!(self.frames.get(id).is_some_and(Frame::is_visible));
        }
        for frame in self.frames.values().filter(|f| f.is_visible()) {
            assert!(self.focus_queue.contains(frame.id));
        }
    }

    pub(crate) fn focused_frames(&self) -> usize {
        self.frames.values().filter(|f| f.has_focus()).count()
    }
}
