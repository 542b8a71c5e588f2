//! The decoration wrapped around one managed client.
use std::cmp;

use serde::{Deserialize, Serialize};

use super::{Handle, SizeHints, TagId, WindowHandle, Xyhw, XyhwBuilder};

/// Stable arena id of a frame. Never reused within a session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub usize);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Unmapped,
    Unfocused,
    Focused,
    Moving,
    Resizing,
}

/// The single edge a resize drag acts on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<H: Handle> {
    pub id: FrameId,
    pub decoration: WindowHandle<H>,
    pub client: WindowHandle<H>,
    pub bar: Option<WindowHandle<H>>,
    state: FrameState,
    pub geometry: Xyhw,
    anchor: Option<(i32, i32)>,
    resize_direction: Direction,
    pub bar_height: i32,
    pub tag: TagId,
    pub title: Option<String>,
    /// Unmapped on screen because its tag is not visible.
    pub hidden: bool,
    pub transient_for: Option<FrameId>,
}

impl<H: Handle> Frame<H> {
    /// A freshly created frame starts out Unfocused and hidden. It appears once its tag is
    /// applied.
    #[must_use]
    pub fn new(
        id: FrameId,
        decoration: WindowHandle<H>,
        client: WindowHandle<H>,
        geometry: Xyhw,
        bar_height: i32,
    ) -> Self {
        Self {
            id,
            decoration,
            client,
            bar: None,
            state: FrameState::Unfocused,
            geometry,
            anchor: None,
            resize_direction: Direction::None,
            bar_height,
            tag: 1,
            title: None,
            hidden: true,
            transient_for: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> FrameState {
        self.state
    }

    /// Leaving a drag state always drops the drag anchor, so a late motion event is a no-op.
    pub fn set_state(&mut self, state: FrameState) {
        if !matches!(state, FrameState::Moving | FrameState::Resizing) {
            self.anchor = None;
            self.resize_direction = Direction::None;
        }
        self.state = state;
    }

    #[must_use]
    pub const fn has_focus(&self) -> bool {
        matches!(
            self.state,
            FrameState::Focused | FrameState::Moving | FrameState::Resizing
        )
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, FrameState::Moving | FrameState::Resizing)
    }

    #[must_use]
    pub const fn is_unmapped(&self) -> bool {
        matches!(self.state, FrameState::Unmapped)
    }

    /// Mapped and not hidden by its tag.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.is_unmapped() && !self.hidden
    }

    #[must_use]
    pub const fn anchor(&self) -> Option<(i32, i32)> {
        self.anchor
    }

    #[must_use]
    pub const fn resize_direction(&self) -> Direction {
        self.resize_direction
    }

    /// Where the client sits inside the decoration, as (x, y, w, h).
    #[must_use]
    pub const fn client_geometry(&self) -> (i32, i32, i32, i32) {
        (
            0,
            self.bar_height,
            self.geometry.w(),
            self.geometry.h() - self.bar_height,
        )
    }

    /// Starts a drag session anchored at the root pointer position. `event` is the click
    /// position relative to the decoration and picks the edge of a resize.
    pub fn begin_drag(&mut self, kind: DragKind, root: (i32, i32), event: (i32, i32)) -> bool {
        if self.is_unmapped() {
            return false;
        }
        match kind {
            DragKind::Move => self.set_state(FrameState::Moving),
            DragKind::Resize => {
                self.set_state(FrameState::Resizing);
                self.resize_direction =
                    direction_from_point(event.0, event.1, self.geometry.w(), self.geometry.h());
            }
        }
        self.anchor = Some(root);
        true
    }

    /// Applies the pointer movement since the previous step. Returns whether the geometry was
    /// touched.
    pub fn drag_step(&mut self, root: (i32, i32)) -> bool {
        let Some((px, py)) = self.anchor else {
            return false;
        };
        let (dx, dy) = (root.0 - px, root.1 - py);
        self.anchor = Some(root);
        match self.state {
            FrameState::Moving => self.translate(dx, dy),
            FrameState::Resizing => self.resize(dx, dy),
            FrameState::Unmapped | FrameState::Unfocused | FrameState::Focused => return false,
        }
        true
    }

    pub fn end_drag(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.set_state(FrameState::Focused);
        true
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.geometry.set_x(cmp::max(0, self.geometry.x() + dx));
        self.geometry.set_y(cmp::max(0, self.geometry.y() + dy));
    }

    fn resize(&mut self, dx: i32, dy: i32) {
        let g = &mut self.geometry;
        match self.resize_direction {
            Direction::North => {
                let bottom = g.y() + g.h();
                let y = cmp::max(0, g.y() + dy);
                g.set_h(bottom - y);
                g.set_y(bottom - g.h());
            }
            Direction::South => g.set_h(g.h() + dy),
            Direction::East => g.set_w(g.w() + dx),
            Direction::West => {
                let right = g.x() + g.w();
                let x = cmp::max(0, g.x() + dx);
                g.set_w(right - x);
                g.set_x(right - g.w());
            }
            Direction::None => {}
        }
    }
}

/// Geometry of a new decoration for a client reporting `reported`.
///
/// The origin is clamped to zero and the client size is enlarged to its min-size hint. The
/// decoration adds `bar_height` on top of the client. Hints are capped so the decoration still
/// fits the 16 bit sizes of the display server.
#[must_use]
pub fn frame_geometry(reported: &Xyhw, hints: &SizeHints, bar_height: i32) -> Xyhw {
    let limit = i32::from(u16::MAX);
    let bar_height = bar_height.clamp(0, limit - 1);
    let max_client_h = limit - bar_height;
    let (min_w, min_h) = hints.min.unwrap_or((1, 1));
    let (min_w, min_h) = (min_w.clamp(1, limit), min_h.clamp(1, max_client_h));
    let (max_w, max_h) = hints.max.unwrap_or((0, 0));
    XyhwBuilder {
        x: cmp::max(0, reported.x()),
        y: cmp::max(0, reported.y()),
        w: reported.w().clamp(min_w, limit),
        h: reported.h().clamp(min_h, max_client_h) + bar_height,
        minw: min_w,
        maxw: if max_w > 0 {
            max_w.min(limit)
        } else {
            XyhwBuilder::default().maxw
        },
        minh: min_h + bar_height,
        maxh: if max_h > 0 {
            max_h.min(max_client_h) + bar_height
        } else {
            XyhwBuilder::default().maxh
        },
    }
    .into()
}

/// Picks the edge closest to a click at (x, y) inside a w by h frame. Ties go to the first
/// candidate in north, south, east, west order.
#[must_use]
pub fn direction_from_point(x: i32, y: i32, w: i32, h: i32) -> Direction {
    let candidates = [
        (Direction::North, y),
        (Direction::South, h - y),
        (Direction::East, w - x),
        (Direction::West, x),
    ];
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    best.0
}
