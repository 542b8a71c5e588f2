//! Frame geometry with size limits.
use serde::{Deserialize, Serialize};
use std::cmp;

const UNBOUNDED: i32 = 999_999_999;

/// Placement and size of a window along with its min/max size. x,y from top left.
///
/// Width and height never drop below one pixel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
    minw: i32,
    maxw: i32,
    minh: i32,
    maxh: i32,
}

/// Modifiable struct that can be used to generate an Xyhw struct.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct XyhwBuilder {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
    pub minw: i32,
    pub maxw: i32,
    pub minh: i32,
    pub maxh: i32,
}

impl Default for XyhwBuilder {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 1,
            h: 1,
            minw: 1,
            maxw: UNBOUNDED,
            minh: 1,
            maxh: UNBOUNDED,
        }
    }
}

impl Default for Xyhw {
    fn default() -> Self {
        XyhwBuilder::default().into()
    }
}

impl From<XyhwBuilder> for Xyhw {
    fn from(xywh: XyhwBuilder) -> Self {
        let mut b = Self {
            x: xywh.x,
            y: xywh.y,
            w: xywh.w,
            h: xywh.h,
            minw: cmp::max(1, xywh.minw),
            maxw: xywh.maxw,
            minh: cmp::max(1, xywh.minh),
            maxh: xywh.maxh,
        };
        b.update_limits();
        b
    }
}

impl Xyhw {
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    #[must_use]
    pub const fn minw(&self) -> i32 {
        self.minw
    }
    #[must_use]
    pub const fn maxw(&self) -> i32 {
        self.maxw
    }
    #[must_use]
    pub const fn minh(&self) -> i32 {
        self.minh
    }
    #[must_use]
    pub const fn maxh(&self) -> i32 {
        self.maxh
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value;
        self.update_limits();
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value;
        self.update_limits();
    }

    fn update_limits(&mut self) {
        // A max hint smaller than the min hint loses.
        if self.maxh < self.minh {
            self.maxh = self.minh;
        }
        if self.maxw < self.minw {
            self.maxw = self.minw;
        }
        self.h = self.h.clamp(self.minh, self.maxh);
        self.w = self.w.clamp(self.minw, self.maxw);
    }

}
