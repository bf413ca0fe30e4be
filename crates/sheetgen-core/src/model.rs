use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
    /// Separating-axis test on the x/y extents.
    pub fn disjoint(&self, other: &Rect) -> bool {
        self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom()
    }
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.disjoint(other)
    }
    /// Returns true if `r` lies entirely within `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}

/// Length of the overlap between the 1-D intervals `[a1, a2)` and `[b1, b2)`,
/// zero if they are disjoint.
pub fn overlap_1d(a1: u32, a2: u32, b1: u32, b2: u32) -> u32 {
    let start = a1.max(b1);
    let end = a2.min(b2);
    end.saturating_sub(start)
}

/// A pending rectangle request, pre-placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RectSize {
    pub w: u32,
    pub h: u32,
}

impl RectSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// A committed placement returned by the bin packer.
///
/// `rect.w`/`rect.h` are the stored (post-rotation) dimensions; when `rotated`
/// is true they are swapped relative to the requested size and the source
/// content must be rotated 90° before compositing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub rotated: bool,
}

/// A named frame on a finished sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetFrame {
    pub key: String,
    pub rect: Rect,
    pub rotated: bool,
}

/// Logical record of a packed sheet: dimensions, frames and fill ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub width: u32,
    pub height: u32,
    pub occupancy: f64,
    pub frames: Vec<SheetFrame>,
}

impl Sheet {
    pub fn num_rotated(&self) -> usize {
        self.frames.iter().filter(|f| f.rotated).count()
    }
}
