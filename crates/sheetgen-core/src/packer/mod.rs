//! Rectangle bin packing.
//!
//! A single algorithm family (MaxRects) with five free-rect choice
//! heuristics dispatched by a plain enum; see [`maxrects::MaxRectsBin`].

pub mod maxrects;
