//! Core library for generating sprite sheets via MaxRects bin packing.
//!
//! - Packer: MaxRects free-list with five heuristics (BAF/BSSF/BLSF/BL/CP),
//!   optional 90° rotation, single and greedy batch insertion.
//! - Pipeline: `pack_images` takes in-memory images and returns a composited
//!   RGBA sheet plus serde-serializable metadata.
//! - Export: JSON sheet descriptor (name/x/y/w/h, `rotation` when rotated).
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sheetgen_core::{pack_images, InputImage, PackerConfig};
//! # fn main() -> anyhow::Result<()> {
//! let img = ImageReader::open("a.png")?.decode()?;
//! let inputs = vec![InputImage { key: "a".into(), image: img }];
//! let cfg = PackerConfig { width: 512, height: 512, ..Default::default() };
//! let out = pack_images(inputs, cfg)?;
//! println!("occupancy: {:.2}", out.sheet.occupancy);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
pub mod prelude {
    pub use crate::config::{Heuristic, PackerConfig, PackerConfigBuilder};
    pub use crate::model::{Placement, Rect, RectSize, Sheet, SheetFrame};
    pub use crate::packer::maxrects::MaxRectsBin;
    pub use crate::{choose_heuristic, pack_images, InputImage, PackOutput};
}
