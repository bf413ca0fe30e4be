use crate::compositing::blit_rgba;
use crate::config::{Heuristic, PackerConfig};
use crate::error::{Result, SheetGenError};
use crate::model::{RectSize, Sheet, SheetFrame};
use crate::packer::maxrects::MaxRectsBin;
use image::{DynamicImage, RgbaImage};
use tracing::{debug, instrument, warn};

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: sheet metadata, the composited RGBA canvas and
/// the keys of images that did not fit.
#[derive(Debug)]
pub struct PackOutput {
    pub sheet: Sheet,
    pub rgba: RgbaImage,
    pub unplaced: Vec<String>,
}

/// Tries every heuristic on a fresh bin and returns the one yielding the
/// highest final occupancy, together with that occupancy.
pub fn choose_heuristic(
    sizes: &[RectSize],
    width: u32,
    height: u32,
    allow_rotation: bool,
) -> (Heuristic, f64) {
    let mut best = (Heuristic::BestAreaFit, -1.0f64);
    for heuristic in Heuristic::ALL {
        let mut bin = MaxRectsBin::with_rotation(width, height, allow_rotation);
        for sz in sizes {
            let _ = bin.insert(sz.w, sz.h, heuristic);
        }
        let occ = bin.occupancy();
        if occ > best.1 {
            best = (heuristic, occ);
        }
    }
    best
}

#[instrument(skip_all)]
/// Packs `inputs` onto a single sheet and composites them into an RGBA
/// canvas, rotating source pixels 90° clockwise where the placement was
/// rotated. Images that do not fit are reported in `unplaced`; the run
/// never spills onto a second sheet.
pub fn pack_images(inputs: Vec<InputImage>, cfg: PackerConfig) -> Result<PackOutput> {
    cfg.validate()?;
    if inputs.is_empty() {
        return Err(SheetGenError::Empty);
    }

    let rgbas: Vec<(String, RgbaImage)> = inputs
        .into_iter()
        .map(|i| (i.key, i.image.to_rgba8()))
        .collect();

    let heuristic = match cfg.heuristic {
        Some(h) => h,
        None => {
            let sizes: Vec<RectSize> = rgbas
                .iter()
                .map(|(_, img)| {
                    let (w, h) = img.dimensions();
                    RectSize::new(w, h)
                })
                .collect();
            let (h, occ) = choose_heuristic(&sizes, cfg.width, cfg.height, cfg.allow_rotation);
            debug!(heuristic = ?h, occupancy = occ, "auto-selected heuristic");
            h
        }
    };

    let mut bin = MaxRectsBin::with_rotation(cfg.width, cfg.height, cfg.allow_rotation);
    let mut canvas = RgbaImage::new(cfg.width, cfg.height);
    let mut frames: Vec<SheetFrame> = Vec::new();
    let mut unplaced: Vec<String> = Vec::new();

    for (key, rgba) in &rgbas {
        let (w, h) = rgba.dimensions();
        match bin.insert(w, h, heuristic) {
            Some(p) => {
                blit_rgba(rgba, &mut canvas, p.rect.x, p.rect.y, p.rotated);
                frames.push(SheetFrame {
                    key: key.clone(),
                    rect: p.rect,
                    rotated: p.rotated,
                });
            }
            None => {
                warn!(key = %key, width = w, height = h, "sheet is full; image left unplaced");
                unplaced.push(key.clone());
            }
        }
    }

    let sheet = Sheet {
        width: cfg.width,
        height: cfg.height,
        occupancy: bin.occupancy(),
        frames,
    };
    Ok(PackOutput {
        sheet,
        rgba: canvas,
        unplaced,
    })
}
