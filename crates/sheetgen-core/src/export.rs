use crate::model::Sheet;
use serde_json::{json, Value};

/// Serialize `sheet` as the sheet-descriptor document.
///
/// Shape: `{ filename, width, height, occupancy, images: [ { name, x, y, w, h, rotation? } ] }`.
/// `w`/`h` are the stored (post-rotation) dimensions; the `rotation` field is
/// present only for frames rotated 90° at placement.
pub fn to_json(sheet: &Sheet, image_filename: &str) -> Value {
    let images: Vec<Value> = sheet
        .frames
        .iter()
        .map(|fr| {
            let mut entry = json!({
                "name": fr.key,
                "x": fr.rect.x,
                "y": fr.rect.y,
                "w": fr.rect.w,
                "h": fr.rect.h,
            });
            if fr.rotated {
                entry["rotation"] = json!(90);
            }
            entry
        })
        .collect();
    json!({
        "filename": image_filename,
        "width": sheet.width,
        "height": sheet.height,
        "occupancy": sheet.occupancy,
        "images": images,
    })
}
