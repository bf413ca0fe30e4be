use sheetgen_core::export::to_json;
use sheetgen_core::model::{Rect, Sheet, SheetFrame};

#[test]
fn descriptor_lists_frames_and_marks_rotation() {
    let sheet = Sheet {
        width: 64,
        height: 32,
        occupancy: 0.5,
        frames: vec![
            SheetFrame {
                key: "hero".into(),
                rect: Rect::new(0, 0, 16, 24),
                rotated: false,
            },
            SheetFrame {
                key: "sword".into(),
                rect: Rect::new(16, 0, 20, 8),
                rotated: true,
            },
        ],
    };

    let doc = to_json(&sheet, "sheet.png");
    assert_eq!(doc["filename"], "sheet.png");
    assert_eq!(doc["width"], 64);
    assert_eq!(doc["height"], 32);

    let images = doc["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);

    assert_eq!(images[0]["name"], "hero");
    assert_eq!(images[0]["x"], 0);
    assert_eq!(images[0]["w"], 16);
    assert_eq!(images[0]["h"], 24);
    // rotation attribute is present only for rotated frames
    assert!(images[0].get("rotation").is_none());

    assert_eq!(images[1]["name"], "sword");
    assert_eq!(images[1]["rotation"], 90);
    assert_eq!(images[1]["w"], 20);
    assert_eq!(images[1]["h"], 8);
}

#[test]
fn descriptor_roundtrips_through_serde() {
    let sheet = Sheet {
        width: 8,
        height: 8,
        occupancy: 0.0,
        frames: vec![],
    };
    let doc = to_json(&sheet, "empty.png");
    let text = serde_json::to_string(&doc).unwrap();
    let back: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back["images"].as_array().unwrap().len(), 0);
}
