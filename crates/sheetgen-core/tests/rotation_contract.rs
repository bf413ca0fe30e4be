use sheetgen_core::config::Heuristic;
use sheetgen_core::packer::maxrects::MaxRectsBin;

#[test]
fn rotates_when_only_rotated_fits() {
    let mut bin = MaxRectsBin::new(16, 12);
    let p = bin
        .insert(8, 14, Heuristic::BestShortSideFit)
        .expect("rotated fit should succeed");
    assert!(p.rotated, "should rotate because only rotated fits");
    // swapped dimensions are the rotation signal
    assert_eq!((p.rect.w, p.rect.h), (14, 8));
}

#[test]
fn rotation_disabled_fails_the_same_request() {
    let mut bin = MaxRectsBin::with_rotation(16, 12, false);
    assert!(bin.insert(8, 14, Heuristic::BestShortSideFit).is_none());
    assert_eq!(bin.used().len(), 0);
}

#[test]
fn unrotated_fit_keeps_requested_dimensions() {
    let mut bin = MaxRectsBin::new(32, 32);
    let p = bin.insert(5, 9, Heuristic::BestAreaFit).unwrap();
    assert!(!p.rotated);
    assert_eq!((p.rect.w, p.rect.h), (5, 9));
}
