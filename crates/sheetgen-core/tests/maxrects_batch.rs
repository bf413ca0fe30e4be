use sheetgen_core::config::Heuristic;
use sheetgen_core::model::{Rect, RectSize};
use sheetgen_core::packer::maxrects::MaxRectsBin;

fn pairwise_disjoint(rects: &[Rect]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                return false;
            }
        }
    }
    true
}

#[test]
fn batch_fills_bin_with_uniform_squares() {
    let mut bin = MaxRectsBin::new(4, 4);
    let sizes = vec![RectSize::new(2, 2); 5];
    let placed = bin.insert_all(&sizes, Heuristic::BestShortSideFit);
    // four cells fit, the fifth square is left unpacked
    assert_eq!(placed.len(), 4);
    let rects: Vec<Rect> = placed.iter().map(|p| p.rect).collect();
    assert!(pairwise_disjoint(&rects));
    assert!((bin.occupancy() - 1.0).abs() < 1e-9);
}

#[test]
fn batch_picks_global_best_regardless_of_order() {
    // ordered insertion would place the small square first and then fail the
    // full-bin rect; batch mode scores both each round and places the better fit
    let mut bin = MaxRectsBin::new(10, 10);
    let sizes = vec![RectSize::new(3, 3), RectSize::new(10, 10)];
    let placed = bin.insert_all(&sizes, Heuristic::BestAreaFit);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].rect, Rect::new(0, 0, 10, 10));
}

#[test]
fn batch_stops_when_nothing_fits() {
    let mut bin = MaxRectsBin::new(8, 8);
    let sizes = vec![
        RectSize::new(8, 8),
        RectSize::new(4, 4),
        RectSize::new(2, 2),
    ];
    let placed = bin.insert_all(&sizes, Heuristic::BestShortSideFit);
    assert_eq!(placed.len(), 1);
    assert_eq!(bin.used().len(), 1);
}
