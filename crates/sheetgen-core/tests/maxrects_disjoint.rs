use sheetgen_core::config::Heuristic;
use sheetgen_core::model::Rect;
use sheetgen_core::packer::maxrects::MaxRectsBin;

/// Accumulator that rejects any rectangle overlapping a previous one.
#[derive(Default)]
struct DisjointSet {
    rects: Vec<Rect>,
}

impl DisjointSet {
    fn add(&mut self, r: Rect) -> bool {
        if self.rects.iter().any(|p| p.intersects(&r)) {
            return false;
        }
        self.rects.push(r);
        true
    }
}

#[test]
fn random_inserts_stay_disjoint_and_in_bounds() {
    use rand::{Rng, SeedableRng};

    const W: u32 = 256;
    const H: u32 = 256;

    for heuristic in Heuristic::ALL {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut bin = MaxRectsBin::new(W, H);
        let mut set = DisjointSet::default();
        let mut used_area = 0u64;

        for _ in 0..120 {
            let w = rng.gen_range(4..=64);
            let h = rng.gen_range(4..=64);
            let Some(p) = bin.insert(w, h, heuristic) else {
                continue;
            };
            assert!(p.rect.right() <= W && p.rect.bottom() <= H, "{heuristic:?}: out of bounds");
            assert!(set.add(p.rect), "{heuristic:?}: overlapping placement {:?}", p.rect);
            used_area += p.rect.area();
        }

        let expected = used_area as f64 / (W as u64 * H as u64) as f64;
        assert!((bin.occupancy() - expected).abs() < 1e-9);
        assert!(bin.occupancy() <= 1.0);
    }
}

#[test]
fn occupancy_tracks_committed_area() {
    let mut bin = MaxRectsBin::new(100, 100);
    assert_eq!(bin.occupancy(), 0.0);
    bin.insert(50, 40, Heuristic::BestAreaFit).unwrap();
    assert!((bin.occupancy() - 0.2).abs() < 1e-9);
    bin.insert(30, 10, Heuristic::BestAreaFit).unwrap();
    assert!((bin.occupancy() - 0.23).abs() < 1e-9);
}
