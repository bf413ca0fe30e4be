use crate::config::Heuristic;
use crate::model::{overlap_1d, Placement, Rect, RectSize};

/// Rectangle bin packer over the MAXRECTS free-list structure.
///
/// The bin maintains a list of maximal free rectangles covering the
/// uncovered area and a list of committed placements. Free rectangles may
/// overlap each other; pruning only removes strict containment. Placement
/// is atomic: a failed `insert` leaves the bin untouched.
pub struct MaxRectsBin {
    width: u32,
    height: u32,
    allow_rotation: bool,
    free: Vec<Rect>,
    used: Vec<Rect>,
}

/// Comparable score pair; lower wins, ties resolved in favor of the
/// earliest candidate. ContactPoint is negated so the same comparison
/// applies across all heuristics.
type ScoreKey = (i64, i64);

impl MaxRectsBin {
    /// Creates a bin with rotation enabled (the common case).
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rotation(width, height, true)
    }

    pub fn with_rotation(width: u32, height: u32, allow_rotation: bool) -> Self {
        Self {
            width,
            height,
            allow_rotation,
            free: vec![Rect::new(0, 0, width, height)],
            used: Vec::new(),
        }
    }

    /// Resets to an empty packing over a new bin size. Re-entrant.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.used.clear();
        self.free.clear();
        self.free.push(Rect::new(0, 0, width, height));
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Committed placements, in insertion order.
    pub fn used(&self) -> &[Rect] {
        &self.used
    }

    pub fn free_list_len(&self) -> usize {
        self.free.len()
    }

    /// Ratio of committed area to bin area.
    pub fn occupancy(&self) -> f64 {
        let bin_area = self.width as u64 * self.height as u64;
        if bin_area == 0 {
            return 0.0;
        }
        let used_area: u64 = self.used.iter().map(|r| r.area()).sum();
        used_area as f64 / bin_area as f64
    }

    /// Places one `width`x`height` rectangle using `heuristic`, possibly
    /// rotated 90°. Returns `None` when no free rectangle accommodates the
    /// request in either orientation; the bin is left unchanged in that case.
    pub fn insert(&mut self, width: u32, height: u32, heuristic: Heuristic) -> Option<Placement> {
        let (placement, _) = self.find_position(width, height, heuristic)?;
        self.place(placement.rect);
        Some(placement)
    }

    /// Greedy batch insertion: each round scores every remaining size against
    /// the current free list and commits the globally best-scoring one.
    /// Stops when nothing remains or nothing fits; sizes left over are simply
    /// not represented in the returned placements.
    pub fn insert_all(&mut self, sizes: &[RectSize], heuristic: Heuristic) -> Vec<Placement> {
        let mut pending: Vec<RectSize> = sizes.to_vec();
        let mut placed = Vec::with_capacity(pending.len());
        while !pending.is_empty() {
            let mut best: Option<(usize, Placement, ScoreKey)> = None;
            for (i, sz) in pending.iter().enumerate() {
                if let Some((p, key)) = self.find_position(sz.w, sz.h, heuristic) {
                    if best.as_ref().is_none_or(|(_, _, bk)| key < *bk) {
                        best = Some((i, p, key));
                    }
                }
            }
            let Some((idx, placement, _)) = best else {
                break;
            };
            self.place(placement.rect);
            placed.push(placement);
            pending.remove(idx);
        }
        placed
    }

    /// Best position for a `w`x`h` request under `heuristic`, considering both
    /// orientations of every free rectangle. Does not mutate the bin.
    fn find_position(&self, w: u32, h: u32, heuristic: Heuristic) -> Option<(Placement, ScoreKey)> {
        if w == 0 || h == 0 {
            return None;
        }
        let mut best: Option<(Placement, ScoreKey)> = None;
        for fr in &self.free {
            if fr.w >= w && fr.h >= h {
                let key = self.score(fr, w, h, heuristic);
                let cand = Placement {
                    rect: Rect::new(fr.x, fr.y, w, h),
                    rotated: false,
                };
                if best.as_ref().is_none_or(|(_, bk)| key < *bk) {
                    best = Some((cand, key));
                }
            }
            if self.allow_rotation && fr.w >= h && fr.h >= w {
                let key = self.score(fr, h, w, heuristic);
                let cand = Placement {
                    rect: Rect::new(fr.x, fr.y, h, w),
                    rotated: true,
                };
                if best.as_ref().is_none_or(|(_, bk)| key < *bk) {
                    best = Some((cand, key));
                }
            }
        }
        best
    }

    /// Score for placing a `w`x`h` rectangle at the top-left of `fr`.
    fn score(&self, fr: &Rect, w: u32, h: u32, heuristic: Heuristic) -> ScoreKey {
        let leftover_h = (fr.w - w) as i64;
        let leftover_v = (fr.h - h) as i64;
        let short_fit = leftover_h.min(leftover_v);
        let long_fit = leftover_h.max(leftover_v);
        match heuristic {
            Heuristic::BestShortSideFit => (short_fit, long_fit),
            Heuristic::BestLongSideFit => (long_fit, short_fit),
            Heuristic::BestAreaFit => {
                let area_fit = fr.area() as i64 - (w as u64 * h as u64) as i64;
                (area_fit, short_fit)
            }
            Heuristic::BottomLeft => (fr.y as i64 + h as i64, fr.x as i64),
            Heuristic::ContactPoint => {
                // Bigger contact is better; negate for the lower-wins comparison.
                (-(self.contact_point_score(fr.x, fr.y, w, h) as i64), i64::MAX)
            }
        }
    }

    /// Sum of edge-touch lengths with the bin boundary and with the adjacent
    /// edges of already-placed rectangles.
    fn contact_point_score(&self, x: u32, y: u32, w: u32, h: u32) -> u64 {
        let mut score = 0u64;
        if x == 0 || x + w == self.width {
            score += h as u64;
        }
        if y == 0 || y + h == self.height {
            score += w as u64;
        }
        for u in &self.used {
            if u.x == x + w || u.right() == x {
                score += overlap_1d(u.y, u.bottom(), y, y + h) as u64;
            }
            if u.y == y + h || u.bottom() == y {
                score += overlap_1d(u.x, u.right(), x, x + w) as u64;
            }
        }
        score
    }

    /// Commits `node`: splits every intersecting free rectangle, prunes the
    /// free list and appends to the used list.
    fn place(&mut self, node: Rect) {
        let mut residual: Vec<Rect> = Vec::new();
        self.free.retain(|fr| {
            if fr.intersects(&node) {
                split_free_rect(*fr, &node, &mut residual);
                false
            } else {
                true
            }
        });
        self.free.append(&mut residual);
        self.prune_free_list();
        self.used.push(node);
    }

    /// O(n²) pairwise scan removing any free rectangle fully contained in
    /// another. Non-containing overlap between free rectangles is retained.
    fn prune_free_list(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let a = self.free[i];
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

/// Appends the maximal residuals of `fr` minus `node` to `out`: full-width
/// slivers above and below, full-height slivers left and right. Residuals
/// with zero extent are never produced. Caller guarantees intersection.
fn split_free_rect(fr: Rect, node: &Rect, out: &mut Vec<Rect>) {
    if node.x < fr.right() && node.right() > fr.x {
        // above
        if node.y > fr.y && node.y < fr.bottom() {
            out.push(Rect::new(fr.x, fr.y, fr.w, node.y - fr.y));
        }
        // below
        if node.bottom() < fr.bottom() {
            out.push(Rect::new(fr.x, node.bottom(), fr.w, fr.bottom() - node.bottom()));
        }
    }
    if node.y < fr.bottom() && node.bottom() > fr.y {
        // left
        if node.x > fr.x && node.x < fr.right() {
            out.push(Rect::new(fr.x, fr.y, node.x - fr.x, fr.h));
        }
        // right
        if node.right() < fr.right() {
            out.push(Rect::new(node.right(), fr.y, fr.right() - node.right(), fr.h));
        }
    }
}
