/// An axis-aligned rectangle with top-left origin.
///
/// Also used internally as the remaining (not yet allocated) region while a
/// layout call is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Smaller of width/height; decides strip orientation and slice length.
    pub fn shorter_edge(&self) -> f64 {
        self.w.min(self.h)
    }
}

/// A caller-owned weighted item.
///
/// Before the layout call only `weight` is meaningful; after it, the geometry
/// fields hold the rectangle assigned to this item. The caller keeps ownership
/// and element order throughout.
#[derive(Debug, Clone, Copy)]
pub struct WeightedRect {
    /// Relative size of this item. Must be >= 0 and finite; negative or
    /// non-finite weights are a precondition violation with undefined output.
    pub weight: f64,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl WeightedRect {
    pub fn new(weight: f64) -> Self {
        Self {
            weight,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
        }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Weight/count bookkeeping for items not yet placed.
struct Remaining {
    weight: f64,
    count: usize,
}

/// Squarified treemap layout (Bruls, Huizing, van Wijk).
///
/// Partitions `bounds` into one rectangle per item, with areas proportional
/// to item weights and aspect ratios kept as close to square as the greedy
/// row heuristic allows. Geometry is written onto the items in place; the
/// slice order is never changed (the engine sorts an internal index list,
/// not the caller's slice).
///
/// Weights of zero are valid: if every remaining weight is zero the leftover
/// area is split evenly by count. An empty slice is a no-op. Degenerate
/// bounds (zero width or height) terminate normally and yield zero-area
/// rectangles.
pub fn squarify(items: &mut [WeightedRect], bounds: Rect) {
    if items.is_empty() {
        return;
    }

    // Work on indices sorted by descending weight; tie order is unspecified.
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].weight.total_cmp(&items[a].weight));

    let mut remaining = Remaining {
        weight: items.iter().map(|it| it.weight).sum(),
        count: items.len(),
    };

    tracing::debug!(
        "squarify: {} items, total weight {:.3}, bounds {:.1}x{:.1}",
        items.len(),
        remaining.weight,
        bounds.w,
        bounds.h
    );

    let mut bounds = bounds;
    let mut shorter_edge = bounds.shorter_edge();
    let mut last_ratio = f64::INFINITY;
    let mut row: Vec<usize> = Vec::new();
    let mut next = 0;

    while next < order.len() {
        row.push(order[next]);
        next += 1;

        let ratio = worst_aspect_ratio(items, &row, shorter_edge, &bounds, &remaining);
        // NaN is accepted: floating-point drift in the running weight sum can
        // still produce one, and rejecting it would strand the first item of
        // a fresh row.
        if ratio <= last_ratio || ratio.is_nan() {
            last_ratio = ratio;
            if next < order.len() {
                continue; // keep growing the row
            }
            // Out of candidates: commit what we have.
        } else {
            // The newest item made the worst ratio worse; lay the row out
            // without it and retry it as the start of the next row.
            row.pop();
            next -= 1;
        }

        let thickness = layout_row(items, &row, shorter_edge, &bounds, &mut remaining);
        consume_strip(&mut bounds, thickness);
        shorter_edge = bounds.shorter_edge();
        last_ratio = f64::INFINITY;
        row.clear();
    }

    debug_assert_eq!(remaining.count, 0);
}

/// Worst (largest) aspect ratio any item in `row` would get if the row were
/// committed as a strip right now.
fn worst_aspect_ratio(
    items: &[WeightedRect],
    row: &[usize],
    shorter_edge: f64,
    bounds: &Rect,
    remaining: &Remaining,
) -> f64 {
    assert!(
        !row.is_empty(),
        "internal error: aspect-ratio probe on an empty row"
    );

    // A zero-length edge makes every candidate equally bad; MAX keeps the
    // arithmetic below away from the zero denominator.
    if shorter_edge == 0.0 {
        return f64::MAX;
    }

    let total_area = bounds.area();
    let edge_sq = shorter_edge * shorter_edge;

    // Every remaining weight is zero: pretend the leftover area splits evenly.
    if remaining.weight == 0.0 {
        let one_item_area = total_area / remaining.count as f64;
        let row_area = one_item_area * row.len() as f64;
        let a = (edge_sq * one_item_area) / (row_area * row_area);
        let b = (row_area * row_area) / (edge_sq * one_item_area);
        return a.max(b);
    }

    let mut min_area = f64::INFINITY;
    let mut max_area = 0.0f64;
    let mut sum = 0.0;
    for &i in row {
        let area = total_area * (items[i].weight / remaining.weight);
        min_area = min_area.min(area);
        max_area = max_area.max(area);
        sum += area;
    }

    let a = (edge_sq * max_area) / (sum * sum);
    let b = (sum * sum) / (edge_sq * min_area);
    a.max(b)
}

/// Lay `row` out as parallel slices within one strip of `bounds`.
/// Returns the strip thickness consumed along the longer axis.
fn layout_row(
    items: &mut [WeightedRect],
    row: &[usize],
    shorter_edge: f64,
    bounds: &Rect,
    remaining: &mut Remaining,
) -> f64 {
    assert!(!row.is_empty(), "internal error: committing an empty row");

    // The strip spans the shorter edge; its thickness eats into the longer one.
    let horizontal = shorter_edge == bounds.w;
    let longer_edge = if horizontal { bounds.h } else { bounds.w };
    let row_weight: f64 = row.iter().map(|&i| items[i].weight).sum();

    let thickness = if remaining.weight == 0.0 {
        longer_edge * row.len() as f64 / remaining.count as f64
    } else {
        longer_edge * (row_weight / remaining.weight)
    };

    let mut offset = 0.0;
    for &i in row {
        let share = if row_weight == 0.0 {
            1.0 / row.len() as f64
        } else {
            items[i].weight / row_weight
        };
        let slice = shorter_edge * share;

        let item = &mut items[i];
        if horizontal {
            item.x = bounds.x + offset;
            item.y = bounds.y;
            item.w = slice;
            item.h = thickness;
        } else {
            item.x = bounds.x;
            item.y = bounds.y + offset;
            item.w = thickness;
            item.h = slice;
        }

        offset += slice;
        remaining.count -= 1;
    }
    remaining.weight -= row_weight;

    tracing::trace!(
        "committed row of {} items (weight {:.3}), thickness {:.2}, {} items left",
        row.len(),
        row_weight,
        thickness,
        remaining.count
    );

    thickness
}

/// Shrink `bounds` by the strip just consumed, along whichever axis is
/// currently longer, keeping the far edge fixed (clamped at zero extent).
fn consume_strip(bounds: &mut Rect, thickness: f64) {
    if bounds.w > bounds.h {
        let w = (bounds.w - thickness).max(0.0);
        bounds.x += bounds.w - w;
        bounds.w = w;
    } else {
        let h = (bounds.h - thickness).max(0.0);
        bounds.y += bounds.h - h;
        bounds.h = h;
    }
}
