use crate::{DimensionList, Position};

/// Content measurements the scrollbar is derived from, all along the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Viewport extent.
    pub view: u64,
    /// Content extent.
    pub total: u64,
    /// Content scrolled past, ahead of the viewport's leading edge.
    pub before: u64,
}

impl ScrollMetrics {
    pub fn new(dims: &DimensionList, position: Position, view: u32) -> Self {
        let before = dims.to_coordinate(position).max(0) as u64;
        Self {
            view: view as u64,
            total: dims.total(),
            before,
        }
    }

    /// `false` when the content fits (or either extent is zero).
    pub fn is_scrollable(&self) -> bool {
        self.view > 0 && self.total > self.view
    }

    /// Largest valid value for `before`.
    pub fn max_before(&self) -> u64 {
        self.total.saturating_sub(self.view)
    }
}

/// Lengths of the three scrollbar segments along the main axis.
///
/// When the list is scrollable, `lead + thumb + trail` equals the viewport extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarTrack {
    /// Gap before the thumb; clicking it pages toward the start.
    pub lead: u32,
    pub thumb: u32,
    /// Gap after the thumb; clicking it pages toward the end.
    pub trail: u32,
}

impl ScrollbarTrack {
    /// All segments zero: nothing to scroll.
    pub const NONE: Self = Self {
        lead: 0,
        thumb: 0,
        trail: 0,
    };

    /// Splits the viewport extent into lead gap, thumb and trail gap.
    ///
    /// The proportional share is computed over `view - thickness`; the thumb then gets
    /// `thickness` added so it never shrinks below a grabbable size. A viewport thinner
    /// than the thumb degenerates into a full-length thumb.
    pub fn compute(metrics: ScrollMetrics, thickness: u32) -> Self {
        if !metrics.is_scrollable() {
            return Self::NONE;
        }
        let view = metrics.view;
        let total = metrics.total;
        let thickness = thickness as u64;
        if view < thickness {
            return Self {
                lead: 0,
                thumb: view as u32,
                trail: 0,
            };
        }

        let before = metrics.before.min(metrics.max_before());
        let track = view - thickness;
        let lead = scale(before, track, total);
        let thumb = scale(view, track, total) + thickness;
        let trail = view.saturating_sub(lead + thumb);
        Self {
            lead: lead as u32,
            thumb: thumb as u32,
            trail: trail as u32,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.thumb > 0
    }

    /// Sum of all three segments.
    pub fn extent(&self) -> u32 {
        self.lead + self.thumb + self.trail
    }
}

/// `value * numerator / denominator` without intermediate overflow.
fn scale(value: u64, numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let v = value as u128 * numerator as u128 / denominator as u128;
    u64::try_from(v).unwrap_or(u64::MAX)
}

/// Which scrollbar gap a page click landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageDirection {
    /// Lead gap: one viewport toward the start.
    Backward,
    /// Trail gap: one viewport toward the end.
    Forward,
}

/// Position one viewport away from `pos`, clamped to the scrollable range.
///
/// Returns `None` when the content fits.
pub fn page_target(
    dims: &DimensionList,
    pos: Position,
    direction: PageDirection,
    view: u32,
) -> Option<Position> {
    let metrics = ScrollMetrics::new(dims, pos, view);
    if !metrics.is_scrollable() {
        return None;
    }
    let current = dims.to_coordinate(pos);
    let step = view as i64;
    let target = match direction {
        PageDirection::Backward => current.saturating_sub(step),
        PageDirection::Forward => current.saturating_add(step),
    };
    Some(seek(dims, target, view))
}

/// Position after dragging the thumb by `delta` pixels.
///
/// A thumb pixel maps to `total / view` content pixels. Returns `None` when the content
/// fits.
pub fn drag_target(
    dims: &DimensionList,
    pos: Position,
    delta: i64,
    view: u32,
) -> Option<Position> {
    let metrics = ScrollMetrics::new(dims, pos, view);
    if !metrics.is_scrollable() {
        return None;
    }
    let content_delta = delta as i128 * metrics.total as i128 / metrics.view as i128;
    let content_delta = content_delta.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    let target = dims.to_coordinate(pos).saturating_add(content_delta);
    Some(seek(dims, target, view))
}

/// Converts `coordinate`, clamped to `[0, total - view]`, into a position.
fn seek(dims: &DimensionList, coordinate: i64, view: u32) -> Position {
    let max = dims.max_coordinate(view);
    let coordinate = coordinate.clamp(0, max);
    let mut pos = dims.from_coordinate(coordinate);
    pos.before_end = coordinate < max;
    pos
}

/// Pointer state for one thumb drag. Dropped when the gesture ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    /// Movement not yet applied because it is below the drag threshold.
    pub pending: i64,
    pub last_ms: Option<u64>,
}

impl DragState {
    /// Accumulates `delta`; returns the movement to apply once it exceeds `threshold`.
    pub fn accumulate(&mut self, delta: i64, now_ms: u64, threshold: u32) -> Option<i64> {
        self.last_ms = Some(now_ms);
        self.pending = self.pending.saturating_add(delta);
        if self.pending.unsigned_abs() <= threshold as u64 {
            return None;
        }
        Some(core::mem::take(&mut self.pending))
    }
}
