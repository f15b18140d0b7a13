use alloc::vec::Vec;

use crate::fenwick::Fenwick;
use crate::{Constraints, ElementSize, Orientation, Viewport};

/// Sizes of every element from one measurement pass.
///
/// Indexes stay meaningful only until the next invalidation; after the element count or
/// the viewport changes, a fresh list replaces this one.
#[derive(Clone, Debug, Default)]
pub struct DimensionList {
    sizes: Vec<ElementSize>,
    sums: Fenwick,
}

impl DimensionList {
    pub fn new() -> Self {
        Self {
            sizes: Vec::new(),
            sums: Fenwick::new(),
        }
    }

    pub fn from_sizes(sizes: Vec<ElementSize>) -> Self {
        let sums = Fenwick::from_extents(sizes.iter().map(|s| s.main));
        Self { sizes, sums }
    }

    /// Renders every element with the cross extent fixed and the main extent unbounded,
    /// keeping only the resulting sizes.
    pub fn measure<C>(
        length: usize,
        cross: u32,
        render: &mut impl FnMut(usize, Constraints) -> (ElementSize, C),
    ) -> Self {
        let constraints = Constraints::measure(cross);
        let mut sizes = Vec::with_capacity(length);
        for index in 0..length {
            let (size, _) = render(index, constraints);
            sizes.push(size);
        }
        Self::from_sizes(sizes)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ElementSize> {
        self.sizes.get(index).copied()
    }

    pub fn sizes(&self) -> &[ElementSize] {
        &self.sizes
    }

    /// Total main extent of all elements.
    pub fn total(&self) -> u64 {
        self.sums.total()
    }

    /// Main extent of elements `[0, index)`; `index` is clamped to the length.
    pub fn extent_before(&self, index: usize) -> u64 {
        self.sums.prefix_sum(index)
    }

    /// Number of leading elements whose combined main extent is `<= coordinate`.
    pub(crate) fn count_within(&self, coordinate: u64) -> usize {
        self.sums.lower_bound(coordinate)
    }

    fn push(&mut self, size: ElementSize) {
        self.sizes.push(size);
        self.sums.push_value(size.main as u64);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    length: usize,
    viewport: Viewport,
    orientation: Orientation,
}

/// Debounced owner of the current [`DimensionList`].
///
/// The measurement pass is `O(length)`, so it only runs once a change has settled for
/// `delay_ms`. Until then the previous snapshot keeps serving scrollbar math.
#[derive(Clone, Debug)]
pub struct DimensionCache {
    dims: DimensionList,
    /// What `dims` was measured for.
    built: Option<CacheKey>,
    /// Last configuration seen by `observe`.
    seen: Option<CacheKey>,
    stale: bool,
    due_ms: Option<u64>,
    partial: Option<DimensionList>,
    delay_ms: u64,
    batch: Option<usize>,
}

impl DimensionCache {
    pub fn new(delay_ms: u64, batch: Option<usize>) -> Self {
        Self {
            dims: DimensionList::new(),
            built: None,
            seen: None,
            stale: true,
            due_ms: None,
            partial: None,
            delay_ms,
            batch,
        }
    }

    pub fn dims(&self) -> &DimensionList {
        &self.dims
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Whether a rebuild is scheduled or in progress.
    pub fn is_pending(&self) -> bool {
        self.stale || self.partial.is_some()
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn set_batch(&mut self, batch: Option<usize>) {
        debug_assert!(batch != Some(0), "measure batch must be non-zero");
        let batch = batch.filter(|&b| b > 0);
        if self.batch != batch {
            self.batch = batch;
            self.invalidate();
        }
    }

    /// Flags the snapshot stale; the debounce deadline is armed by the next `observe`.
    pub fn invalidate(&mut self) {
        vtrace!("DimensionCache::invalidate");
        self.stale = true;
        self.due_ms = None;
        self.partial = None;
    }

    /// Records the configuration for this frame and schedules a rebuild if it changed.
    ///
    /// The first observation is due immediately; later changes push the deadline out by
    /// `delay_ms` from `now_ms`, so a burst of resizes coalesces into one pass.
    pub fn observe(
        &mut self,
        length: usize,
        viewport: Viewport,
        orientation: Orientation,
        now_ms: u64,
    ) {
        let key = CacheKey {
            length,
            viewport,
            orientation,
        };
        match self.seen {
            None => {
                self.stale = true;
                self.due_ms = Some(now_ms);
            }
            Some(prev) if prev != key => {
                vdebug!(
                    length,
                    prev_length = prev.length,
                    main = viewport.main,
                    cross = viewport.cross,
                    "DimensionCache: configuration changed, remeasure scheduled"
                );
                self.stale = true;
                self.partial = None;
                self.due_ms = Some(now_ms.saturating_add(self.delay_ms));
            }
            Some(_) => {
                if self.stale && self.due_ms.is_none() {
                    self.due_ms = Some(now_ms.saturating_add(self.delay_ms));
                }
            }
        }
        self.seen = Some(key);
    }

    /// Runs (or continues) the measurement pass if one is due.
    ///
    /// Returns `true` when a new snapshot was installed.
    pub fn refresh<C>(
        &mut self,
        now_ms: u64,
        render: &mut impl FnMut(usize, Constraints) -> (ElementSize, C),
    ) -> bool {
        let Some(key) = self.seen else {
            return false;
        };

        if self.stale {
            let Some(due) = self.due_ms else {
                return false;
            };
            if now_ms < due {
                return false;
            }
            self.stale = false;
            self.due_ms = None;
            if self.batch.is_none() {
                let dims = DimensionList::measure(key.length, key.viewport.cross, render);
                self.install(key, dims);
                return true;
            }
            self.partial = Some(DimensionList::new());
        }

        let (Some(mut dims), Some(batch)) = (self.partial.take(), self.batch) else {
            return false;
        };
        let constraints = Constraints::measure(key.viewport.cross);
        let start = dims.len();
        let end = start.saturating_add(batch).min(key.length);
        for index in start..end {
            let (size, _) = render(index, constraints);
            dims.push(size);
        }

        if dims.len() < key.length {
            vtrace!(
                measured = dims.len(),
                length = key.length,
                "DimensionCache: partial pass"
            );
            self.partial = Some(dims);
            return false;
        }

        self.install(key, dims);
        true
    }

    fn install(&mut self, key: CacheKey, dims: DimensionList) {
        vdebug!(
            length = key.length,
            total = dims.total(),
            "DimensionCache: snapshot rebuilt"
        );
        self.dims = dims;
        self.built = Some(key);
    }

    /// Whether the current snapshot was measured for `length` elements.
    pub fn covers(&self, length: usize) -> bool {
        self.built.is_some_and(|k| k.length == length)
    }
}
