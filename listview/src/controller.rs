use crate::dimensions::DimensionCache;
use crate::scrollbar::{DragState, drag_target, page_target};
use crate::window::{Window, WindowParams};
use crate::{
    Arrangement, Constraints, DimensionList, ElementSize, ListOptions, Orientation,
    PageDirection, Position, ScrollMetrics, ScrollbarTrack, Viewport,
};

/// Everything produced by one [`ListController::layout`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListLayout<C> {
    pub arrangement: Arrangement<C>,
    pub scrollbar: ScrollbarTrack,
    pub metrics: ScrollMetrics,
    /// The position after this frame; save it to restore the scroll state later.
    pub position: Position,
    pub at_start: bool,
    pub at_end: bool,
    /// Scroll input ran into the start or end of the list this frame.
    pub hit_edge: bool,
}

impl<C> ListLayout<C> {
    fn placeholder(viewport: Viewport) -> Self {
        Self {
            arrangement: Arrangement::placeholder(viewport),
            scrollbar: ScrollbarTrack::NONE,
            metrics: ScrollMetrics {
                view: viewport.main as u64,
                total: 0,
                before: 0,
            },
            position: Position::default(),
            at_start: true,
            at_end: true,
            hit_edge: false,
        }
    }

    /// Extent to size the list container with.
    pub fn extent(&self) -> ElementSize {
        self.arrangement.extent
    }
}

/// A headless scrollable list.
///
/// The controller owns the scroll [`Position`] and the element size cache. It holds no UI
/// objects: each frame the host calls [`layout`](Self::layout) with the viewport and a
/// render callback, then draws the returned arrangement and scrollbar segments itself.
/// Input is fed in between frames through `scroll_by`, `page` and `drag`.
#[derive(Clone, Debug)]
pub struct ListController {
    options: ListOptions,
    length: usize,
    position: Position,
    cache: DimensionCache,
    pending_scroll: i64,
    viewport: Viewport,
    metrics: ScrollMetrics,
    scrollbar: ScrollbarTrack,
    drag: Option<DragState>,
    recent_page_click_ms: Option<u64>,
}

impl Default for ListController {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl ListController {
    pub fn new(options: ListOptions) -> Self {
        vdebug!(
            orientation = ?options.orientation,
            scroll_to_end = options.scroll_to_end,
            scrollbar = options.scrollbar,
            "ListController::new"
        );
        Self {
            cache: DimensionCache::new(options.remeasure_delay_ms, options.measure_batch),
            options,
            length: 0,
            position: Position::default(),
            pending_scroll: 0,
            viewport: Viewport::default(),
            metrics: ScrollMetrics::default(),
            scrollbar: ScrollbarTrack::NONE,
            drag: None,
            recent_page_click_ms: None,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ListOptions) {
        let prev = self.options;
        self.options = options;
        vtrace!(
            orientation = ?options.orientation,
            scroll_to_end = options.scroll_to_end,
            "ListController::set_options"
        );
        self.cache.set_delay_ms(options.remeasure_delay_ms);
        self.cache.set_batch(options.measure_batch);
        if prev.orientation != options.orientation || (options.scrollbar && !prev.scrollbar) {
            self.cache.invalidate();
        }
        if !options.scrollbar {
            self.scrollbar = ScrollbarTrack::NONE;
            self.drag = None;
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    /// Chooses the screen axis the list scrolls along.
    pub fn set_axis(&mut self, orientation: Orientation) {
        if self.options.orientation == orientation {
            return;
        }
        self.options.orientation = orientation;
        self.cache.invalidate();
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Sets the element count.
    ///
    /// A change clamps the position into the new range and schedules a remeasure.
    pub fn set_length(&mut self, length: usize) {
        if self.length == length {
            return;
        }
        vdebug!(length, prev = self.length, "ListController::set_length");
        self.length = length;
        self.position = self.position.clamped(length);
        self.cache.invalidate();
    }

    pub fn scroll_to_end(&self) -> bool {
        self.options.scroll_to_end
    }

    pub fn set_scroll_to_end(&mut self, scroll_to_end: bool) {
        self.options.scroll_to_end = scroll_to_end;
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position.clamped(self.length);
    }

    pub fn jump_to_start(&mut self) {
        self.pending_scroll = 0;
        // `before_end` detaches scroll-to-end lists; otherwise they would snap back.
        self.position = Position {
            first: 0,
            offset: 0,
            before_end: self.length > 0,
        };
    }

    /// Scrolls to the end of the content on the next layout.
    ///
    /// This stores the tail seed; the window pass derives the exact offset that puts the
    /// last element's trailing edge on the viewport's trailing edge, so the result is
    /// correct even while the size cache is being rebuilt.
    pub fn jump_to_end(&mut self) {
        self.pending_scroll = 0;
        self.position = Position::at_end(self.length);
    }

    /// Queues wheel/gesture scroll input; it is applied by the next `layout`.
    pub fn scroll_by(&mut self, delta: i64) {
        self.pending_scroll = self.pending_scroll.saturating_add(delta);
    }

    pub fn pending_scroll(&self) -> i64 {
        self.pending_scroll
    }

    /// The size snapshot used for scrollbar math (possibly stale).
    pub fn dimensions(&self) -> &DimensionList {
        self.cache.dims()
    }

    /// Whether a remeasure is scheduled or still running.
    pub fn is_measurement_pending(&self) -> bool {
        self.cache.is_pending()
    }

    /// Forces a remeasure, e.g. after element content changed without a length change.
    pub fn invalidate_dimensions(&mut self) {
        self.cache.invalidate();
    }

    /// Scrollbar segments from the last layout.
    pub fn scrollbar(&self) -> ScrollbarTrack {
        self.scrollbar
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// The viewport passed to the last layout.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Lays out one frame.
    ///
    /// `render(index, constraints)` draws element `index` and reports its size. It is
    /// called once per visible element, plus once per element for the measurement pass
    /// whenever the size cache is rebuilt (the content of that pass is discarded).
    ///
    /// Apart from consuming queued scroll input and scheduling remeasures, the result
    /// depends only on the position, length, viewport and what `render` returns.
    pub fn layout<C>(
        &mut self,
        viewport: Viewport,
        now_ms: u64,
        mut render: impl FnMut(usize, Constraints) -> (ElementSize, C),
    ) -> ListLayout<C> {
        let delta = core::mem::take(&mut self.pending_scroll);
        self.viewport = viewport;

        if self.length == 0 {
            vtrace!("ListController::layout empty list");
            self.position = Position::default();
            self.scrollbar = ScrollbarTrack::NONE;
            let out = ListLayout::placeholder(viewport);
            self.metrics = out.metrics;
            return out;
        }

        if self.options.scrollbar {
            self.cache
                .observe(self.length, viewport, self.options.orientation, now_ms);
            self.cache.refresh(now_ms, &mut render);
        }

        let window = Window::build(
            WindowParams {
                length: self.length,
                viewport,
                position: self.position,
                scroll_delta: delta,
                scroll_to_end: self.options.scroll_to_end,
                short_content: self.options.short_content_align,
                cross_align: self.options.cross_align,
            },
            &mut render,
        );
        self.position = window.position;

        if self.options.scrollbar {
            self.metrics = ScrollMetrics::new(self.cache.dims(), self.position, viewport.main);
            self.scrollbar = ScrollbarTrack::compute(self.metrics, self.options.thumb_thickness);
        } else {
            self.metrics = ScrollMetrics {
                view: viewport.main as u64,
                total: 0,
                before: 0,
            };
            self.scrollbar = ScrollbarTrack::NONE;
        }

        vtrace!(
            first = self.position.first,
            offset = self.position.offset,
            before_end = self.position.before_end,
            drawn = window.arrangement.len(),
            "ListController::layout"
        );

        ListLayout {
            arrangement: window.arrangement,
            scrollbar: self.scrollbar,
            metrics: self.metrics,
            position: self.position,
            at_start: window.at_start,
            at_end: window.at_end,
            hit_edge: window.hit_edge,
        }
    }

    /// Handles a click in one of the scrollbar gaps: moves one viewport in `direction`.
    ///
    /// Returns `false` when nothing moved (no scrollbar, or the content fits).
    pub fn page(&mut self, direction: PageDirection, now_ms: u64) -> bool {
        self.recent_page_click_ms = Some(now_ms);
        if !self.options.scrollbar {
            return false;
        }
        let Some(target) = page_target(
            self.cache.dims(),
            self.position,
            direction,
            self.viewport.main,
        ) else {
            return false;
        };
        vtrace!(?direction, first = target.first, offset = target.offset, "page");
        self.pending_scroll = 0;
        self.position = target.clamped(self.length);
        true
    }

    /// Starts a thumb drag gesture.
    pub fn begin_drag(&mut self, now_ms: u64) {
        self.drag = Some(DragState {
            pending: 0,
            last_ms: Some(now_ms),
        });
    }

    /// Feeds thumb movement (pixels along the main axis) into the current drag.
    ///
    /// Returns `true` when the position changed.
    pub fn drag(&mut self, delta: i64, now_ms: u64) -> bool {
        if !self.options.scrollbar {
            return false;
        }
        let suppress_ms = self.options.page_click_suppress_ms;
        if self
            .recent_page_click_ms
            .is_some_and(|click| now_ms.saturating_sub(click) < suppress_ms)
        {
            vtrace!(delta, "drag suppressed after page click");
            return false;
        }
        let threshold = self.options.drag_threshold;
        let state = self.drag.get_or_insert_with(DragState::default);
        let Some(delta) = state.accumulate(delta, now_ms, threshold) else {
            return false;
        };
        let view = self.viewport.main;
        let Some(target) = drag_target(self.cache.dims(), self.position, delta, view) else {
            return false;
        };
        self.pending_scroll = 0;
        self.position = target.clamped(self.length);
        true
    }

    /// Ends the current drag gesture, discarding any sub-threshold movement.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
