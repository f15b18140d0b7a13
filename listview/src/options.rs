use crate::{CrossAlign, Orientation, ShortContentAlign};

/// Configuration for [`crate::ListController`].
///
/// All fields are plain data, so adapters can keep a copy around, tweak a few fields and
/// hand it back through `ListController::set_options`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListOptions {
    /// Screen axis the list scrolls along.
    pub orientation: Orientation,

    /// Keep the list scrolled to its end once it gets there (chat logs, consoles).
    ///
    /// A list with this set and `Position::before_end == false` ignores its stored
    /// position and draws the last element at the viewport's trailing edge.
    pub scroll_to_end: bool,

    /// Placement of short content in a scroll-to-end list.
    pub short_content_align: ShortContentAlign,

    pub cross_align: CrossAlign,

    /// Whether to derive scrollbar geometry at all.
    ///
    /// When disabled the list still scrolls by [`crate::ListController::scroll_by`], but
    /// the measurement pass never runs.
    pub scrollbar: bool,

    /// Cross-axis thickness of the scrollbar; also the minimum thumb length.
    pub thumb_thickness: u32,

    /// How long a length/viewport change must settle before remeasuring.
    pub remeasure_delay_ms: u64,

    /// Drag events this soon after a page click belong to the same gesture and are ignored.
    pub page_click_suppress_ms: u64,

    /// Thumb movement (in pixels) that must accumulate before a drag scrolls.
    pub drag_threshold: u32,

    /// Elements measured per frame; `None` measures everything in one frame.
    pub measure_batch: Option<usize>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            scroll_to_end: false,
            short_content_align: ShortContentAlign::Start,
            cross_align: CrossAlign::Start,
            scrollbar: true,
            thumb_thickness: 12,
            remeasure_delay_ms: 100,
            page_click_suppress_ms: 500,
            drag_threshold: 8,
            measure_batch: None,
        }
    }
}

impl ListOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_scroll_to_end(mut self, scroll_to_end: bool) -> Self {
        self.scroll_to_end = scroll_to_end;
        self
    }

    pub fn with_short_content_align(mut self, align: ShortContentAlign) -> Self {
        self.short_content_align = align;
        self
    }

    pub fn with_cross_align(mut self, align: CrossAlign) -> Self {
        self.cross_align = align;
        self
    }

    pub fn with_scrollbar(mut self, scrollbar: bool) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    pub fn with_thumb_thickness(mut self, thickness: u32) -> Self {
        self.thumb_thickness = thickness;
        self
    }

    pub fn with_remeasure_delay_ms(mut self, delay_ms: u64) -> Self {
        self.remeasure_delay_ms = delay_ms;
        self
    }

    pub fn with_page_click_suppress_ms(mut self, suppress_ms: u64) -> Self {
        self.page_click_suppress_ms = suppress_ms;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: u32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Time-slices the measurement pass: `batch` elements per frame.
    pub fn with_measure_batch(mut self, batch: Option<usize>) -> Self {
        self.measure_batch = batch;
        self
    }
}
