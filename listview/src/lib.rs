//! A headless scrollable-list windowing engine.
//!
//! For scrollbar chrome placement and pointer routing, see the `listview-adapter` crate.
//!
//! Given an element count, a render callback and a viewport, the engine renders only the
//! run of elements that overlaps the viewport, keeps a scroll [`Position`] that survives
//! resizes and length changes, and derives proportional scrollbar segments from a
//! debounced cache of every element's size.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport extents (main axis = scroll axis, cross axis = the other one)
//! - a render callback that draws element `i` and reports its size
//! - pre-decoded scroll, page-click and thumb-drag input
//! - a monotonic clock in milliseconds (for the remeasure debounce)
//!
//! ```
//! use listview::{ElementSize, ListController, ListOptions, Viewport};
//!
//! let mut list = ListController::new(ListOptions::default());
//! list.set_length(1_000);
//!
//! let frame = list.layout(Viewport::new(120, 80), 0, |index, c| {
//!     (ElementSize::new(50, c.max.cross), index)
//! });
//! let drawn: Vec<usize> = frame.arrangement.indices().collect();
//! assert_eq!(drawn, [0, 1, 2]);
//! assert!(frame.scrollbar.is_visible());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod dimensions;
mod fenwick;
mod options;
mod position;
mod scrollbar;
mod types;
mod window;


pub use controller::{ListController, ListLayout};
pub use dimensions::{DimensionCache, DimensionList};
pub use options::ListOptions;
pub use scrollbar::{
    DragState, PageDirection, ScrollMetrics, ScrollbarTrack, drag_target, page_target,
};
pub use types::{
    Arrangement, Axis, Constraints, CrossAlign, ElementSize, Orientation, Position,
    ShortContentAlign, UNBOUNDED, Viewport, VisibleElement,
};
pub use window::{Window, WindowParams};
