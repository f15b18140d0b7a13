//! Adapter utilities for the `listview` crate.
//!
//! The `listview` crate is UI-agnostic and only produces main/cross-axis numbers. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Scrollbar chrome: placing the content and the three scrollbar segments in screen space
//! - Pointer routing: hit testing presses into page clicks and thumb drags
//! - [`Slice`]: a list built from a fixed set of element closures
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod chrome;
mod controller;
mod slice;

#[cfg(test)]
mod tests;

pub use chrome::{Chrome, ChromeLayout, Part, Rect, ScrollbarSide};
pub use controller::{Controller, Frame};
pub use slice::{Slice, SliceElement};
