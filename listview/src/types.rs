use alloc::vec::Vec;

/// Sentinel for an unconstrained main extent in [`Constraints`].
pub const UNBOUNDED: u32 = u32::MAX;

/// A logical axis relative to the list: the scrolling axis or its perpendicular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Main,
    Cross,
}

/// Maps [`Axis::Main`] onto a screen axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// Converts a `(main, cross)` pair into `(x, y)`.
    pub fn to_xy<T>(self, main: T, cross: T) -> (T, T) {
        match self {
            Self::Horizontal => (main, cross),
            Self::Vertical => (cross, main),
        }
    }

    /// Converts an `(x, y)` pair into `(main, cross)`.
    pub fn from_xy<T>(self, x: T, y: T) -> (T, T) {
        match self {
            Self::Horizontal => (x, y),
            Self::Vertical => (y, x),
        }
    }
}

/// Alignment of elements along the cross axis, relative to the widest drawn element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossAlign {
    #[default]
    Start,
    Middle,
    End,
}

/// Where a scroll-to-end list places content that is shorter than the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortContentAlign {
    /// Content starts at the viewport's leading edge.
    #[default]
    Start,
    /// Content ends at the viewport's trailing edge.
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSize {
    pub main: u32,
    pub cross: u32,
}

impl ElementSize {
    pub const fn new(main: u32, cross: u32) -> Self {
        Self { main, cross }
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Main => self.main,
            Axis::Cross => self.cross,
        }
    }
}

/// Size limits handed to the element render callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraints {
    pub min: ElementSize,
    pub max: ElementSize,
}

impl Constraints {
    /// Constraints for the real per-frame pass: main unbounded, cross up to `cross`.
    pub fn loose(cross: u32) -> Self {
        Self {
            min: ElementSize::new(0, 0),
            max: ElementSize::new(UNBOUNDED, cross),
        }
    }

    /// Constraints for the measurement pass: main unbounded, cross fixed to `cross`.
    pub fn measure(cross: u32) -> Self {
        Self {
            min: ElementSize::new(0, cross),
            max: ElementSize::new(UNBOUNDED, cross),
        }
    }

    pub fn is_main_bounded(&self) -> bool {
        self.max.main != UNBOUNDED
    }
}

/// The list area for one frame, in main/cross terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub main: u32,
    pub cross: u32,
}

impl Viewport {
    pub const fn new(main: u32, cross: u32) -> Self {
        Self { main, cross }
    }
}

/// A scroll position expressed relative to an element rather than in absolute pixels.
///
/// Positions survive content changes above the viewport better than raw offsets: only
/// the element at `first` anchors the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Index of the first visible element, in `0..=length`.
    pub first: usize,
    /// How far the leading edge of `first` lies before the viewport's leading edge.
    pub offset: i64,
    /// Whether the list is scrolled away from its very end.
    ///
    /// Tracked as "before end" rather than "at end" so the zero value is a useful
    /// default. Only consulted by lists with scroll-to-end enabled.
    pub before_end: bool,
}

impl Position {
    pub const fn new(first: usize, offset: i64) -> Self {
        Self {
            first,
            offset,
            before_end: false,
        }
    }

    /// The tail seed: positioned past the last element, resolved to a flush end by the
    /// window pass.
    pub const fn at_end(length: usize) -> Self {
        Self {
            first: length,
            offset: 0,
            before_end: false,
        }
    }
}

/// One element materialized for the current frame.
///
/// The first element of a window may end exactly at the viewport's leading edge
/// (`main_end() == 0`) and so cover no visible pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleElement<C> {
    pub index: usize,
    /// Leading edge relative to the viewport's leading edge (negative when clipped).
    pub main_offset: i64,
    /// Offset along the cross axis from [`CrossAlign`].
    pub cross_offset: u32,
    pub size: ElementSize,
    pub content: C,
}

impl<C> VisibleElement<C> {
    pub fn main_end(&self) -> i64 {
        self.main_offset.saturating_add(self.size.main as i64)
    }
}

/// The ordered set of elements to draw for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement<C> {
    pub elements: Vec<VisibleElement<C>>,
    /// Extent occupied by the arrangement (main is clamped to the viewport).
    pub extent: ElementSize,
    /// `true` for the empty-list placeholder that fills the viewport.
    pub placeholder: bool,
}

impl<C> Arrangement<C> {
    pub fn placeholder(viewport: Viewport) -> Self {
        Self {
            elements: Vec::new(),
            extent: ElementSize::new(viewport.main, viewport.cross),
            placeholder: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().map(|e| e.index)
    }
}
