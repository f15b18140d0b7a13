use listview::{Orientation, ScrollbarTrack, Viewport};

/// Which cross-axis edge of the list the scrollbar sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollbarSide {
    /// Left of a vertical list, top of a horizontal one.
    Start,
    #[default]
    End,
}

/// A screen-space rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect from main/cross coordinates.
    pub fn from_axes(
        orientation: Orientation,
        main: u32,
        cross: u32,
        main_len: u32,
        cross_len: u32,
    ) -> Self {
        let (x, y) = orientation.to_xy(main, cross);
        let (width, height) = orientation.to_xy(main_len, cross_len);
        Self::new(x, y, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Half-open containment test; empty rects contain nothing.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (left, top) = (self.x as i64, self.y as i64);
        x >= left && y >= top && x < left + self.width as i64 && y < top + self.height as i64
    }
}

/// A region of the list returned by [`ChromeLayout::hit_test`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Part {
    Content,
    /// Scrollbar gap before the thumb.
    LeadGap,
    Thumb,
    /// Scrollbar gap after the thumb.
    TrailGap,
}

/// Placement rules for the scrollbar around the list content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chrome {
    pub side: ScrollbarSide,
    /// Space between the content and the scrollbar, along the cross axis.
    pub gutter: u32,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            side: ScrollbarSide::End,
            gutter: 0,
        }
    }
}

impl Chrome {
    pub fn with_side(mut self, side: ScrollbarSide) -> Self {
        self.side = side;
        self
    }

    pub fn with_gutter(mut self, gutter: u32) -> Self {
        self.gutter = gutter;
        self
    }

    /// Cross extent taken away from the content when the scrollbar is shown.
    pub fn reserved(&self, thickness: u32) -> u32 {
        thickness.saturating_add(self.gutter)
    }

    /// The viewport handed to the list: `outer` minus the scrollbar strip, if shown.
    pub fn content_viewport(&self, outer: Viewport, thickness: u32, scrollbar: bool) -> Viewport {
        if !scrollbar {
            return outer;
        }
        let reserved = self.reserved(thickness);
        if reserved > outer.cross {
            vwarn!(
                reserved,
                cross = outer.cross,
                "Chrome: scrollbar wider than the list"
            );
        }
        Viewport::new(outer.main, outer.cross.saturating_sub(reserved))
    }

    /// Places the content area and the scrollbar segments inside `outer`.
    pub fn place(
        &self,
        outer: Viewport,
        orientation: Orientation,
        track: ScrollbarTrack,
        thickness: u32,
    ) -> ChromeLayout {
        let visible = track.is_visible();
        let content = self.content_viewport(outer, thickness, visible);
        let bar_cross = thickness.min(outer.cross);

        let (content_cross, bar_at) = match self.side {
            ScrollbarSide::End => (0, outer.cross.saturating_sub(bar_cross)),
            ScrollbarSide::Start if visible => (outer.cross - content.cross, 0),
            ScrollbarSide::Start => (0, 0),
        };

        let segment = |main: u32, len: u32| {
            if visible {
                Rect::from_axes(orientation, main, bar_at, len, bar_cross)
            } else {
                Rect::default()
            }
        };
        let lead = segment(0, track.lead);
        let thumb = segment(track.lead, track.thumb);
        let trail = segment(track.lead.saturating_add(track.thumb), track.trail);

        ChromeLayout {
            content: Rect::from_axes(orientation, 0, content_cross, content.main, content.cross),
            lead,
            thumb,
            trail,
            orientation,
        }
    }
}

/// Screen-space rectangles for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromeLayout {
    pub content: Rect,
    pub lead: Rect,
    pub thumb: Rect,
    pub trail: Rect,
    pub orientation: Orientation,
}

impl ChromeLayout {
    pub fn scrollbar_visible(&self) -> bool {
        !self.thumb.is_empty()
    }

    /// Finds the part under a pointer at `(x, y)`.
    pub fn hit_test(&self, x: i64, y: i64) -> Option<Part> {
        [
            (self.thumb, Part::Thumb),
            (self.lead, Part::LeadGap),
            (self.trail, Part::TrailGap),
            (self.content, Part::Content),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(x, y))
        .map(|(_, part)| part)
    }

    /// Main-axis component of a pointer coordinate.
    pub fn main_of(&self, x: i64, y: i64) -> i64 {
        self.orientation.from_xy(x, y).0
    }
}
