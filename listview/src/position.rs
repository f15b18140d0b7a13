use crate::{DimensionList, Position};

impl Position {
    /// Clamps `first` into `0..=length`; an empty list resets to the zero position.
    pub fn clamped(self, length: usize) -> Self {
        if length == 0 {
            return Self {
                first: 0,
                offset: 0,
                before_end: self.before_end,
            };
        }
        if self.first > length {
            vwarn!(
                first = self.first,
                length,
                "Position: first past the end, clamped"
            );
        }
        Self {
            first: self.first.min(length),
            ..self
        }
    }
}

impl DimensionList {
    /// Absolute content coordinate of the viewport's leading edge for `pos`.
    ///
    /// `pos.first` beyond the measured length counts as the end of the content.
    pub fn to_coordinate(&self, pos: Position) -> i64 {
        let before = self.extent_before(pos.first);
        clamp_i64(before).saturating_add(pos.offset)
    }

    /// Converts an absolute content coordinate back into a [`Position`].
    ///
    /// Coordinates at or before the start keep their (non-positive) remainder in
    /// `offset`. Coordinates at or past the end map to `first == len()`, which the window
    /// pass resolves to a view flush with the end of the content.
    pub fn from_coordinate(&self, coordinate: i64) -> Position {
        if coordinate <= 0 || self.is_empty() {
            return Position::new(0, coordinate.min(0));
        }
        let total = self.total();
        let c = coordinate as u64;
        if c >= total {
            return Position::new(self.len(), clamp_i64(c - total));
        }
        let first = self.count_within(c);
        debug_assert!(first < self.len());
        let before = self.extent_before(first);
        Position::new(first, clamp_i64(c - before))
    }

    /// Largest leading-edge coordinate that still fills a viewport of `view`.
    pub fn max_coordinate(&self, view: u32) -> i64 {
        clamp_i64(self.total().saturating_sub(view as u64))
    }
}

pub(crate) fn clamp_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
