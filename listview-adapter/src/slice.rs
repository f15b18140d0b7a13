use alloc::boxed::Box;
use alloc::vec::Vec;

use listview::{Constraints, ElementSize, ListController, ListLayout, Viewport};

/// One element of a [`Slice`].
pub type SliceElement<'a, C> = Box<dyn FnMut(Constraints) -> (ElementSize, C) + 'a>;

/// A fixed set of elements, each its own render closure.
///
/// Handy for short, heterogeneous lists (settings pages, menus) where writing an indexed
/// render callback is more trouble than it is worth.
pub struct Slice<'a, C> {
    elements: Vec<SliceElement<'a, C>>,
}

impl<C> core::fmt::Debug for Slice<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slice")
            .field("len", &self.elements.len())
            .finish()
    }
}

impl<C> Default for Slice<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C> Slice<'a, C> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl FnMut(Constraints) -> (ElementSize, C) + 'a) {
        self.elements.push(Box::new(element));
    }

    pub fn with(mut self, element: impl FnMut(Constraints) -> (ElementSize, C) + 'a) -> Self {
        self.push(element);
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Renders element `index`. Panics if `index` is out of range, like slice indexing.
    pub fn render(&mut self, index: usize, constraints: Constraints) -> (ElementSize, C) {
        (self.elements[index])(constraints)
    }

    /// Sets the list length to this slice's and lays out one frame.
    pub fn layout(
        &mut self,
        list: &mut ListController,
        viewport: Viewport,
        now_ms: u64,
    ) -> ListLayout<C> {
        list.set_length(self.len());
        list.layout(viewport, now_ms, |index, c| self.render(index, c))
    }
}

impl<'a, C> FromIterator<SliceElement<'a, C>> for Slice<'a, C> {
    fn from_iter<I: IntoIterator<Item = SliceElement<'a, C>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
