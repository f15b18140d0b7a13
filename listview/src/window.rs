use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{
    Arrangement, Constraints, CrossAlign, ElementSize, Position, ShortContentAlign, Viewport,
    VisibleElement,
};

/// Inputs for a single window pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowParams {
    pub length: usize,
    pub viewport: Viewport,
    pub position: Position,
    /// Scroll input accumulated since the previous frame (positive scrolls toward the end).
    pub scroll_delta: i64,
    pub scroll_to_end: bool,
    pub short_content: ShortContentAlign,
    pub cross_align: CrossAlign,
}

impl WindowParams {
    pub fn new(length: usize, viewport: Viewport, position: Position) -> Self {
        Self {
            length,
            viewport,
            position,
            scroll_delta: 0,
            scroll_to_end: false,
            short_content: ShortContentAlign::default(),
            cross_align: CrossAlign::default(),
        }
    }
}

/// The result of one window pass: what to draw and where the list now stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window<C> {
    pub arrangement: Arrangement<C>,
    /// The finalized position, including the updated `before_end`.
    pub position: Position,
    pub at_start: bool,
    pub at_end: bool,
    /// Scroll input pushed against the start or end of the list.
    ///
    /// Hosts running a fling animation should stop it when this is set.
    pub hit_edge: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Idle,
    ExpandForward,
    ExpandBackward,
}

/// Iteration state for one pass. Created and consumed inside [`Window::build`], so an
/// unfinished pass can never leak into the next frame.
struct Pass<C> {
    position: Position,
    length: usize,
    view: i64,
    children: VecDeque<(ElementSize, C)>,
    /// Sum of the main extents in `children`.
    covered: i64,
}

impl<C> Pass<C> {
    fn last(&self) -> usize {
        self.position.first + self.children.len()
    }

    /// Applies the boundary clamps, then picks the next direction.
    fn next_step(&mut self) -> Step {
        let at_tail = self.last() == self.length;
        let pos = &mut self.position;
        // Tail: no gap after the last element.
        if at_tail && self.covered.saturating_sub(pos.offset) < self.view {
            pos.offset = self.covered - self.view;
        }
        // Head: no gap before the first element.
        if pos.offset < 0 && pos.first == 0 {
            pos.offset = 0;
        }

        if self.children.len() == self.length {
            Step::Idle
        } else if self.covered.saturating_sub(pos.offset) < self.view {
            Step::ExpandForward
        } else if pos.offset < 0 {
            Step::ExpandBackward
        } else {
            Step::Idle
        }
    }

    fn append(&mut self, size: ElementSize, content: C) {
        self.covered = self.covered.saturating_add(size.main as i64);
        self.children.push_back((size, content));
    }

    fn prepend(&mut self, size: ElementSize, content: C) {
        let main = size.main as i64;
        self.covered = self.covered.saturating_add(main);
        self.children.push_front((size, content));
        self.position.first -= 1;
        self.position.offset = self.position.offset.saturating_add(main);
    }
}

impl<C> Window<C> {
    /// Expands a contiguous run of elements from `params.position` until it covers the
    /// viewport, then trims it to what is visible.
    ///
    /// Every element in the returned arrangement was rendered exactly once, with the
    /// main extent unbounded and the cross extent limited to the viewport.
    pub fn build(
        params: WindowParams,
        render: &mut impl FnMut(usize, Constraints) -> (ElementSize, C),
    ) -> Self {
        let WindowParams {
            length,
            viewport,
            scroll_delta: delta,
            scroll_to_end,
            ..
        } = params;

        let mut position = params.position;
        position.offset = position.offset.saturating_add(delta);
        let mut sticky = scroll_to_end && !position.before_end;
        if sticky || position.first > length {
            position = Position {
                first: length,
                offset: 0,
                before_end: position.before_end,
            };
        }

        let mut pass = Pass {
            position,
            length,
            view: viewport.main as i64,
            children: VecDeque::new(),
            covered: 0,
        };
        let constraints = Constraints::loose(viewport.cross);

        loop {
            let mut step = pass.next_step();
            // User scroll input is applied after settling at the end; moving toward the
            // start detaches a sticky list.
            if step == Step::Idle && sticky && delta < 0 {
                sticky = false;
                pass.position.before_end = true;
                pass.position.offset = pass.position.offset.saturating_add(delta);
                step = pass.next_step();
            }
            match step {
                Step::Idle => break,
                Step::ExpandForward => {
                    let index = pass.last();
                    debug_assert!(index < length, "window index out of range");
                    let (size, content) = render(index, constraints);
                    pass.append(size, content);
                }
                Step::ExpandBackward => {
                    let index = pass.position.first - 1;
                    let (size, content) = render(index, constraints);
                    pass.prepend(size, content);
                }
            }
        }

        vtrace!(
            first = pass.position.first,
            offset = pass.position.offset,
            rendered = pass.children.len(),
            "Window::build expanded"
        );
        pass.finish(params, delta)
    }
}

impl<C> Pass<C> {
    fn finish(mut self, params: WindowParams, delta: i64) -> Window<C> {
        let view = self.view;

        // Drop leading elements that end before the viewport starts. An element whose
        // trailing edge sits exactly on the viewport start is kept.
        while let Some((size, _)) = self.children.front() {
            let main = size.main as i64;
            if self.position.offset <= main {
                break;
            }
            self.position.first += 1;
            self.position.offset -= main;
            self.children.pop_front();
        }

        // Drop trailing elements that start after the viewport ends.
        let mut end = -self.position.offset;
        let mut keep = self.children.len();
        for (i, (size, _)) in self.children.iter().enumerate() {
            end = end.saturating_add(size.main as i64);
            if end >= view {
                keep = i + 1;
                break;
            }
        }
        self.children.truncate(keep);

        let max_cross = self.children.iter().map(|(s, _)| s.cross).max().unwrap_or(0);

        let mut cursor = -self.position.offset;
        if params.scroll_to_end && params.short_content == ShortContentAlign::End {
            let space = view - end;
            if space > 0 {
                cursor += space;
            }
        }

        let first = self.position.first;
        let mut elements = Vec::with_capacity(self.children.len());
        for (i, (size, content)) in self.children.into_iter().enumerate() {
            let cross_offset = match params.cross_align {
                CrossAlign::Start => 0,
                CrossAlign::Middle => (max_cross - size.cross) / 2,
                CrossAlign::End => max_cross - size.cross,
            };
            elements.push(VisibleElement {
                index: first + i,
                main_offset: cursor,
                cross_offset,
                size,
                content,
            });
            cursor = cursor.saturating_add(size.main as i64);
        }

        let at_start = first == 0 && self.position.offset <= 0;
        let at_end = first + elements.len() == self.length && view >= cursor;
        let hit_edge = (at_start && delta < 0) || (at_end && delta > 0);
        self.position.before_end = !at_end;

        let extent = ElementSize::new(cursor.clamp(0, view.max(0)) as u32, max_cross);
        Window {
            arrangement: Arrangement {
                elements,
                extent,
                placeholder: false,
            },
            position: self.position,
            at_start,
            at_end,
            hit_edge,
        }
    }
}
