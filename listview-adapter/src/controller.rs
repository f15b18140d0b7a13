use listview::{
    Constraints, ElementSize, ListController, ListLayout, ListOptions, PageDirection, Viewport,
};

use crate::{Chrome, ChromeLayout, Part};

/// One frame from [`Controller::layout`]: the list arrangement plus where to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame<C> {
    pub list: ListLayout<C>,
    pub chrome: ChromeLayout,
}

/// A framework-neutral controller that wraps a [`ListController`] and routes pointer input
/// to it through the scrollbar chrome.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `layout(outer, now_ms, render)` once per frame
/// - `on_wheel` for scroll wheel/touchpad input
/// - `on_press` / `on_drag` / `on_release` for pointer input inside the list's bounds
///
/// Pointer coordinates are relative to the list's top-left corner and are hit-tested
/// against the previous frame's chrome.
#[derive(Clone, Debug)]
pub struct Controller {
    list: ListController,
    chrome: Chrome,
    last: Option<ChromeLayout>,
    pressed: Option<Part>,
    pointer_main: i64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ListOptions::default(), Chrome::default())
    }
}

impl Controller {
    pub fn new(options: ListOptions, chrome: Chrome) -> Self {
        Self::from_list(ListController::new(options), chrome)
    }

    pub fn from_list(list: ListController, chrome: Chrome) -> Self {
        Self {
            list,
            chrome,
            last: None,
            pressed: None,
            pointer_main: 0,
        }
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListController {
        &mut self.list
    }

    pub fn into_list(self) -> ListController {
        self.list
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    pub fn set_chrome(&mut self, chrome: Chrome) {
        self.chrome = chrome;
    }

    /// Chrome from the last `layout`, used for hit testing.
    pub fn last_chrome(&self) -> Option<&ChromeLayout> {
        self.last.as_ref()
    }

    /// Lays out one frame inside `outer`.
    ///
    /// Whether to reserve room for the scrollbar is decided from the previous frame, so
    /// the content viewport only narrows once the list is known to overflow.
    pub fn layout<C>(
        &mut self,
        outer: Viewport,
        now_ms: u64,
        render: impl FnMut(usize, Constraints) -> (ElementSize, C),
    ) -> Frame<C> {
        let options = *self.list.options();
        let thickness = options.thumb_thickness;
        let reserve = options.scrollbar && self.list.scrollbar().is_visible();
        let viewport = self.chrome.content_viewport(outer, thickness, reserve);

        let list = self.list.layout(viewport, now_ms, render);
        let chrome = self
            .chrome
            .place(outer, options.orientation, list.scrollbar, thickness);
        if chrome.scrollbar_visible() != reserve {
            vtrace!(
                visible = chrome.scrollbar_visible(),
                "Controller: scrollbar visibility changed"
            );
        }
        self.last = Some(chrome);
        Frame { list, chrome }
    }

    /// Queues wheel input (main-axis pixels, positive toward the end).
    pub fn on_wheel(&mut self, delta: i64) {
        self.list.scroll_by(delta);
    }

    /// Handles a pointer press; returns the part that was hit.
    ///
    /// A press in a scrollbar gap pages one viewport; a press on the thumb starts a drag.
    pub fn on_press(&mut self, x: i64, y: i64, now_ms: u64) -> Option<Part> {
        let chrome = self.last?;
        let part = chrome.hit_test(x, y)?;
        vdebug!(?part, x, y, "Controller::on_press");
        match part {
            Part::LeadGap => {
                self.list.page(PageDirection::Backward, now_ms);
            }
            Part::TrailGap => {
                self.list.page(PageDirection::Forward, now_ms);
            }
            Part::Thumb => {
                self.pointer_main = chrome.main_of(x, y);
                self.list.begin_drag(now_ms);
            }
            Part::Content => {}
        }
        self.pressed = Some(part);
        Some(part)
    }

    /// Handles pointer movement; only scrolls while the thumb is held.
    ///
    /// Returns `true` when the position changed.
    pub fn on_drag(&mut self, x: i64, y: i64, now_ms: u64) -> bool {
        if self.pressed != Some(Part::Thumb) {
            return false;
        }
        let Some(chrome) = self.last else {
            return false;
        };
        let main = chrome.main_of(x, y);
        let delta = main.saturating_sub(self.pointer_main);
        self.pointer_main = main;
        self.list.drag(delta, now_ms)
    }

    pub fn on_release(&mut self) {
        if self.pressed.take() == Some(Part::Thumb) {
            self.list.end_drag();
        }
    }

    pub fn pressed(&self) -> Option<Part> {
        self.pressed
    }
}
