use crate::*;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::Cell;

use listview::{
    Constraints, ElementSize, ListController, ListOptions, Orientation, Position, ScrollbarTrack,
    Viewport,
};

const OUTER: Viewport = Viewport::new(100, 50);

fn uniform(main: u32) -> impl FnMut(usize, Constraints) -> (ElementSize, usize) {
    move |i, c| (ElementSize::new(main, c.max.cross), i)
}

fn track(lead: u32, thumb: u32, trail: u32) -> ScrollbarTrack {
    ScrollbarTrack { lead, thumb, trail }
}

#[test]
fn end_side_scrollbar_takes_the_trailing_cross_strip() {
    let chrome = Chrome::default();
    let out = chrome.place(OUTER, Orientation::Vertical, track(20, 30, 50), 10);

    assert!(out.scrollbar_visible());
    assert_eq!(out.content, Rect::new(0, 0, 40, 100));
    assert_eq!(out.lead, Rect::new(40, 0, 10, 20));
    assert_eq!(out.thumb, Rect::new(40, 20, 10, 30));
    assert_eq!(out.trail, Rect::new(40, 50, 10, 50));

    assert_eq!(out.hit_test(45, 25), Some(Part::Thumb));
    assert_eq!(out.hit_test(45, 5), Some(Part::LeadGap));
    assert_eq!(out.hit_test(45, 99), Some(Part::TrailGap));
    assert_eq!(out.hit_test(10, 10), Some(Part::Content));
    assert_eq!(out.hit_test(45, 100), None);
    assert_eq!(out.hit_test(-1, 0), None);
}

#[test]
fn start_side_scrollbar_with_gutter() {
    let chrome = Chrome::default()
        .with_side(ScrollbarSide::Start)
        .with_gutter(4);
    let out = chrome.place(OUTER, Orientation::Vertical, track(0, 40, 60), 10);

    assert_eq!(out.content, Rect::new(14, 0, 36, 100));
    assert_eq!(out.thumb, Rect::new(0, 0, 10, 40));
    assert_eq!(out.lead, Rect::new(0, 0, 10, 0));
    assert_eq!(out.hit_test(5, 10), Some(Part::Thumb));
    assert_eq!(out.hit_test(5, 70), Some(Part::TrailGap));
    // The gutter belongs to nobody.
    assert_eq!(out.hit_test(12, 10), None);
    assert_eq!(out.hit_test(20, 10), Some(Part::Content));
}

#[test]
fn horizontal_lists_put_the_scrollbar_below() {
    let chrome = Chrome::default();
    let outer = Viewport::new(200, 30);
    let out = chrome.place(outer, Orientation::Horizontal, track(50, 60, 90), 10);

    assert_eq!(out.content, Rect::new(0, 0, 200, 20));
    assert_eq!(out.thumb, Rect::new(50, 20, 60, 10));
    assert_eq!(out.hit_test(70, 25), Some(Part::Thumb));
    assert_eq!(out.hit_test(10, 25), Some(Part::LeadGap));
    assert_eq!(out.main_of(70, 25), 70);
}

#[test]
fn hidden_scrollbar_leaves_content_full_size() {
    let chrome = Chrome::default().with_gutter(6);
    let out = chrome.place(OUTER, Orientation::Vertical, ScrollbarTrack::NONE, 10);

    assert!(!out.scrollbar_visible());
    assert_eq!(out.content, Rect::new(0, 0, 50, 100));
    assert_eq!(out.hit_test(45, 10), Some(Part::Content));
    assert_eq!(
        chrome.content_viewport(OUTER, 10, false),
        Viewport::new(100, 50)
    );
    assert_eq!(
        chrome.content_viewport(OUTER, 10, true),
        Viewport::new(100, 34)
    );
    assert_eq!(
        chrome.content_viewport(Viewport::new(100, 8), 10, true),
        Viewport::new(100, 0)
    );
}

fn controller() -> Controller {
    let options = ListOptions::default().with_thumb_thickness(10);
    let mut c = Controller::new(options, Chrome::default());
    c.list_mut().set_length(20);
    c
}

#[test]
fn controller_reserves_scrollbar_space_from_previous_frame() {
    let mut c = controller();
    let widths = Cell::new(0u32);
    let mut render = |i: usize, k: Constraints| {
        if k.min.cross == 0 {
            widths.set(k.max.cross);
        }
        (ElementSize::new(50, k.max.cross), i)
    };

    let f = c.layout(OUTER, 0, &mut render);
    assert_eq!(widths.get(), 50);
    assert!(f.chrome.scrollbar_visible());
    assert_eq!(f.chrome.content, Rect::new(0, 0, 40, 100));

    let f = c.layout(OUTER, 16, &mut render);
    assert_eq!(widths.get(), 40);
    assert_eq!(f.list.scrollbar, track(0, 19, 81));
}

#[test]
fn controller_routes_presses_and_drags() {
    let mut c = controller();
    assert_eq!(c.on_press(45, 90, 0), None);

    c.layout(OUTER, 0, uniform(50));
    assert_eq!(c.on_press(45, 90, 1_000), Some(Part::TrailGap));
    assert_eq!(c.list().dimensions().to_coordinate(c.list().position()), 100);
    assert!(!c.on_drag(45, 120, 1_001));
    c.on_release();

    let f = c.layout(OUTER, 1_016, uniform(50));
    assert_eq!(f.list.scrollbar.lead, 9);
    assert_eq!(f.chrome.thumb, Rect::new(40, 9, 10, 19));

    assert_eq!(c.on_press(45, 15, 2_000), Some(Part::Thumb));
    assert!(c.list().is_dragging());
    assert!(c.on_drag(45, 35, 2_001));
    assert_eq!(c.list().dimensions().to_coordinate(c.list().position()), 300);
    // Below the drag threshold.
    assert!(!c.on_drag(45, 38, 2_002));
    c.on_release();
    assert!(!c.list().is_dragging());
    assert_eq!(c.pressed(), None);

    assert_eq!(c.on_press(10, 10, 3_000), Some(Part::Content));
    assert!(!c.on_drag(10, 60, 3_001));
    assert_eq!(c.list().dimensions().to_coordinate(c.list().position()), 300);
}

#[test]
fn controller_ignores_thumb_drag_right_after_page_click() {
    let mut c = controller();
    c.layout(OUTER, 0, uniform(50));
    assert_eq!(c.on_press(45, 5, 100), Some(Part::Thumb));
    c.on_release();

    // Trail gap click, then the same gesture sliding over the thumb.
    assert_eq!(c.on_press(45, 90, 1_000), Some(Part::TrailGap));
    c.on_release();
    c.layout(OUTER, 1_016, uniform(50));
    assert_eq!(c.on_press(45, 15, 1_100), Some(Part::Thumb));
    assert!(!c.on_drag(45, 45, 1_200));
    assert_eq!(c.list().dimensions().to_coordinate(c.list().position()), 100);
}

#[test]
fn wheel_input_is_applied_on_next_layout() {
    let mut c = controller();
    c.layout(OUTER, 0, uniform(50));
    c.on_wheel(75);
    assert_eq!(c.list().position(), Position::new(0, 0).with_before_end());
    let f = c.layout(OUTER, 16, uniform(50));
    let drawn: Vec<usize> = f.list.arrangement.indices().collect();
    assert_eq!(drawn, [1, 2, 3]);
}

#[test]
fn slice_lays_out_heterogeneous_elements() {
    let taller = Cell::new(0usize);
    let mut slice = Slice::new()
        .with(|_| (ElementSize::new(40, 10), "title"))
        .with(|c: Constraints| {
            taller.set(taller.get() + 1);
            (ElementSize::new(90, c.max.cross), "body")
        })
        .with(|_| (ElementSize::new(20, 10), "footer"));
    assert_eq!(slice.len(), 3);

    let mut list = ListController::new(ListOptions::default().with_scrollbar(false));
    let out = slice.layout(&mut list, Viewport::new(120, 60), 0);
    assert_eq!(list.length(), 3);
    let drawn: Vec<&str> = out.arrangement.elements.iter().map(|e| e.content).collect();
    assert_eq!(drawn, ["title", "body"]);
    assert_eq!(out.arrangement.elements[1].size.cross, 60);
    assert_eq!(taller.get(), 1);
}

#[test]
fn slice_collects_boxed_elements() {
    let mut slice: Slice<'_, u8> = (0..4u8)
        .map(|i| {
            Box::new(move |_: Constraints| (ElementSize::new(10 + i as u32, 5), i))
                as SliceElement<'_, u8>
        })
        .collect();
    assert!(!slice.is_empty());
    let (size, content) = slice.render(2, Constraints::loose(5));
    assert_eq!(size.main, 12);
    assert_eq!(content, 2);
}

trait PositionExt {
    fn with_before_end(self) -> Self;
}

impl PositionExt for Position {
    fn with_before_end(mut self) -> Self {
        self.before_end = true;
        self
    }
}
