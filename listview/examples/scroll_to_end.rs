// Example: a log view that stays pinned to its newest line until the user scrolls back.
use listview::{ElementSize, ListController, ListOptions, ShortContentAlign, Viewport};

fn main() {
    let options = ListOptions::default()
        .with_scroll_to_end(true)
        .with_short_content_align(ShortContentAlign::End);
    let mut list = ListController::new(options);
    let view = Viewport::new(100, 60);
    let line = |index: usize, c: listview::Constraints| (ElementSize::new(20, c.max.cross), index);

    let mut now_ms = 0u64;
    for length in [2usize, 4, 8, 16] {
        list.set_length(length);
        now_ms += 16;
        let frame = list.layout(view, now_ms, line);
        println!(
            "length={length} drawn={:?} first_offset={:?}",
            frame.arrangement.indices().collect::<Vec<_>>(),
            frame.arrangement.elements.first().map(|e| e.main_offset),
        );
    }

    // Scrolling toward the start detaches the list from the end.
    list.scroll_by(-50);
    now_ms += 16;
    let frame = list.layout(view, now_ms, line);
    println!("detached: position={:?}", frame.position);

    list.set_length(32);
    now_ms += 16;
    let frame = list.layout(view, now_ms, line);
    println!(
        "new lines arrived, view kept: drawn={:?}",
        frame.arrangement.indices().collect::<Vec<_>>()
    );
}
