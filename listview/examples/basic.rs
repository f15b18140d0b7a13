// Example: a long list of variable-height rows, scrolled by wheel input and page clicks.
use listview::{ElementSize, ListController, ListOptions, PageDirection, Viewport};

fn main() {
    let mut list = ListController::new(ListOptions::default());
    list.set_length(10_000);
    let view = Viewport::new(240, 80);
    let row = |index: usize, c: listview::Constraints| {
        let height = 16 + (index % 5) as u32 * 4;
        (ElementSize::new(height, c.max.cross), format!("row {index}"))
    };

    let frame = list.layout(view, 0, row);
    println!("drawn={:?}", frame.arrangement.indices().collect::<Vec<_>>());
    println!("scrollbar={:?} metrics={:?}", frame.scrollbar, frame.metrics);

    list.scroll_by(1_000);
    let frame = list.layout(view, 16, row);
    println!("after wheel: position={:?}", frame.position);
    for e in &frame.arrangement.elements {
        println!("  {:>5} at {:>4}: {}", e.index, e.main_offset, e.content);
    }

    list.page(PageDirection::Forward, 32);
    let frame = list.layout(view, 48, row);
    println!("after page click: position={:?}", frame.position);

    list.jump_to_end();
    let frame = list.layout(view, 64, row);
    println!(
        "at end: last={:?} at_end={}",
        frame.arrangement.indices().last(),
        frame.at_end
    );
}
