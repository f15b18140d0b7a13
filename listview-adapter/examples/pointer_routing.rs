use listview::{Constraints, ElementSize, ListOptions, Viewport};
use listview_adapter::{Chrome, Controller, ScrollbarSide};

fn main() {
    // Example: routing pointer input through the scrollbar chrome without holding any UI objects.
    //
    // An adapter would:
    // - call layout() each frame and draw `frame.list` inside `frame.chrome.content`
    // - draw the thumb/gaps from `frame.chrome`
    // - forward presses, moves and releases in list-local coordinates
    let options = ListOptions::default().with_thumb_thickness(10);
    let chrome = Chrome::default().with_side(ScrollbarSide::Start).with_gutter(4);
    let mut c = Controller::new(options, chrome);
    c.list_mut().set_length(500);

    let outer = Viewport::new(200, 120);
    let render = |index: usize, k: Constraints| (ElementSize::new(24, k.max.cross), index);

    let frame = c.layout(outer, 0, render);
    println!("content={:?}", frame.chrome.content);
    println!("thumb={:?}", frame.chrome.thumb);

    // Click below the thumb: page forward.
    let part = c.on_press(5, 190, 100);
    c.on_release();
    let frame = c.layout(outer, 116, render);
    println!("press={part:?} position={:?}", frame.list.position);

    // Grab the thumb and drag it down, well after the page click.
    let thumb = frame.chrome.thumb;
    let (x, y) = (thumb.x as i64 + 1, thumb.y as i64 + 1);
    c.on_press(x, y, 1_000);
    for step in 1..=5i64 {
        c.on_drag(x, y + step * 10, 1_000 + step as u64 * 16);
    }
    c.on_release();
    let frame = c.layout(outer, 1_200, render);
    println!(
        "after drag: position={:?} drawn={:?}",
        frame.list.position,
        frame.list.arrangement.indices().collect::<Vec<_>>()
    );
}
