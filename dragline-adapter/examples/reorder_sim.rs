use dragline::{DragOptions, ScrollViewport, SwapListener};
use dragline_adapter::{Controller, Easing, ScrollModel, StripLayout, TweenAnimator};

struct PrintSwaps;

impl SwapListener<char> for PrintSwaps {
    fn on_swap(&mut self, first: char, first_position: usize, second: char, second_position: usize) {
        println!("swap: {first}@{first_position} <-> {second}@{second_position}");
    }

    fn on_settled(&mut self) {
        println!("settled");
    }
}

fn main() {
    // Example: a strip of cards inside a narrower scrolling viewport.
    //
    // An adapter would:
    // - forward pointer events (press/move/release)
    // - call tick(now_ms) in a frame loop / timer
    // - draw children at `drawn_start`, plus the overlay while one is dragged
    let mut layout = StripLayout::new(|c: &char| if *c == 'c' { 160 } else { 100 }).with_gap(8);
    layout.set_container_start(0);
    let mut c = Controller::with_animator(
        layout,
        TweenAnimator::new(Easing::Decelerate),
        DragOptions::with_density(1.0),
    );
    for card in ['a', 'b', 'c', 'd', 'e'] {
        c.container_mut()
            .mark_draggable(card, card.to_ascii_uppercase());
    }
    c.container_mut().set_swap_listener(PrintSwaps);
    let content = c.layout().content_extent();
    let mut c = c.with_viewport(ScrollModel::new(320, content));

    let mut now_ms = 0u64;
    c.press('A', 20.0);
    for step in 1..=30 {
        c.move_to(20.0 + step as f32 * 10.0);
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("order while dragging: {:?}", c.children());
    if let Some(overlay) = c.container().overlay() {
        println!(
            "overlay: {} at {} (+{})",
            overlay.snapshot, overlay.start, overlay.translation
        );
    }

    c.release(320.0);
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }

    let scroll = c.container().viewport().map(|v| v.scroll_offset());
    println!("final order: {:?} scroll={scroll:?}", c.children());
    for card in c.children().to_vec() {
        println!("  {card}: {}", c.layout().drawn_start(card));
    }
}
