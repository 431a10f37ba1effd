use crate::*;

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use dragline::{AnimationSpec, Animator, DragOptions, LayoutHost, ScrollViewport, SwapListener};

const A: u32 = 1;
const B: u32 = 2;
const C: u32 = 3;
const D: u32 = 4;

fn handle(child: u32) -> u32 {
    child + 100
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Swap(u32, usize, u32, usize),
    Settled,
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

impl SwapListener<u32> for Recorder {
    fn on_swap(&mut self, first: u32, first_position: usize, second: u32, second_position: usize) {
        self.0
            .borrow_mut()
            .push(Event::Swap(first, first_position, second, second_position));
    }

    fn on_settled(&mut self) {
        self.0.borrow_mut().push(Event::Settled);
    }
}

fn four_item_controller() -> (Controller<u32>, Recorder) {
    let mut c = Controller::new(StripLayout::uniform(100), DragOptions::default());
    for child in [A, B, C, D] {
        c.container_mut().mark_draggable(child, handle(child));
    }
    let recorder = Recorder::default();
    c.container_mut().set_swap_listener(recorder.clone());
    (c, recorder)
}

#[test]
fn tween_samples_and_finishes() {
    let t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 50.0);
    assert!(!t.is_done(99));
    assert!(t.is_done(100));
    assert_eq!(t.sample(250), 100.0);

    let s = Tween::new(0.0, 10.0, 0, 100, Easing::SmoothStep);
    assert_eq!(s.sample(50), 5.0);
    assert_eq!(Easing::Decelerate.sample(0.5), 0.75);
    assert_eq!(Easing::Decelerate.sample(1.0), 1.0);
}

#[test]
fn tween_animator_drops_cancelled_and_finished_tweens() {
    let mut a = TweenAnimator::new(Easing::SmoothStep);
    let kept = a.start(AnimationSpec {
        from: 0.0,
        to: 10.0,
        duration_ms: 100,
    });
    let dropped = a.start(AnimationSpec {
        from: 0.0,
        to: 10.0,
        duration_ms: 100,
    });
    assert_ne!(kept, dropped);
    a.cancel(dropped);
    assert!(a.is_stopped(dropped));
    assert_eq!(a.running_count(), 1);

    let frames = a.tick(50);
    assert!(!a.is_stopped(dropped));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].id, kept);
    assert_eq!(frames[0].value, 5.0);
    assert!(!frames[0].done);

    let frames = a.tick(100);
    assert_eq!(frames.len(), 1);
    assert!(frames[0].done);
    assert_eq!(frames[0].value, 10.0);
    assert!(!a.is_running(kept));
}

#[test]
fn strip_layout_lays_children_end_to_end() {
    let mut l = StripLayout::new(|c: &u32| *c as i32 * 10).with_gap(5);
    l.insert_child(1, 0);
    l.insert_child(3, 1);
    l.insert_child(2, 1);
    assert_eq!(l.children(), &[1, 2, 3]);
    assert_eq!(l.child_start(1), 0);
    assert_eq!(l.child_start(2), 15);
    assert_eq!(l.child_start(3), 40);
    assert_eq!(l.content_extent(), 70);

    l.set_child_translation(3, -12.5);
    assert_eq!(l.drawn_start(3), 27.5);
    assert!(l.take_redraw());
    assert!(!l.take_redraw());

    assert_eq!(l.remove_child_at(0), Some(1));
    assert_eq!(l.remove_child_at(7), None);
    assert_eq!(l.child_start(3), 25);
}

#[test]
fn scroll_model_clamps_offset() {
    let mut v = ScrollModel::new(100, 300);
    v.smooth_scroll_by(-5);
    assert_eq!(v.scroll_offset(), 0);
    v.smooth_scroll_by(500);
    assert_eq!(v.scroll_offset(), 200);
    v.set_content_extent(150);
    assert_eq!(v.scroll_offset(), 50);

    assert!(!v.take_callback_request());
    v.request_callback();
    assert!(v.take_callback_request());
    assert!(!v.take_callback_request());
}

#[test]
fn controller_drag_reorders_and_settles_over_ticks() {
    let (mut c, recorder) = four_item_controller();
    assert!(c.press(handle(A), 50.0));
    assert!(c.layout().intercept_disallowed());
    assert!(!c.layout().display(A).visible);

    c.move_to(110.0);
    assert_eq!(c.children(), &[B, A, C, D]);
    assert_eq!(c.layout().display(B).translation, 100.0);

    c.move_to(210.0);
    assert_eq!(c.children(), &[B, C, A, D]);
    assert_eq!(c.layout().display(C).translation, 100.0);
    assert_eq!(c.container().swap_animations().len(), 2);

    c.release(210.0);
    assert!(c.container().is_settling());
    assert!(!c.layout().intercept_disallowed());
    let overlay = c.container().overlay().expect("overlay while settling");
    assert_eq!(*overlay.snapshot, A);
    assert_eq!(overlay.translation, 160);

    assert!(c.tick(150));
    assert_eq!(c.container().session_state().total_offset, 180);
    assert_eq!(c.layout().display(B).translation, 50.0);

    assert!(c.tick(300));
    assert!(!c.container().has_session());
    assert!(!c.is_animating());
    assert!(c.container().swap_animations().is_empty());
    assert_eq!(c.layout().display(B).translation, 0.0);
    assert_eq!(c.layout().display(C).translation, 0.0);
    assert!(c.layout().display(A).visible);
    assert_eq!(c.children(), &[B, C, A, D]);
    assert_eq!(
        recorder.events(),
        vec![
            Event::Swap(A, 0, B, 1),
            Event::Swap(A, 1, C, 2),
            Event::Settled
        ]
    );

    assert!(!c.tick(316));
}

#[test]
fn interactive_handle_needs_slop_before_dragging() {
    let (mut c, recorder) = four_item_controller();

    assert!(!c.press_interactive(handle(A), 50.0));
    assert!(c.container().has_session());
    c.release(50.0);
    assert!(!c.container().has_session());

    assert!(!c.press_interactive(handle(A), 50.0));
    assert!(!c.move_to(55.0));
    assert!(c.move_to(70.0));
    assert_eq!(c.container().session_state().total_offset, 0);
    c.move_to(80.0);
    assert_eq!(c.container().session_state().total_offset, 30);
    assert_eq!(c.children(), &[A, B, C, D]);

    c.release(80.0);
    while c.is_animating() {
        let now = c.container().animator().now_ms() + 16;
        c.tick(now);
    }
    assert!(!c.container().has_session());
    assert_eq!(recorder.events(), vec![Event::Settled]);
}

#[test]
fn pressing_elsewhere_during_settle_finishes_it() {
    let (mut c, recorder) = four_item_controller();
    c.press(handle(A), 50.0);
    c.move_to(110.0);
    c.release(110.0);
    assert!(c.container().is_settling());

    c.press_at(20.0);
    assert!(c.container().is_settling());
    c.release(20.0);
    assert!(!c.container().has_session());
    assert!(c.layout().display(A).visible);
    assert_eq!(recorder.events().last(), Some(&Event::Settled));

    // B's displacement keeps animating on its own.
    assert!(c.is_animating());
    c.tick(1_000);
    assert!(!c.is_animating());
    assert_eq!(c.layout().display(B).translation, 0.0);
}

#[test]
fn dragging_near_the_edge_scrolls_until_the_viewport_stops() {
    let mut c = Controller::new(StripLayout::uniform(100), DragOptions::default());
    c.container_mut().mark_draggable(A, handle(A));
    for child in [B, C, D] {
        c.container_mut().add_child(child);
    }
    let content = c.layout().content_extent();
    let mut c = c.with_viewport(ScrollModel::new(250, content));

    c.press(handle(A), 10.0);
    c.move_to(250.0);
    let first = c.container().viewport().map(|v| v.scroll_offset()).unwrap_or(0);
    assert!(first > 0);
    assert!(c.container().has_scheduled_scroll());
    assert!(
        c.container_mut()
            .viewport_mut()
            .is_some_and(|v| v.take_callback_request())
    );

    c.tick(16);
    let second = c.container().viewport().map(|v| v.scroll_offset()).unwrap_or(0);
    assert!(second > first);
    assert_eq!(c.container().session_state().total_offset, 240 + first);

    for step in 2..100u64 {
        c.tick(step * 16);
    }
    assert_eq!(c.container().viewport().map(|v| v.scroll_offset()), Some(150));
    assert!(!c.container().has_scheduled_scroll());
    assert_eq!(c.children(), &[A, B, C, D]);

    c.release(250.0);
    c.tick(10_000);
    assert!(!c.container().has_session());
}
