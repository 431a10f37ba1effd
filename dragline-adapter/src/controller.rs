use dragline::{
    DragContainer, DragOptions, NoViewport, NodeKey, PointerAction, PointerEvent, PointerId,
    PointerSample, ScrollViewport,
};

use crate::{StripLayout, TweenAnimator};

const POINTER: PointerId = 0;

/// A framework-neutral controller that wraps a `dragline::DragContainer` over a
/// [`StripLayout`] and a [`TweenAnimator`], and drives it frame by frame.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `press` / `press_interactive` / `move_to` / `release` for the single tracked pointer
/// - `tick(now_ms)` each frame/timer tick (animations, auto-scroll follow-ups, layout hook)
///
/// Pointer events are dispatched the way a toolkit with parent interception would: the
/// container intercepts while the handle owns the stream, and handles events once it is the
/// target.
#[derive(Debug)]
pub struct Controller<C: NodeKey, V = NoViewport> {
    c: DragContainer<StripLayout<C>, TweenAnimator, V>,
    container_is_target: bool,
}

impl<C: NodeKey> Controller<C, NoViewport> {
    pub fn new(layout: StripLayout<C>, options: DragOptions) -> Self {
        Self::with_animator(layout, TweenAnimator::default(), options)
    }

    pub fn with_animator(
        layout: StripLayout<C>,
        animator: TweenAnimator,
        options: DragOptions,
    ) -> Self {
        Self {
            c: DragContainer::new(layout, animator, options),
            container_is_target: false,
        }
    }
}

impl<C: NodeKey, V: ScrollViewport> Controller<C, V> {
    /// Places the container inside a scrollable viewport.
    pub fn with_viewport<V2: ScrollViewport>(self, viewport: V2) -> Controller<C, V2> {
        Controller {
            c: self.c.with_scrollable_ancestor(viewport),
            container_is_target: self.container_is_target,
        }
    }

    pub fn container(&self) -> &DragContainer<StripLayout<C>, TweenAnimator, V> {
        &self.c
    }

    pub fn container_mut(&mut self) -> &mut DragContainer<StripLayout<C>, TweenAnimator, V> {
        &mut self.c
    }

    pub fn into_container(self) -> DragContainer<StripLayout<C>, TweenAnimator, V> {
        self.c
    }

    pub fn layout(&self) -> &StripLayout<C> {
        self.c.layout()
    }

    /// Children in their current order.
    pub fn children(&self) -> &[C] {
        self.c.layout().children()
    }

    /// Presses a non-interactive drag handle at `x`.
    ///
    /// The handle does not consume the press, so the container receives it and the drag starts
    /// right away. Returns whether a drag is in progress.
    pub fn press(&mut self, handle: C, x: f32) -> bool {
        self.press_handle(handle, x, false)
    }

    /// Presses an interactive drag handle (one that consumes presses, like a button) at `x`.
    ///
    /// The drag only starts once the pointer travels past the slop.
    pub fn press_interactive(&mut self, handle: C, x: f32) -> bool {
        self.press_handle(handle, x, true)
    }

    /// Presses somewhere that is not a drag handle.
    pub fn press_at(&mut self, x: f32) {
        let pointers = [PointerSample { id: POINTER, x }];
        let down = PointerEvent::new(PointerAction::Down, POINTER, &pointers);
        self.c.intercept_pointer_event(&down);
        self.container_is_target = self.c.handle_pointer_event(&down);
        self.c.on_layout();
    }

    fn press_handle(&mut self, handle: C, x: f32, handle_consumes: bool) -> bool {
        let pointers = [PointerSample { id: POINTER, x }];
        let down = PointerEvent::new(PointerAction::Down, POINTER, &pointers);
        self.container_is_target = false;
        if self.c.intercept_pointer_event(&down) {
            self.container_is_target = true;
            self.c.handle_pointer_event(&down);
        } else {
            self.c.on_handle_pointer_down(handle);
            if !handle_consumes {
                self.container_is_target = self.c.handle_pointer_event(&down);
            }
        }
        self.c.on_layout();
        self.c.is_dragging()
    }

    /// Moves the tracked pointer to `x`. Returns whether a drag is in progress.
    pub fn move_to(&mut self, x: f32) -> bool {
        let pointers = [PointerSample { id: POINTER, x }];
        let event = PointerEvent::new(PointerAction::Move, POINTER, &pointers);
        if self.container_is_target {
            self.c.handle_pointer_event(&event);
        } else if self.c.intercept_pointer_event(&event) {
            adebug!(x, "pointer stream taken over by the container");
            self.container_is_target = true;
        }
        self.c.on_layout();
        self.c.is_dragging()
    }

    /// Lifts the tracked pointer at `x`.
    pub fn release(&mut self, x: f32) {
        let pointers = [PointerSample { id: POINTER, x }];
        let event = PointerEvent::new(PointerAction::Up, POINTER, &pointers);
        if self.container_is_target {
            self.c.handle_pointer_event(&event);
        } else {
            self.c.intercept_pointer_event(&event);
        }
        self.container_is_target = false;
        self.c.on_layout();
    }

    pub fn is_animating(&self) -> bool {
        self.c.animator().running_count() > 0
    }

    /// Advances the controller.
    ///
    /// Samples running tweens and delivers them to the container, runs a pending auto-scroll
    /// follow-up, then runs the layout hook. Returns whether a redraw was requested.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let frames = self.c.animator_mut().tick(now_ms);
        for frame in frames {
            // Delivering one frame can cancel or finish another sampled in the same tick.
            if self.c.animator().is_stopped(frame.id) {
                continue;
            }
            self.c.on_animation_update(frame.id, frame.value);
            if frame.done {
                self.c.on_animation_end(frame.id);
            }
        }
        if self.c.has_scheduled_scroll() {
            self.c.run_scheduled_scroll();
        }
        self.c.on_layout();
        self.c.layout_mut().take_redraw()
    }
}
