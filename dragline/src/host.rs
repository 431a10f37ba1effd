use crate::{AnimationId, AnimationSpec, NodeKey};

/// The rendering/layout system that owns the container's children.
///
/// Positions are indexes into the container's ordered child sequence. Coordinates are on the
/// drag axis, relative to the container's own start.
pub trait LayoutHost {
    type Child: NodeKey;
    /// A still image of a child, drawn as the floating overlay while its live slot is hidden.
    type Snapshot;

    fn child_count(&self) -> usize;
    fn child_at(&self, index: usize) -> Option<Self::Child>;
    fn index_of(&self, child: Self::Child) -> Option<usize>;

    /// Natural layout start of a child (no animation translation applied).
    fn child_start(&self, child: Self::Child) -> i32;
    fn child_extent(&self, child: Self::Child) -> i32;

    fn insert_child(&mut self, child: Self::Child, index: usize);
    fn remove_child_at(&mut self, index: usize) -> Option<Self::Child>;

    fn is_child_visible(&self, child: Self::Child) -> bool;
    fn set_child_visible(&mut self, child: Self::Child, visible: bool);
    /// Sets a child's drawn offset from its natural layout start.
    fn set_child_translation(&mut self, child: Self::Child, translation: f32);

    fn capture_snapshot(&mut self, child: Self::Child) -> Self::Snapshot;

    /// Start of the container inside its scrollable ancestor's content.
    fn container_start(&self) -> i32;

    fn request_redraw(&mut self);
    /// Asks ancestors to stop intercepting the current pointer stream.
    fn request_disallow_intercept(&mut self, disallow: bool);
}

/// The host's single-value tweening engine.
///
/// Started animations report progress through [`crate::DragContainer::on_animation_update`]
/// and [`crate::DragContainer::on_animation_end`]. After `cancel` or `finish` the host must not
/// deliver any further callbacks for that id; the container applies completion itself.
pub trait Animator {
    fn start(&mut self, spec: AnimationSpec) -> AnimationId;
    /// Stops an animation where it is.
    fn cancel(&mut self, id: AnimationId);
    /// Jumps an animation to its end value.
    fn finish(&mut self, id: AnimationId);
}

/// An enclosing scrollable viewport, scrolled while an item is dragged near its edges.
pub trait ScrollViewport {
    fn scroll_offset(&self) -> i32;
    /// Visible extent of the viewport on the drag axis.
    fn extent(&self) -> i32;
    fn smooth_scroll_by(&mut self, delta: i32);
    /// Asks the host to call [`crate::DragContainer::run_scheduled_scroll`] on its next turn.
    fn request_callback(&mut self);
}

/// Placeholder viewport type for containers that never auto-scroll.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoViewport;

impl ScrollViewport for NoViewport {
    fn scroll_offset(&self) -> i32 {
        0
    }

    fn extent(&self) -> i32 {
        0
    }

    fn smooth_scroll_by(&mut self, _delta: i32) {}

    fn request_callback(&mut self) {}
}

/// Observer for reorders driven by a drag.
pub trait SwapListener<C> {
    /// Invoked right before two children are swapped due to a drag.
    ///
    /// After the swap, `first` will be in `second_position`, and vice versa. No guarantee is
    /// made as to which of the two positions is smaller.
    fn on_swap(&mut self, first: C, first_position: usize, second: C, second_position: usize);

    /// Invoked once a drag's settle animation completes, even if the session already ended.
    fn on_settled(&mut self) {}
}
