#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// The kind of a pointer event, after masking out the pointer index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerAction {
    /// The first pointer went down.
    Down,
    Move,
    /// The last pointer went up.
    Up,
    Cancel,
    /// An additional pointer went down while another is already down.
    PointerDown,
    /// A pointer went up while others remain down.
    PointerUp,
}

pub type PointerId = u32;

/// One pointer's position on the drag axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f32,
}

/// A pointer event as delivered by the host's input system.
///
/// `pointer_id` identifies the pointer responsible for the action (meaningful for `Down`,
/// `PointerDown` and `PointerUp`); `pointers` holds every pointer currently down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<'a> {
    pub action: PointerAction,
    pub pointer_id: PointerId,
    pub pointers: &'a [PointerSample],
}

impl<'a> PointerEvent<'a> {
    pub fn new(action: PointerAction, pointer_id: PointerId, pointers: &'a [PointerSample]) -> Self {
        Self {
            action,
            pointer_id,
            pointers,
        }
    }

    /// Axis coordinate of the given pointer, if it is part of this event.
    pub fn x_of(&self, id: PointerId) -> Option<f32> {
        self.pointers.iter().find(|p| p.id == id).map(|p| p.x)
    }
}

/// Handle for an animation started through [`crate::Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationId(pub u64);

/// A single-value interpolation request.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Armed,
    Dragging,
    Settling,
}

/// A lightweight snapshot of the drag session.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub phase: DragPhase,
    /// Current position of the dragged child, `None` when idle.
    pub position: Option<usize>,
    /// Pointer-driven offset from the child's original start.
    pub total_offset: i32,
    /// Offset between the drawn item and the child's natural layout start.
    pub target_offset: i32,
}

/// What the host should draw on top of the container while a drag is visible.
///
/// The overlay is the still image captured at drag start, positioned at `start` and
/// translated by `translation` along the drag axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOverlay<'a, S> {
    pub snapshot: &'a S,
    pub start: i32,
    pub extent: i32,
    pub translation: i32,
}
