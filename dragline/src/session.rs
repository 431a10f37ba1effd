use crate::{AnimationId, DragPhase, SessionState};

/// State of the item picked up by the current gesture.
#[derive(Clone, Debug)]
pub(crate) struct DragItem<C, S> {
    pub(crate) child: C,
    /// Visibility of the live child when the gesture began; restored when the session ends.
    pub(crate) start_visible: bool,
    pub(crate) snapshot: S,
    pub(crate) position: usize,
    /// Natural layout start of the child when the gesture began.
    pub(crate) start: i32,
    pub(crate) extent: i32,
    pub(crate) total_offset: i32,
    pub(crate) target_offset: i32,
}

impl<C, S> DragItem<C, S> {
    /// Where the drawn item currently begins on the drag axis.
    pub(crate) fn live_start(&self) -> i32 {
        self.start.saturating_add(self.total_offset)
    }

    /// Recomputes the offset between the drawn item and the child's natural start.
    pub(crate) fn update_target(&mut self, natural_start: i32) {
        self.target_offset = self
            .start
            .saturating_sub(natural_start)
            .saturating_add(self.total_offset);
    }
}

/// The single drag session of a container.
///
/// - `Armed`: a handle was pressed, but the pointer has not yet moved past the slop.
/// - `Dragging`: the item follows the pointer.
/// - `Settling`: the pointer was released and the item animates to its resting slot.
#[derive(Debug)]
pub(crate) enum DragSession<C, S> {
    Idle,
    Armed(DragItem<C, S>),
    Dragging(DragItem<C, S>),
    Settling {
        item: DragItem<C, S>,
        animation: AnimationId,
    },
}

impl<C, S> Default for DragSession<C, S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<C, S> DragSession<C, S> {
    pub(crate) fn is_valid(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub(crate) fn is_settling(&self) -> bool {
        matches!(self, Self::Settling { .. })
    }

    pub(crate) fn item(&self) -> Option<&DragItem<C, S>> {
        match self {
            Self::Idle => None,
            Self::Armed(item) | Self::Dragging(item) | Self::Settling { item, .. } => Some(item),
        }
    }

    pub(crate) fn item_mut(&mut self) -> Option<&mut DragItem<C, S>> {
        match self {
            Self::Idle => None,
            Self::Armed(item) | Self::Dragging(item) | Self::Settling { item, .. } => Some(item),
        }
    }

    pub(crate) fn settle_animation(&self) -> Option<AnimationId> {
        match self {
            Self::Settling { animation, .. } => Some(*animation),
            _ => None,
        }
    }

    pub(crate) fn phase(&self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Armed(_) => DragPhase::Armed,
            Self::Dragging(_) => DragPhase::Dragging,
            Self::Settling { .. } => DragPhase::Settling,
        }
    }

    pub(crate) fn state(&self) -> SessionState {
        match self.item() {
            None => SessionState::default(),
            Some(item) => SessionState {
                phase: self.phase(),
                position: Some(item.position),
                total_offset: item.total_offset,
                target_offset: item.target_offset,
            },
        }
    }

    /// Moves `Armed` to `Dragging`. Returns `false` from any other state.
    pub(crate) fn begin_drag(&mut self) -> bool {
        match core::mem::take(self) {
            Self::Armed(item) => {
                *self = Self::Dragging(item);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Moves `Dragging` (or an existing `Settling`) to `Settling` with a new animation.
    ///
    /// Returns the animation being replaced, if any.
    pub(crate) fn begin_settle(&mut self, animation: AnimationId) -> Option<AnimationId> {
        match core::mem::take(self) {
            Self::Dragging(item) => {
                *self = Self::Settling { item, animation };
                None
            }
            Self::Settling {
                item,
                animation: old,
            } => {
                *self = Self::Settling { item, animation };
                Some(old)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub(crate) fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}
