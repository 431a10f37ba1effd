//! Pointer handling: deciding when a press on a drag handle becomes a drag.
//!
//! Hosts are expected to dispatch each pointer event in two phases, the way toolkits with
//! parent interception do:
//!
//! 1. [`DragContainer::intercept_pointer_event`] sees every event first, while a descendant
//!    is still the event target. Returning `true` means the container takes the stream over.
//! 2. A press on a registered drag handle is reported with
//!    [`DragContainer::on_handle_pointer_down`] before the handle's own processing.
//! 3. Once the container is the target (it took the stream over, or no descendant consumed the
//!    press), events go to [`DragContainer::handle_pointer_event`].
//!
//! There are three typical cases:
//! - A press outside any draggable child: no session is armed, nothing happens.
//! - A press on a non-interactive handle: the handle arms a session, does not consume the
//!   press, so the container receives `Down` itself and starts dragging right away.
//! - A press on an interactive handle (e.g. a button): the handle arms a session and consumes
//!   the press. The container only starts dragging once a `Move` travels further than the
//!   slop, at which point interception steals the stream from the handle.
//!
//! Lifting the active pointer before a drag starts ends the session without any change.

use crate::{
    Animator, DragContainer, DragPhase, LayoutHost, PointerAction, PointerEvent, PointerId,
    ScrollViewport,
};

/// The single pointer followed by a container, and where it went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PointerTracker {
    pub(crate) active: Option<PointerId>,
    pub(crate) down_x: i32,
}

impl PointerTracker {
    fn track(&mut self, event: &PointerEvent<'_>) {
        let Some(x) = event.x_of(event.pointer_id) else {
            return;
        };
        self.active = Some(event.pointer_id);
        self.down_x = x as i32;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `event` lifts the tracked pointer.
    fn is_lifted_by(&self, event: &PointerEvent<'_>) -> bool {
        match event.action {
            PointerAction::Up | PointerAction::Cancel => true,
            PointerAction::PointerUp => self.active == Some(event.pointer_id),
            _ => false,
        }
    }

    fn current_x(&self, event: &PointerEvent<'_>) -> Option<f32> {
        self.active.and_then(|id| event.x_of(id))
    }
}

impl<L: LayoutHost, A: Animator, V: ScrollViewport> DragContainer<L, A, V> {
    /// A registered drag handle received a press.
    ///
    /// Arms a drag session for the handle's child. Always returns `false`: the press is left
    /// for the handle (and, if it ignores it, the container) to process.
    pub fn on_handle_pointer_down(&mut self, handle: L::Child) -> bool {
        let Some(child) = self.handles.get(&handle).copied() else {
            dtrace!(?handle, "on_handle_pointer_down: unknown handle");
            return false;
        };
        self.start_detecting_drag(child);
        false
    }

    /// Interception phase. Returns `true` when the container takes over the pointer stream.
    pub fn intercept_pointer_event(&mut self, event: &PointerEvent<'_>) -> bool {
        match event.action {
            PointerAction::Down => {
                if self.session.is_valid() {
                    // An earlier item is (likely) still settling.
                    return false;
                }
                self.pointer.track(event);
                false
            }
            PointerAction::Move => {
                if !matches!(self.session.phase(), DragPhase::Armed) {
                    return false;
                }
                let Some(x) = self.pointer.current_x(event) else {
                    return false;
                };
                let dx = x - self.pointer.down_x as f32;
                let slop = self.options.slop as f32;
                if dx > slop || -dx > slop {
                    self.start_drag();
                    return true;
                }
                false
            }
            PointerAction::PointerDown => false,
            PointerAction::Up | PointerAction::Cancel | PointerAction::PointerUp => {
                if !self.pointer.is_lifted_by(event) {
                    return false;
                }
                self.pointer.reset();
                if self.session.is_valid() {
                    self.end_session();
                }
                false
            }
        }
    }

    /// Handling phase, once the container is the target of the pointer stream.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent<'_>) -> bool {
        match event.action {
            PointerAction::Down => match self.session.phase() {
                DragPhase::Armed => {
                    self.start_drag();
                    true
                }
                DragPhase::Dragging => true,
                _ => false,
            },
            PointerAction::Move => {
                if !self.session.is_dragging() {
                    return false;
                }
                let Some(x) = self.pointer.current_x(event) else {
                    return false;
                };
                let offset = (x as i32).saturating_sub(self.pointer.down_x);
                self.on_drag(offset);
                true
            }
            PointerAction::PointerDown => false,
            PointerAction::Up | PointerAction::Cancel | PointerAction::PointerUp => {
                if !self.pointer.is_lifted_by(event) {
                    return false;
                }
                self.pointer.reset();
                self.layout.request_disallow_intercept(false);
                if self.session.is_dragging() {
                    self.stop_drag();
                }
                true
            }
        }
    }
}
