use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::gesture::PointerTracker;
use crate::geometry::settle_duration;
use crate::key::NodeMap;
use crate::registry::DraggableRegistry;
use crate::scroll::ScheduledScroll;
use crate::session::{DragItem, DragSession};
use crate::{
    AnimationId, AnimationSpec, Animator, DragError, DragOptions, DragOverlay, LayoutHost,
    NoViewport, Orientation, ScrollViewport, SessionState, SwapListener,
};

/// A neighbor displaced by a swap, waiting for the next layout pass to learn its new start.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingSwap<C> {
    pub(crate) child: C,
    pub(crate) old_start: i32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct RunningSwap<C> {
    pub(crate) id: AnimationId,
    pub(crate) child: C,
}

/// A headless single-axis container whose children can be dragged and swapped around.
///
/// This type is UI-agnostic:
/// - Children, measurement and drawing live in the host's [`LayoutHost`].
/// - Time-based interpolation is delegated to an [`Animator`]; the host reports progress via
///   [`Self::on_animation_update`] / [`Self::on_animation_end`].
/// - The host calls [`Self::on_layout`] after every layout pass, before drawing.
///
/// Pointer input is fed through [`Self::on_handle_pointer_down`],
/// [`Self::intercept_pointer_event`] and [`Self::handle_pointer_event`].
///
/// Only standard children added through this type keep the draggable registry consistent; do
/// not insert or remove children behind its back.
pub struct DragContainer<L: LayoutHost, A, V = NoViewport> {
    pub(crate) layout: L,
    pub(crate) animator: A,
    pub(crate) viewport: Option<V>,
    pub(crate) options: DragOptions,
    orientation: Orientation,

    pub(crate) registry: DraggableRegistry,
    pub(crate) handles: NodeMap<L::Child, L::Child>,
    pub(crate) session: DragSession<L::Child, L::Snapshot>,
    pub(crate) pointer: PointerTracker,

    pub(crate) pending_swaps: Vec<PendingSwap<L::Child>>,
    pub(crate) running_swaps: Vec<RunningSwap<L::Child>>,
    pub(crate) target_stale: bool,
    pub(crate) scheduled_scroll: Option<ScheduledScroll>,

    pub(crate) swap_listener: Option<Box<dyn SwapListener<L::Child>>>,
}

impl<L: LayoutHost, A: Animator> DragContainer<L, A, NoViewport> {
    /// Creates a container over the host's layout and animator.
    ///
    /// Existing children of `layout` start out non-draggable.
    pub fn new(layout: L, animator: A, options: DragOptions) -> Self {
        ddebug!(
            children = layout.child_count(),
            slop = options.slop,
            margin = options.scroll_sensitive_margin,
            "DragContainer::new"
        );
        Self {
            layout,
            animator,
            viewport: None,
            options,
            orientation: Orientation::Horizontal,
            registry: DraggableRegistry::new(),
            handles: NodeMap::new(),
            session: DragSession::Idle,
            pointer: PointerTracker::default(),
            pending_swaps: Vec::new(),
            running_swaps: Vec::new(),
            target_stale: false,
            scheduled_scroll: None,
            swap_listener: None,
        }
    }
}

impl<L: LayoutHost, A: Animator, V: ScrollViewport> DragContainer<L, A, V> {
    /// Registers an enclosing scrollable viewport, changing the viewport type.
    pub fn with_scrollable_ancestor<V2: ScrollViewport>(
        self,
        viewport: V2,
    ) -> DragContainer<L, A, V2> {
        DragContainer {
            layout: self.layout,
            animator: self.animator,
            viewport: Some(viewport),
            options: self.options,
            orientation: self.orientation,
            registry: self.registry,
            handles: self.handles,
            session: self.session,
            pointer: self.pointer,
            pending_swaps: self.pending_swaps,
            running_swaps: self.running_swaps,
            target_stale: self.target_stale,
            scheduled_scroll: None,
            swap_listener: self.swap_listener,
        }
    }

    /// Registers the scrollable viewport this container lives in, so that it is scrolled
    /// while an item is dragged near its edges.
    pub fn attach_scrollable_ancestor(&mut self, viewport: V) {
        self.scheduled_scroll = None;
        self.viewport = Some(viewport);
    }

    pub fn detach_scrollable_ancestor(&mut self) -> Option<V> {
        self.scheduled_scroll = None;
        self.viewport.take()
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable access to the host layout.
    ///
    /// Do not add or remove children through this; use the container's own methods.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Only [`Orientation::Horizontal`] is supported; anything else fails and leaves the
    /// container untouched.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DragError> {
        if orientation != Orientation::Horizontal {
            return Err(DragError::UnsupportedOrientation(orientation));
        }
        self.orientation = orientation;
        Ok(())
    }

    pub fn set_scroll_sensitive_margin(&mut self, margin: i32) {
        self.options.scroll_sensitive_margin = margin;
    }

    pub fn scroll_sensitive_margin(&self) -> i32 {
        self.options.scroll_sensitive_margin
    }

    pub fn set_swap_listener(&mut self, listener: impl SwapListener<L::Child> + 'static) {
        self.swap_listener = Some(Box::new(listener));
    }

    pub fn clear_swap_listener(&mut self) {
        self.swap_listener = None;
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// `true` between arming a drag and the end of its settle animation.
    pub fn has_session(&self) -> bool {
        self.session.is_valid()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn is_settling(&self) -> bool {
        self.session.is_settling()
    }

    pub fn is_draggable(&self, position: usize) -> bool {
        self.registry.contains(position)
    }

    /// Positions of all draggable children, ascending.
    pub fn draggable_positions(&self) -> Vec<usize> {
        self.registry.positions().collect()
    }

    /// Positions of draggable slots with an on-going swap animation, with its handle.
    pub fn swap_animations(&self) -> Vec<(usize, AnimationId)> {
        self.registry.animations()
    }

    /// The floating image of the dragged item, while it is dragged or settling.
    pub fn overlay(&self) -> Option<DragOverlay<'_, L::Snapshot>> {
        let item = match &self.session {
            DragSession::Dragging(item) | DragSession::Settling { item, .. } => item,
            _ => return None,
        };
        Some(DragOverlay {
            snapshot: &item.snapshot,
            start: item.start,
            extent: item.extent,
            translation: item.total_offset,
        })
    }

    /// Appends a plain (non-draggable) child.
    pub fn add_child(&mut self, child: L::Child) {
        let count = self.layout.child_count();
        self.add_child_at(child, count);
    }

    /// Inserts a plain (non-draggable) child, shifting draggable slots at or after `index`.
    pub fn add_child_at(&mut self, child: L::Child, index: usize) {
        let index = index.min(self.layout.child_count());
        self.layout.insert_child(child, index);
        for id in self.registry.shift_for_insert(index) {
            self.finish_swap_animation(id);
        }
        if let Some(item) = self.session.item_mut() {
            if item.position >= index {
                item.position = item.position.saturating_add(1);
            }
        }
        dtrace!(index, "add_child_at");
    }

    /// Appends `child` and makes it draggable by `handle`.
    ///
    /// Ignored (and logged) if `child` is already a child; use [`Self::set_child_draggable`]
    /// for those.
    pub fn mark_draggable(&mut self, child: L::Child, handle: L::Child) {
        let count = self.layout.child_count();
        self.mark_draggable_at(child, handle, count);
    }

    /// Inserts `child` at `index` and makes it draggable by `handle`, keeping the drag-ability
    /// of existing children in step.
    pub fn mark_draggable_at(&mut self, child: L::Child, handle: L::Child, index: usize) {
        if self.layout.index_of(child).is_some() {
            dwarn!(?child, "mark_draggable: already a child");
            return;
        }
        self.add_child_at(child, index);
        self.set_child_draggable(child, handle);
    }

    /// Makes an existing child a candidate for dragging.
    ///
    /// Returns `false` (and logs) when `child` is not a child of this container.
    pub fn set_child_draggable(&mut self, child: L::Child, handle: L::Child) -> bool {
        let Some(position) = self.layout.index_of(child) else {
            derror!(?child, "not a child, cannot make draggable");
            return false;
        };
        self.handles.insert(handle, child);
        if let Some(id) = self.registry.mark(position) {
            self.finish_swap_animation(id);
        }
        ddebug!(?child, position, "set_child_draggable");
        true
    }

    /// Removes a draggable child, keeping the drag-ability of the remaining children in step.
    pub fn unmark_draggable(&mut self, child: L::Child) {
        self.remove_child(child);
    }

    /// Removes any child, keeping the draggable registry in step.
    pub fn remove_child(&mut self, child: L::Child) {
        let Some(index) = self.layout.index_of(child) else {
            dwarn!(?child, "remove_child: not a child");
            return;
        };
        if self.session.item().is_some_and(|item| item.child == child) {
            self.end_session();
        }
        for id in self.registry.remove_and_shift(index) {
            self.finish_swap_animation(id);
        }
        self.pending_swaps.retain(|p| p.child != child);
        self.handles.retain(|_, c| *c != child);
        self.layout.remove_child_at(index);
        if let Some(item) = self.session.item_mut() {
            if item.position > index {
                item.position -= 1;
            }
        }
        dtrace!(index, "remove_child");
    }

    /// Starts a possible drag on `child`, unless a session is already valid.
    pub(crate) fn start_detecting_drag(&mut self, child: L::Child) {
        if self.session.is_valid() {
            dtrace!("start_detecting_drag: session already valid");
            return;
        }
        let Some(position) = self.layout.index_of(child) else {
            dwarn!(?child, "start_detecting_drag: not a child");
            return;
        };
        if !self.registry.contains(position) {
            dwarn!(position, "start_detecting_drag: child is not draggable");
            return;
        }

        if let Some(id) = self.registry.take_animation(position) {
            self.finish_swap_animation(id);
        }

        let item = DragItem {
            child,
            start_visible: self.layout.is_child_visible(child),
            snapshot: self.layout.capture_snapshot(child),
            position,
            start: self.layout.child_start(child),
            extent: self.layout.child_extent(child),
            total_offset: 0,
            target_offset: 0,
        };
        ddebug!(position, start = item.start, extent = item.extent, "drag armed");
        self.session = DragSession::Armed(item);
    }

    pub(crate) fn start_drag(&mut self) {
        if !self.session.begin_drag() {
            return;
        }
        if let Some(item) = self.session.item() {
            ddebug!(position = item.position, "drag started");
            self.layout.set_child_visible(item.child, false);
        }
        self.layout.request_disallow_intercept(true);
    }

    /// Animates the dragged item to its resting position, replacing any running settle.
    pub(crate) fn stop_drag(&mut self) {
        let Some(item) = self.session.item() else {
            return;
        };
        let spec = AnimationSpec {
            from: item.total_offset as f32,
            to: item.total_offset.saturating_sub(item.target_offset) as f32,
            duration_ms: settle_duration(item.target_offset, self.options.nominal_distance()),
        };
        if let Some(old) = self.session.settle_animation() {
            ddebug!("updating settle animation");
            self.animator.cancel(old);
        }
        let id = self.animator.start(spec);
        ddebug!(
            from = spec.from,
            to = spec.to,
            duration_ms = spec.duration_ms,
            "settle started"
        );
        self.session.begin_settle(id);
    }

    /// Ends the session immediately, force-completing any settle animation.
    pub(crate) fn end_session(&mut self) {
        self.target_stale = false;
        self.scheduled_scroll = None;
        self.layout.request_disallow_intercept(false);
        match self.session.take() {
            DragSession::Idle => {}
            DragSession::Armed(item) | DragSession::Dragging(item) => {
                self.restore_item(&item);
            }
            DragSession::Settling { item, animation } => {
                self.restore_item(&item);
                self.animator.finish(animation);
                self.notify_settled();
            }
        }
    }

    fn restore_item(&mut self, item: &DragItem<L::Child, L::Snapshot>) {
        self.layout.set_child_visible(item.child, item.start_visible);
        self.layout.request_redraw();
        dtrace!(position = item.position, "session ended");
    }

    fn notify_settled(&mut self) {
        if let Some(listener) = self.swap_listener.as_mut() {
            listener.on_settled();
        }
    }

    /// Force-completes a neighbor's swap animation.
    pub(crate) fn finish_swap_animation(&mut self, id: AnimationId) {
        self.animator.finish(id);
        self.complete_swap_animation(id);
    }

    fn complete_swap_animation(&mut self, id: AnimationId) {
        self.registry.clear_animation(id);
        if let Some(i) = self.running_swaps.iter().position(|r| r.id == id) {
            let running = self.running_swaps.swap_remove(i);
            self.layout.set_child_translation(running.child, 0.0);
            self.layout.request_redraw();
        }
    }

    /// Delivers an animation frame from the host's animator.
    pub fn on_animation_update(&mut self, id: AnimationId, value: f32) {
        if self.session.settle_animation() == Some(id) {
            if let Some(item) = self.session.item_mut() {
                item.total_offset = value as i32;
                let natural = self.layout.child_start(item.child);
                item.update_target(natural);
            }
            self.layout.request_redraw();
            return;
        }
        if let Some(running) = self.running_swaps.iter().find(|r| r.id == id) {
            self.layout.set_child_translation(running.child, value);
            self.layout.request_redraw();
            return;
        }
        dtrace!(?id, "on_animation_update: unknown animation");
    }

    /// Delivers the natural end of an animation from the host's animator.
    pub fn on_animation_end(&mut self, id: AnimationId) {
        if self.session.settle_animation() == Some(id) {
            ddebug!("settle finished");
            self.notify_settled();
            if let DragSession::Settling { item, .. } = self.session.take() {
                self.restore_item(&item);
            }
            self.target_stale = false;
            return;
        }
        self.complete_swap_animation(id);
    }

    /// Layout-pass hook: call after the host has laid out children and before drawing.
    ///
    /// Starts animations for neighbors displaced by swaps and brings the dragged item's target
    /// back in line with its new natural start, restarting a running settle if needed.
    pub fn on_layout(&mut self) {
        for pending in core::mem::take(&mut self.pending_swaps) {
            self.animate_displaced(pending);
        }

        if !core::mem::take(&mut self.target_stale) {
            return;
        }
        if let Some(item) = self.session.item_mut() {
            let natural = self.layout.child_start(item.child);
            item.update_target(natural);
        }
        if self.session.is_settling() {
            self.stop_drag();
        }
    }

    fn animate_displaced(&mut self, pending: PendingSwap<L::Child>) {
        let Some(slot) = self.layout.index_of(pending.child) else {
            return;
        };
        // Earlier animations of this child or slot must end before the new translation is set.
        let previous = self
            .running_swaps
            .iter()
            .find(|r| r.child == pending.child)
            .map(|r| r.id);
        let in_slot = self
            .registry
            .take_animation(slot)
            .filter(|id| Some(*id) != previous);
        for id in previous.into_iter().chain(in_slot) {
            self.finish_swap_animation(id);
        }

        let new_start = self.layout.child_start(pending.child);
        let distance = new_start.saturating_sub(pending.old_start);
        let from = pending.old_start.saturating_sub(new_start) as f32;
        let id = self.animator.start(AnimationSpec {
            from,
            to: 0.0,
            duration_ms: settle_duration(distance, self.options.nominal_distance()),
        });
        self.layout.set_child_translation(pending.child, from);

        if let Some(entry) = self.registry.get_mut(slot) {
            entry.swap_animation = Some(id);
        }
        self.running_swaps.push(RunningSwap {
            id,
            child: pending.child,
        });
        dtrace!(slot, distance, "neighbor animation started");
    }
}

impl<L: LayoutHost, A, V> core::fmt::Debug for DragContainer<L, A, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragContainer")
            .field("options", &self.options)
            .field("orientation", &self.orientation)
            .field("session", &self.session.state())
            .field("draggable", &self.registry.len())
            .field("pointer", &self.pointer)
            .field("has_viewport", &self.viewport.is_some())
            .finish_non_exhaustive()
    }
}
