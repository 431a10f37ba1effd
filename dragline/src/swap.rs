use crate::container::PendingSwap;
use crate::{Animator, DragContainer, LayoutHost, ScrollViewport};

/// Which neighbor the dragged item crossed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Crossing {
    After,
    Before,
}

impl<L: LayoutHost, A: Animator, V: ScrollViewport> DragContainer<L, A, V> {
    /// Updates the dragged item with its total offset from the starting position, then
    /// evaluates swaps and auto-scroll against that offset.
    pub(crate) fn on_drag(&mut self, offset: i32) {
        let Some(item) = self.session.item_mut() else {
            return;
        };
        item.total_offset = offset;
        let natural = self.layout.child_start(item.child);
        item.update_target(natural);
        let live_start = item.live_start();
        dtrace!(offset, live_start, "on_drag");

        self.evaluate_swap(live_start);
        self.handle_container_scroll(live_start);
        self.layout.request_redraw();
    }

    fn neighbor_at(&self, position: Option<usize>) -> Option<(usize, L::Child)> {
        let position = position?;
        match self.layout.child_at(position) {
            Some(child) => Some((position, child)),
            None => {
                derror!(position, "draggable slot has no child");
                None
            }
        }
    }

    fn midpoint(&self, child: L::Child) -> i32 {
        self.layout
            .child_start(child)
            .saturating_add(self.layout.child_extent(child) / 2)
    }

    /// Swaps the dragged item with a draggable neighbor once it passes that neighbor's midpoint.
    fn evaluate_swap(&mut self, live_start: i32) {
        let Some(item) = self.session.item() else {
            return;
        };
        let dragged = item.child;
        let position = item.position;
        let extent = item.extent;

        let next = self.neighbor_at(self.registry.next_after(position));
        let prev = self.neighbor_at(self.registry.previous_before(position));

        let is_after = next
            .is_some_and(|(_, child)| live_start.saturating_add(extent) > self.midpoint(child));
        let is_before = prev.is_some_and(|(_, child)| live_start < self.midpoint(child));

        let crossing = if is_after {
            Crossing::After
        } else if is_before {
            Crossing::Before
        } else {
            return;
        };
        let target = match crossing {
            Crossing::After => next,
            Crossing::Before => prev,
        };
        let Some((switch_position, switch_child)) = target else {
            derror!(?crossing, "swapping with no neighbor");
            return;
        };

        let switch_start = self.layout.child_start(switch_child);
        ddebug!(from = position, to = switch_position, ?crossing, "swap");

        if let Some(listener) = self.swap_listener.as_mut() {
            listener.on_swap(dragged, position, switch_child, switch_position);
        }

        if !self.exchange(position, switch_position) {
            return;
        }
        if let Some(item) = self.session.item_mut() {
            item.position = switch_position;
        }

        self.pending_swaps.push(PendingSwap {
            child: switch_child,
            old_start: switch_start,
        });
        self.target_stale = true;
    }

    /// Exchanges the children at `a` and `b` by removing both, then inserting both.
    fn exchange(&mut self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if lo == hi || hi >= self.layout.child_count() {
            derror!(lo, hi, "exchange: positions out of range");
            return false;
        }
        let Some(hi_child) = self.layout.remove_child_at(hi) else {
            derror!(hi, "exchange: failed to remove child");
            return false;
        };
        let Some(lo_child) = self.layout.remove_child_at(lo) else {
            derror!(lo, "exchange: failed to remove child");
            self.layout.insert_child(hi_child, hi);
            return false;
        };
        self.layout.insert_child(hi_child, lo);
        self.layout.insert_child(lo_child, hi);
        true
    }
}
