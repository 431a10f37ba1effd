use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::AnimationId;

/// Per-slot bookkeeping for a draggable child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DraggableChild {
    /// An on-going "settle into new position" animation for the child in this slot.
    pub(crate) swap_animation: Option<AnimationId>,
}

/// Sparse mapping from child position to [`DraggableChild`].
///
/// Presence of an entry means the child at that position can be dragged and is considered for
/// swaps with the dragged item. Keys are renumbered on every insert/remove so they keep
/// tracking their children.
#[derive(Clone, Debug, Default)]
pub(crate) struct DraggableRegistry {
    slots: BTreeMap<usize, DraggableChild>,
}

impl DraggableRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn contains(&self, position: usize) -> bool {
        self.slots.contains_key(&position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut DraggableChild> {
        self.slots.get_mut(&position)
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.keys().copied()
    }

    /// Marks `position` draggable, returning the animation of any entry it replaces.
    pub(crate) fn mark(&mut self, position: usize) -> Option<AnimationId> {
        self.slots
            .insert(position, DraggableChild::default())
            .and_then(|old| old.swap_animation)
    }

    /// Shifts every key at or after `position` up by one, making room for a new child.
    ///
    /// Returns the swap animations taken from the shifted entries so the caller can finish them.
    pub(crate) fn shift_for_insert(&mut self, position: usize) -> Vec<AnimationId> {
        let moved = self.slots.split_off(&position);
        let mut animations = Vec::new();
        for (k, mut v) in moved {
            animations.extend(v.swap_animation.take());
            self.slots.insert(k.saturating_add(1), v);
        }
        animations
    }

    /// Drops the entry at `position` (if any) and shifts every later key down by one.
    ///
    /// Returns the removed entry's animation and those of the shifted entries, so the caller
    /// can finish them.
    pub(crate) fn remove_and_shift(&mut self, position: usize) -> Vec<AnimationId> {
        let mut moved = self.slots.split_off(&position);
        let mut animations: Vec<AnimationId> = moved
            .remove(&position)
            .and_then(|slot| slot.swap_animation)
            .into_iter()
            .collect();
        for (k, mut v) in moved {
            animations.extend(v.swap_animation.take());
            self.slots.insert(k.saturating_sub(1), v);
        }
        animations
    }

    pub(crate) fn next_after(&self, position: usize) -> Option<usize> {
        self.slots
            .range(position.saturating_add(1)..)
            .next()
            .map(|(k, _)| *k)
    }

    pub(crate) fn previous_before(&self, position: usize) -> Option<usize> {
        self.slots.range(..position).next_back().map(|(k, _)| *k)
    }

    pub(crate) fn take_animation(&mut self, position: usize) -> Option<AnimationId> {
        self.slots
            .get_mut(&position)
            .and_then(|slot| slot.swap_animation.take())
    }

    /// Clears whichever slot currently records `id`. Returns `true` if one did.
    pub(crate) fn clear_animation(&mut self, id: AnimationId) -> bool {
        for slot in self.slots.values_mut() {
            if slot.swap_animation == Some(id) {
                slot.swap_animation = None;
                return true;
            }
        }
        false
    }

    pub(crate) fn animations(&self) -> Vec<(usize, AnimationId)> {
        self.slots
            .iter()
            .filter_map(|(k, v)| v.swap_animation.map(|id| (*k, id)))
            .collect()
    }
}
