use alloc::sync::Arc;
use alloc::vec::Vec;

use dragline::{LayoutHost, NodeKey};

use crate::key::NodeMap;

/// Per-child display state that survives removal and re-insertion (e.g. during a swap).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildDisplay {
    pub visible: bool,
    pub translation: f32,
}

impl Default for ChildDisplay {
    fn default() -> Self {
        Self {
            visible: true,
            translation: 0.0,
        }
    }
}

/// An in-memory single-axis layout: children are laid end to end, separated by `gap`.
///
/// Child extents come from a measuring closure keyed by child identity, so they follow
/// children through reorders. Starts are computed on demand; there is no separate layout
/// pass to forget.
pub struct StripLayout<C> {
    order: Vec<C>,
    display: NodeMap<C, ChildDisplay>,
    extent_of: Arc<dyn Fn(&C) -> i32 + Send + Sync>,
    gap: i32,
    container_start: i32,
    redraw_requested: bool,
    intercept_disallowed: bool,
}

impl<C: NodeKey> StripLayout<C> {
    pub fn new(extent_of: impl Fn(&C) -> i32 + Send + Sync + 'static) -> Self {
        Self {
            order: Vec::new(),
            display: NodeMap::new(),
            extent_of: Arc::new(extent_of),
            gap: 0,
            container_start: 0,
            redraw_requested: false,
            intercept_disallowed: false,
        }
    }

    /// A layout where every child has the same extent.
    pub fn uniform(extent: i32) -> Self {
        Self::new(move |_| extent)
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_container_start(mut self, start: i32) -> Self {
        self.container_start = start;
        self
    }

    pub fn set_container_start(&mut self, start: i32) {
        self.container_start = start;
    }

    pub fn children(&self) -> &[C] {
        &self.order
    }

    pub fn display(&self, child: C) -> ChildDisplay {
        self.display.get(&child).copied().unwrap_or_default()
    }

    /// Total extent of all children plus gaps.
    pub fn content_extent(&self) -> i32 {
        let sizes: i32 = self.order.iter().map(|c| (self.extent_of)(c)).sum();
        let gaps = self.gap.saturating_mul(self.order.len().saturating_sub(1) as i32);
        sizes.saturating_add(gaps)
    }

    /// Where a child is drawn: natural start plus animation translation.
    pub fn drawn_start(&self, child: C) -> f32 {
        self.child_start(child) as f32 + self.display(child).translation
    }

    pub fn intercept_disallowed(&self) -> bool {
        self.intercept_disallowed
    }

    /// Returns whether a redraw was requested since the last call, and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }
}

impl<C: NodeKey> LayoutHost for StripLayout<C> {
    type Child = C;
    type Snapshot = C;

    fn child_count(&self) -> usize {
        self.order.len()
    }

    fn child_at(&self, index: usize) -> Option<C> {
        self.order.get(index).copied()
    }

    fn index_of(&self, child: C) -> Option<usize> {
        self.order.iter().position(|c| *c == child)
    }

    fn child_start(&self, child: C) -> i32 {
        let mut start = 0i32;
        for c in &self.order {
            if *c == child {
                break;
            }
            start = start
                .saturating_add((self.extent_of)(c))
                .saturating_add(self.gap);
        }
        start
    }

    fn child_extent(&self, child: C) -> i32 {
        (self.extent_of)(&child)
    }

    fn insert_child(&mut self, child: C, index: usize) {
        let index = index.min(self.order.len());
        self.order.insert(index, child);
        self.display.entry(child).or_default();
        self.redraw_requested = true;
    }

    fn remove_child_at(&mut self, index: usize) -> Option<C> {
        if index >= self.order.len() {
            return None;
        }
        self.redraw_requested = true;
        Some(self.order.remove(index))
    }

    fn is_child_visible(&self, child: C) -> bool {
        self.display(child).visible
    }

    fn set_child_visible(&mut self, child: C, visible: bool) {
        self.display.entry(child).or_default().visible = visible;
        self.redraw_requested = true;
    }

    fn set_child_translation(&mut self, child: C, translation: f32) {
        self.display.entry(child).or_default().translation = translation;
    }

    fn capture_snapshot(&mut self, child: C) -> C {
        child
    }

    fn container_start(&self) -> i32 {
        self.container_start
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.intercept_disallowed = disallow;
    }
}

impl<C: core::fmt::Debug> core::fmt::Debug for StripLayout<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StripLayout")
            .field("order", &self.order)
            .field("gap", &self.gap)
            .field("container_start", &self.container_start)
            .finish_non_exhaustive()
    }
}
