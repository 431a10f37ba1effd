use crate::geometry::smoother_step;
use crate::{Animator, DragContainer, LayoutHost, ScrollViewport};

/// The recurring follow-up scheduled after each auto-scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScheduledScroll {
    /// Scroll offset of the viewport when the step was issued.
    pub(crate) start_scroll: i32,
    pub(crate) delta: i32,
}

/// Scroll step for an item whose leading edge sits at `position` inside a viewport of `extent`.
///
/// Negative within `margin` of the leading edge, positive within `margin` of the trailing
/// edge, zero in between. The magnitude eases in with depth and never exceeds `max_speed`.
pub fn auto_scroll_delta(position: i32, extent: i32, margin: i32, max_speed: i32) -> i32 {
    let speed = max_speed as f32;
    if position < margin {
        (-speed * smoother_step(margin as f32, 0.0, position as f32)) as i32
    } else if position > extent.saturating_sub(margin) {
        let edge = extent.saturating_sub(margin);
        (speed * smoother_step(edge as f32, extent as f32, position as f32)) as i32
    } else {
        0
    }
}

impl<L: LayoutHost, A: Animator, V: ScrollViewport> DragContainer<L, A, V> {
    /// Nudges the scrollable ancestor when the dragged item nears its edges.
    pub(crate) fn handle_container_scroll(&mut self, live_start: i32) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let start_scroll = viewport.scroll_offset();
        let position = self
            .layout
            .container_start()
            .saturating_sub(start_scroll)
            .saturating_add(live_start);
        let delta = auto_scroll_delta(
            position,
            viewport.extent(),
            self.options.scroll_sensitive_margin,
            self.options.max_scroll_speed,
        );
        dtrace!(position, delta, "auto-scroll");

        // Replaces any follow-up that has not run yet.
        self.scheduled_scroll = None;
        viewport.smooth_scroll_by(delta);
        self.scheduled_scroll = Some(ScheduledScroll {
            start_scroll,
            delta,
        });
        viewport.request_callback();
    }

    /// Whether an auto-scroll follow-up is waiting for [`Self::run_scheduled_scroll`].
    pub fn has_scheduled_scroll(&self) -> bool {
        self.scheduled_scroll.is_some()
    }

    /// Runs the pending auto-scroll follow-up.
    ///
    /// While dragging, and only if the viewport actually moved since the step was issued, the
    /// drag is re-evaluated with the item shifted by the scroll step. Returns `true` if it was.
    pub fn run_scheduled_scroll(&mut self) -> bool {
        let Some(scheduled) = self.scheduled_scroll.take() else {
            return false;
        };
        if !self.session.is_dragging() {
            return false;
        }
        let Some(viewport) = self.viewport.as_ref() else {
            return false;
        };
        if viewport.scroll_offset() == scheduled.start_scroll {
            return false;
        }
        let Some(item) = self.session.item() else {
            return false;
        };
        let offset = item.total_offset.saturating_add(scheduled.delta);
        self.on_drag(offset);
        true
    }
}
