use alloc::vec::Vec;

use dragline::{AnimationId, AnimationSpec, Animator};

use crate::{Easing, Tween};

/// One sampled value of a running tween.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFrame {
    pub id: AnimationId,
    pub value: f32,
    /// `true` for the last frame of the tween; the tween is dropped afterwards.
    pub done: bool,
}

/// An [`Animator`] backed by [`Tween`]s and driven by an adapter clock.
///
/// Tweens start at the time of the latest [`Self::tick`] (or [`Self::set_now`]).
#[derive(Clone, Debug)]
pub struct TweenAnimator {
    easing: Easing,
    now_ms: u64,
    next_id: u64,
    running: Vec<(AnimationId, Tween)>,
    /// Cancelled or finished since the last tick; their sampled frames must not be delivered.
    stopped: Vec<AnimationId>,
}

impl Default for TweenAnimator {
    fn default() -> Self {
        Self::new(Easing::SmoothStep)
    }
}

impl TweenAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            now_ms: 0,
            next_id: 0,
            running: Vec::new(),
            stopped: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.iter().any(|(i, _)| *i == id)
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Whether `id` was cancelled or finished after the latest tick sampled it.
    pub fn is_stopped(&self, id: AnimationId) -> bool {
        self.stopped.contains(&id)
    }

    pub fn tween(&self, id: AnimationId) -> Option<&Tween> {
        self.running.iter().find(|(i, _)| *i == id).map(|(_, t)| t)
    }

    /// Advances the clock and samples every running tween, dropping the ones that finished.
    pub fn tick(&mut self, now_ms: u64) -> Vec<AnimationFrame> {
        self.set_now(now_ms);
        self.stopped.clear();
        let now = self.now_ms;
        let mut frames = Vec::with_capacity(self.running.len());
        self.running.retain(|(id, tween)| {
            let done = tween.is_done(now);
            frames.push(AnimationFrame {
                id: *id,
                value: tween.sample(now),
                done,
            });
            !done
        });
        frames
    }

    fn remove(&mut self, id: AnimationId) -> bool {
        self.stopped.push(id);
        let before = self.running.len();
        self.running.retain(|(i, _)| *i != id);
        before != self.running.len()
    }
}

impl Animator for TweenAnimator {
    fn start(&mut self, spec: AnimationSpec) -> AnimationId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = AnimationId(self.next_id);
        let tween = Tween::new(spec.from, spec.to, self.now_ms, spec.duration_ms, self.easing);
        self.running.push((id, tween));
        atrace!(?id, from = spec.from, to = spec.to, "tween started");
        id
    }

    fn cancel(&mut self, id: AnimationId) {
        if self.remove(id) {
            atrace!(?id, "tween cancelled");
        }
    }

    fn finish(&mut self, id: AnimationId) {
        if self.remove(id) {
            atrace!(?id, "tween finished early");
        }
    }
}
