//! A headless drag-to-reorder engine for single-axis containers.
//!
//! For host-side building blocks (tweens, an in-memory strip layout, a frame-driven
//! controller), see the `dragline-adapter` crate.
//!
//! A [`DragContainer`] lets a user press a child's drag handle, drag the child along the
//! container's axis, and swaps it with its draggable neighbors as it crosses their midpoints.
//! Swapped neighbors and the released item are animated into place, and an enclosing
//! scrollable viewport can be scrolled while the item is held near its edges.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - child measurement, ordering and drawing ([`LayoutHost`])
//! - time-based interpolation ([`Animator`])
//! - optionally, the enclosing scroll viewport ([`ScrollViewport`])
//! - pointer events and a layout-pass hook (see [`DragContainer`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod error;
pub mod geometry;
mod gesture;
mod host;
mod key;
mod options;
mod registry;
mod scroll;
mod session;
mod swap;
mod types;


pub use container::DragContainer;
pub use error::DragError;
pub use host::{Animator, LayoutHost, NoViewport, ScrollViewport, SwapListener};
pub use options::{
    DEFAULT_MAX_SCROLL_SPEED, DEFAULT_SCROLL_SENSITIVE_MARGIN_DP, DEFAULT_SLOP, DragOptions,
};
pub use scroll::auto_scroll_delta;
pub use types::{
    AnimationId, AnimationSpec, DragOverlay, DragPhase, Orientation, PointerAction, PointerEvent,
    PointerId, PointerSample, SessionState,
};

#[doc(hidden)]
pub use key::NodeKey;
