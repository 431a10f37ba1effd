//! Adapter utilities for the `dragline` crate.
//!
//! The `dragline` crate is UI-agnostic and only decides what moves where. This crate provides
//! small, framework-neutral building blocks an adapter usually needs around it:
//!
//! - Tween-based [`dragline::Animator`] implementation driven by an adapter clock
//! - An in-memory single-axis [`dragline::LayoutHost`] (useful for simulations and tests)
//! - A clamped [`dragline::ScrollViewport`] model
//! - A frame-driven [`Controller`] tying them together
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod controller;
mod key;
mod layout;
mod tween;
mod viewport;

#[cfg(test)]
mod tests;

pub use animator::{AnimationFrame, TweenAnimator};
pub use controller::Controller;
pub use layout::{ChildDisplay, StripLayout};
pub use tween::{Easing, Tween};
pub use viewport::ScrollModel;
