//! Adapter utilities for the `disclosure` crate.
//!
//! The `disclosure` crate is UI-agnostic and focuses on the index/window state machines. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Filter-keyed infinite-scroll pagination with deferred reveals ([`Paginator`])
//! - An explicit scroll observer registry instead of global listeners ([`ScrollHub`])
//! - Tween-driven carousel animation with lap snapping and autoplay ([`CarouselController`])
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod observer;
mod paginator;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Autoplay, CarouselController, DEFAULT_TRANSITION_MS};
pub use observer::{ListenerId, ScrollHub, ScrollObserver};
pub use paginator::Paginator;
pub use tween::{Easing, Tween};
