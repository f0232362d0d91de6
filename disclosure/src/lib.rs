//! Headless progressive disclosure and circular navigation.
//!
//! For adapter-level workflows (deferred reveals, scroll observers, carousel tweens and
//! autoplay), see the `disclosure-adapter` crate.
//!
//! This crate holds two small state machines that drive catalog views:
//! - [`ListWindower`] reveals a growing prefix of an already-fetched sequence in fixed steps as
//!   the viewport nears the end of the rendered content.
//! - [`CircularCarousel`] browses a short sequence as an endless loop over a tripled backing
//!   strip, correcting its index by whole laps at the strip boundaries.
//!
//! Both are UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item sequences (the engines only track lengths)
//! - scroll metrics (viewport size, scroll offset, content size)
//! - navigation commands and the animation that renders index changes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod options;
mod sensor;
mod state;
mod types;
mod windower;


pub use carousel::CircularCarousel;
pub use options::{
    CarouselChangeCallback, CarouselOptions, DEFAULT_STEP, DEFAULT_THRESHOLD, DEFAULT_VIEW_SIZE,
    WindowerChangeCallback, WindowerOptions,
};
pub use sensor::ProximitySensor;
pub use state::{CarouselState, WindowState};
pub use types::{
    Breakpoint, CarouselStep, Direction, RevealOutcome, RevealTicket, ScrollMetrics,
};
pub use windower::ListWindower;
