#![forbid(unsafe_code)]

//! Value-type primitives for the scrim presentation core.
//!
//! This crate provides:
//! - [`geometry`]: points, sizes, rectangles, and edge insets in host
//!   coordinates, with zero-clamping and whole-unit rounding.
//! - [`animation`]: [`AnimationSpec`] descriptions of transition curves.
//! - [`environment`]: the type-keyed [`Environment`] styles may customize.
//!
//! Everything here is pure data; no I/O, no timers, no rendering.

pub mod animation;
pub mod environment;
pub mod geometry;

pub use animation::AnimationSpec;
pub use environment::Environment;
pub use geometry::{EdgeInsets, Point, Rect, Size, Vector};
