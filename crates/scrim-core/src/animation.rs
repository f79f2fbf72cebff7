#![forbid(unsafe_code)]

//! Animation curve descriptions.
//!
//! The core never drives animations; it only describes the curve the host
//! should use for a transition phase. A spring carries the gesture velocity
//! it was released with so the handoff from tracking to animating has no
//! visible snap. A cubic bezier pins an explicit easing where no velocity
//! is available (scrubbing a cancelled dismissal back to rest).

use core::time::Duration;

use crate::geometry::{Point, Vector};

/// How the host should animate from one set of values to another.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationSpec {
    /// The host's default transition curve.
    #[default]
    Default,
    /// Critically-damped spring seeded with the releasing gesture's velocity.
    Spring { initial_velocity: Vector },
    /// Fixed cubic bezier easing over an explicit duration.
    CubicBezier {
        p1: Point,
        p2: Point,
        duration: Duration,
    },
}

impl AnimationSpec {
    /// Spring continuing from an in-flight gesture.
    pub const fn spring(initial_velocity: Vector) -> Self {
        Self::Spring { initial_velocity }
    }

    /// Cubic bezier with explicit control points and duration.
    pub const fn cubic_bezier(p1: Point, p2: Point, duration: Duration) -> Self {
        Self::CubicBezier { p1, p2, duration }
    }

    /// Decelerating ease-out bezier, used when scrubbing back to rest.
    pub const fn ease_out(duration: Duration) -> Self {
        Self::CubicBezier {
            p1: Point { x: 0.33, y: 1.0 },
            p2: Point { x: 0.68, y: 1.0 },
            duration,
        }
    }

    /// Whether this spec was seeded from a gesture.
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Spring { .. })
    }
}
