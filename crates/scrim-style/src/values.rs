#![forbid(unsafe_code)]

//! Computed value objects returned by style queries.
//!
//! These carry no logic. A style produces them on demand from a context
//! snapshot; the host applies them to views. Nothing here is cached.

use scrim_core::geometry::{Rect, Size, Vector};
use scrim_core::AnimationSpec;

bitflags::bitflags! {
    /// Which corners a [`RoundedCorners`] radius applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CornerMask: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_LEFT = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Corner rounding treatment for a presented surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCorners {
    pub radius: f32,
    pub mask: CornerMask,
}

impl RoundedCorners {
    /// Round all four corners.
    pub const fn all(radius: f32) -> Self {
        Self {
            radius,
            mask: CornerMask::ALL,
        }
    }

    /// Round only the top corners (bottom sheets).
    pub const fn top(radius: f32) -> Self {
        Self {
            radius,
            mask: CornerMask::TOP,
        }
    }
}

/// Drop shadow description, in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSpec {
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
    /// Blur radius.
    pub radius: f32,
    /// Offset from the surface.
    pub offset: Vector,
}

impl ShadowSpec {
    /// Create a shadow spec.
    pub const fn new(opacity: f32, radius: f32, offset: Vector) -> Self {
        Self {
            opacity,
            radius,
            offset,
        }
    }
}

/// Resting-state geometry for a modal presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalDisplayValues {
    /// Frame of the presented content in container coordinates.
    pub frame: Rect,
    /// Opacity of the dimming overlay behind the content, if any.
    pub overlay_opacity: Option<f32>,
    /// Shadow behind the content, if any.
    pub shadow: Option<ShadowSpec>,
    /// Corner treatment, if any.
    pub rounded_corners: Option<RoundedCorners>,
}

impl ModalDisplayValues {
    /// Bare frame with no overlay, shadow, or corner treatment.
    pub const fn frame(frame: Rect) -> Self {
        Self {
            frame,
            overlay_opacity: None,
            shadow: None,
            rounded_corners: None,
        }
    }
}

/// Geometry and curve for one phase of a transition.
///
/// For an entrance the host animates *from* these values to the display
/// values; for an exit it animates from the display values *to* these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionValues {
    pub frame: Rect,
    pub animation: AnimationSpec,
    pub shadow: Option<ShadowSpec>,
    pub rounded_corners: Option<RoundedCorners>,
}

impl TransitionValues {
    /// Frame with the default animation and no decoration.
    pub const fn frame(frame: Rect) -> Self {
        Self {
            frame,
            animation: AnimationSpec::Default,
            shadow: None,
            rounded_corners: None,
        }
    }

    /// Replace the animation spec.
    #[must_use]
    pub fn animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Attach a shadow.
    #[must_use]
    pub fn shadow(mut self, shadow: ShadowSpec) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Attach corner rounding.
    #[must_use]
    pub fn rounded_corners(mut self, corners: RoundedCorners) -> Self {
        self.rounded_corners = Some(corners);
        self
    }
}

/// Size an item should be measured at before it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreheatValues {
    pub size: Size,
}

/// Resting-state values for every visible toast in a container.
///
/// `presented` is index-aligned with the context's toast order,
/// front-to-back preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContainerDisplayValues {
    pub presented: Vec<TransitionValues>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::geometry::Rect;

    #[test]
    fn corner_mask_composition() {
        assert_eq!(
            CornerMask::TOP | CornerMask::BOTTOM,
            CornerMask::ALL
        );
        assert!(CornerMask::TOP.contains(CornerMask::TOP_RIGHT));
        assert!(!CornerMask::TOP.contains(CornerMask::BOTTOM_LEFT));
    }

    #[test]
    fn transition_values_builder() {
        let values = TransitionValues::frame(Rect::new(0.0, 0.0, 100.0, 50.0))
            .shadow(ShadowSpec::new(0.3, 8.0, Vector::new(0.0, 2.0)))
            .rounded_corners(RoundedCorners::top(10.0));

        assert_eq!(values.animation, AnimationSpec::Default);
        assert_eq!(values.shadow.unwrap().radius, 8.0);
        assert_eq!(values.rounded_corners.unwrap().mask, CornerMask::TOP);
    }
}
