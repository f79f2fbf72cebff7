#![forbid(unsafe_code)]

//! Modal presentation styles.
//!
//! A modal style computes resting geometry ([`ModalDisplayValues`]) and the
//! endpoints of the entrance/exit animations ([`TransitionValues`]) from an
//! immutable [`ModalContext`] snapshot. The host builds the context from
//! live geometry, applies the returned values, and drives the animation
//! itself.
//!
//! # Invariants
//!
//! - Every query is a pure function of the context: identical contexts
//!   produce identical values.
//! - Width-bearing computations clamp the style's target width to the
//!   available width (container minus safe area minus padding); they never
//!   overflow the container or produce negative sizes.
//!
//! # Failure Modes
//!
//! - A container smaller than the insets clamps to zero-sized frames; no
//!   query panics or errors.

use std::fmt;
use std::rc::Rc;

use scrim_core::geometry::{EdgeInsets, Rect, Size, Vector};
use scrim_core::Environment;

use crate::behavior::{DismissHandler, ModalBehaviorPreferences};
use crate::values::{ModalDisplayValues, RoundedCorners, ShadowSpec, TransitionValues};

/// Read-only snapshot of the presenting container, built fresh per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalContext {
    /// Size of the presenting container.
    pub container_size: Size,
    /// Safe-area insets of the presenting container.
    pub safe_area: EdgeInsets,
    /// Preferred content size reported by the presented content during
    /// pre-heat, if the host measured one.
    pub preferred_content_size: Option<Size>,
}

impl ModalContext {
    /// Create a context with no measured content size.
    pub fn new(container_size: Size, safe_area: EdgeInsets) -> Self {
        Self {
            container_size,
            safe_area,
            preferred_content_size: None,
        }
    }

    /// Attach the content's measured preferred size.
    #[must_use]
    pub fn preferred_content_size(mut self, size: Size) -> Self {
        self.preferred_content_size = Some(size);
        self
    }
}

/// Capability contract for modal presentation styles.
///
/// The host queries `display_values` for the resting state, animates from
/// `enter_transition_values` into it on presentation, and from it to
/// `exit_transition_values` on dismissal.
pub trait ModalPresentationStyle {
    /// Non-visual behavior for this presentation.
    fn behavior_preferences(&self, _context: &ModalContext) -> ModalBehaviorPreferences {
        ModalBehaviorPreferences::default()
    }

    /// Resting-state geometry.
    fn display_values(&self, context: &ModalContext) -> ModalDisplayValues;

    /// Starting values for the entrance animation.
    fn enter_transition_values(&self, context: &ModalContext) -> TransitionValues;

    /// Ending values for the exit animation.
    fn exit_transition_values(&self, context: &ModalContext) -> TransitionValues;

    /// Inject configuration into the ambient environment for descendant
    /// content. Default is a no-op.
    fn customize(&self, _environment: &mut Environment) {}
}

fn offscreen_below(frame: Rect, container: Size) -> Rect {
    Rect::new(frame.x(), container.height, frame.width(), frame.height())
}

/// Edge-to-edge cover of the presenting container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullScreenStyle;

impl ModalPresentationStyle for FullScreenStyle {
    fn display_values(&self, context: &ModalContext) -> ModalDisplayValues {
        let size = context.container_size;
        ModalDisplayValues::frame(Rect::new(0.0, 0.0, size.width, size.height))
    }

    fn enter_transition_values(&self, context: &ModalContext) -> TransitionValues {
        let frame = self.display_values(context).frame;
        TransitionValues::frame(offscreen_below(frame, context.container_size))
    }

    fn exit_transition_values(&self, context: &ModalContext) -> TransitionValues {
        self.enter_transition_values(context)
    }
}

/// Bottom-anchored card inset from the safe area, sized from the content's
/// preferred size when available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    /// Preferred card width; clamped to the available width.
    pub target_width: f32,
    /// Padding between the safe area and the card.
    pub padding: EdgeInsets,
    /// Corner radius applied to all four corners.
    pub corner_radius: f32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            target_width: 400.0,
            padding: EdgeInsets::all(16.0),
            corner_radius: 16.0,
        }
    }
}

impl CardStyle {
    const OVERLAY_OPACITY: f32 = 0.48;

    fn shadow() -> ShadowSpec {
        ShadowSpec::new(0.25, 24.0, Vector::new(0.0, 8.0))
    }

    fn resting_frame(&self, context: &ModalContext) -> Rect {
        let container = context.container_size;
        let available = container.inset_by(context.safe_area.adding(self.padding));

        let width = self.target_width.min(available.width).max(0.0).round();
        let height = context
            .preferred_content_size
            .map_or(available.height, |size| size.height.min(available.height))
            .max(0.0)
            .round();

        let x = (container.width / 2.0 - width / 2.0).round();
        let y = container.height - context.safe_area.bottom - self.padding.bottom - height;
        Rect::new(x, y, width, height)
    }
}

impl ModalPresentationStyle for CardStyle {
    fn behavior_preferences(&self, _context: &ModalContext) -> ModalBehaviorPreferences {
        ModalBehaviorPreferences {
            uses_preferred_content_size: true,
            outside_tap_dismiss: None,
        }
    }

    fn display_values(&self, context: &ModalContext) -> ModalDisplayValues {
        ModalDisplayValues {
            frame: self.resting_frame(context),
            overlay_opacity: Some(Self::OVERLAY_OPACITY),
            shadow: Some(Self::shadow()),
            rounded_corners: Some(RoundedCorners::all(self.corner_radius)),
        }
    }

    fn enter_transition_values(&self, context: &ModalContext) -> TransitionValues {
        let frame = self.resting_frame(context);
        TransitionValues::frame(offscreen_below(frame, context.container_size))
            .shadow(Self::shadow())
            .rounded_corners(RoundedCorners::all(self.corner_radius))
    }

    fn exit_transition_values(&self, context: &ModalContext) -> TransitionValues {
        self.enter_transition_values(context)
    }
}

/// Popover anchored below a source rectangle, clamped into the container.
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverStyle {
    /// Source rectangle in container coordinates.
    pub anchor: Rect,
    /// Preferred popover width; clamped to the available width.
    pub target_width: f32,
    /// Corner radius applied to all four corners.
    pub corner_radius: f32,
    /// Invoked by the host when the user taps outside the popover.
    pub on_dismiss: Option<DismissHandler>,
}

impl PopoverStyle {
    /// Gap between the anchor and the popover.
    const ANCHOR_GAP: f32 = 8.0;
    /// Minimum margin from the container edges.
    const EDGE_MARGIN: f32 = 8.0;
    /// Fallback height when the content reported no preferred size.
    const FALLBACK_HEIGHT: f32 = 240.0;

    /// Create a popover anchored to the given source rect.
    pub fn new(anchor: Rect) -> Self {
        Self {
            anchor,
            target_width: 320.0,
            corner_radius: 12.0,
            on_dismiss: None,
        }
    }

    /// Set the outside-tap dismissal handler.
    #[must_use]
    pub fn on_dismiss(mut self, handler: DismissHandler) -> Self {
        self.on_dismiss = Some(handler);
        self
    }

    fn shadow() -> ShadowSpec {
        ShadowSpec::new(0.2, 16.0, Vector::new(0.0, 4.0))
    }

    fn resting_frame(&self, context: &ModalContext) -> Rect {
        let container = context.container_size;
        let safe = context.safe_area;

        let available_width =
            container.width - safe.horizontal() - 2.0 * Self::EDGE_MARGIN;
        let width = self.target_width.min(available_width).max(0.0).round();

        let y = self.anchor.bottom() + Self::ANCHOR_GAP;
        let space_below =
            container.height - safe.bottom - Self::EDGE_MARGIN - y;
        let height = context
            .preferred_content_size
            .map_or(Self::FALLBACK_HEIGHT, |size| size.height)
            .min(space_below)
            .max(0.0)
            .round();

        let min_x = safe.left + Self::EDGE_MARGIN;
        let max_x = container.width - safe.right - Self::EDGE_MARGIN - width;
        let x = (self.anchor.center().x - width / 2.0)
            .round()
            .min(max_x)
            .max(min_x);

        Rect::new(x, y, width, height)
    }
}

impl ModalPresentationStyle for PopoverStyle {
    fn behavior_preferences(&self, _context: &ModalContext) -> ModalBehaviorPreferences {
        ModalBehaviorPreferences {
            uses_preferred_content_size: true,
            outside_tap_dismiss: self.on_dismiss.clone(),
        }
    }

    fn display_values(&self, context: &ModalContext) -> ModalDisplayValues {
        ModalDisplayValues {
            frame: self.resting_frame(context),
            // Transparent tap-catcher so outside taps can dismiss.
            overlay_opacity: Some(0.0),
            shadow: Some(Self::shadow()),
            rounded_corners: Some(RoundedCorners::all(self.corner_radius)),
        }
    }

    fn enter_transition_values(&self, context: &ModalContext) -> TransitionValues {
        // Collapsed toward its own center; the host animates the expansion.
        let frame = self.resting_frame(context);
        let collapse = EdgeInsets::new(
            frame.height() * 0.075,
            frame.width() * 0.075,
            frame.height() * 0.075,
            frame.width() * 0.075,
        );
        TransitionValues::frame(frame.inset_by(collapse))
            .shadow(Self::shadow())
            .rounded_corners(RoundedCorners::all(self.corner_radius))
    }

    fn exit_transition_values(&self, context: &ModalContext) -> TransitionValues {
        self.enter_transition_values(context)
    }
}

/// Bottom sheet occupying a height fraction of the container.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    /// Fraction of the container height the sheet occupies, in `(0.0, 1.0]`.
    pub detent_fraction: f32,
    /// Corner radius applied to the top corners.
    pub corner_radius: f32,
    /// Invoked by the host when the user taps the dimmed area above.
    pub on_dismiss: Option<DismissHandler>,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            detent_fraction: 0.5,
            corner_radius: 10.0,
            on_dismiss: None,
        }
    }
}

impl SheetStyle {
    const OVERLAY_OPACITY: f32 = 0.4;

    /// Set the sheet's height fraction.
    #[must_use]
    pub fn detent_fraction(mut self, fraction: f32) -> Self {
        self.detent_fraction = fraction;
        self
    }

    /// Set the outside-tap dismissal handler.
    #[must_use]
    pub fn on_dismiss(mut self, handler: DismissHandler) -> Self {
        self.on_dismiss = Some(handler);
        self
    }

    fn resting_frame(&self, context: &ModalContext) -> Rect {
        let container = context.container_size;
        let max_height = container.height - context.safe_area.top;
        let height = (container.height * self.detent_fraction)
            .min(max_height)
            .max(0.0)
            .round();
        Rect::new(0.0, container.height - height, container.width, height)
    }
}

impl ModalPresentationStyle for SheetStyle {
    fn behavior_preferences(&self, _context: &ModalContext) -> ModalBehaviorPreferences {
        ModalBehaviorPreferences {
            uses_preferred_content_size: false,
            outside_tap_dismiss: self.on_dismiss.clone(),
        }
    }

    fn display_values(&self, context: &ModalContext) -> ModalDisplayValues {
        ModalDisplayValues {
            frame: self.resting_frame(context),
            overlay_opacity: Some(Self::OVERLAY_OPACITY),
            shadow: None,
            rounded_corners: Some(RoundedCorners::top(self.corner_radius)),
        }
    }

    fn enter_transition_values(&self, context: &ModalContext) -> TransitionValues {
        let frame = self.resting_frame(context);
        TransitionValues::frame(offscreen_below(frame, context.container_size))
            .rounded_corners(RoundedCorners::top(self.corner_radius))
    }

    fn exit_transition_values(&self, context: &ModalContext) -> TransitionValues {
        self.enter_transition_values(context)
    }
}

/// A modal style selected at the presenting call site.
///
/// Built-in variants compare structurally, which is how a host detects a
/// style change across re-presentation. User-defined styles compare by
/// allocation identity.
#[derive(Clone)]
pub enum ModalStyle {
    FullScreen(FullScreenStyle),
    Card(CardStyle),
    Popover(PopoverStyle),
    Sheet(SheetStyle),
    Custom(Rc<dyn ModalPresentationStyle>),
}

impl ModalStyle {
    /// Full-screen cover with default settings.
    pub fn full_screen() -> Self {
        Self::FullScreen(FullScreenStyle)
    }

    /// Card with default settings.
    pub fn card() -> Self {
        Self::Card(CardStyle::default())
    }

    /// Popover anchored to the given source rect.
    pub fn popover(anchor: Rect) -> Self {
        Self::Popover(PopoverStyle::new(anchor))
    }

    /// Half-height sheet with default settings.
    pub fn sheet() -> Self {
        Self::Sheet(SheetStyle::default())
    }

    /// User-defined style.
    pub fn custom(style: impl ModalPresentationStyle + 'static) -> Self {
        Self::Custom(Rc::new(style))
    }

    fn inner(&self) -> &dyn ModalPresentationStyle {
        match self {
            Self::FullScreen(style) => style,
            Self::Card(style) => style,
            Self::Popover(style) => style,
            Self::Sheet(style) => style,
            Self::Custom(style) => style.as_ref(),
        }
    }
}

impl fmt::Debug for ModalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullScreen(style) => f.debug_tuple("FullScreen").field(style).finish(),
            Self::Card(style) => f.debug_tuple("Card").field(style).finish(),
            Self::Popover(style) => f.debug_tuple("Popover").field(style).finish(),
            Self::Sheet(style) => f.debug_tuple("Sheet").field(style).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").finish(),
        }
    }
}

impl PartialEq for ModalStyle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::FullScreen(a), Self::FullScreen(b)) => a == b,
            (Self::Card(a), Self::Card(b)) => a == b,
            (Self::Popover(a), Self::Popover(b)) => a == b,
            (Self::Sheet(a), Self::Sheet(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl ModalPresentationStyle for ModalStyle {
    fn behavior_preferences(&self, context: &ModalContext) -> ModalBehaviorPreferences {
        self.inner().behavior_preferences(context)
    }

    fn display_values(&self, context: &ModalContext) -> ModalDisplayValues {
        self.inner().display_values(context)
    }

    fn enter_transition_values(&self, context: &ModalContext) -> TransitionValues {
        self.inner().enter_transition_values(context)
    }

    fn exit_transition_values(&self, context: &ModalContext) -> TransitionValues {
        self.inner().exit_transition_values(context)
    }

    fn customize(&self, environment: &mut Environment) {
        self.inner().customize(environment);
    }
}
