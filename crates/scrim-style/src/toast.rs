#![forbid(unsafe_code)]

//! Toast presentation styles.
//!
//! Toasts are transient stacked surfaces. A container style lays out every
//! visible toast at once (delegating to [`StackLayout`]); a per-item style
//! computes the entrance, exit, interactive-exit, and reverse-scrub values
//! for the frontmost toast.
//!
//! The interactive-exit query carries the dismissal gesture's velocity into
//! a spring so the release animation continues the user's motion. The
//! reverse query (scrubbing a cancelled dismissal back to rest) pins an
//! explicit ease-out bezier instead, since there is no velocity to carry.
//!
//! # Invariants
//!
//! - `display_values` returns exactly one entry per presented toast, in the
//!   order supplied by the context.
//! - All queries are pure functions of the context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use scrim_core::geometry::{EdgeInsets, Rect, Size, Vector};
use scrim_core::{AnimationSpec, Environment};

use crate::behavior::{
    DismissHandler, HapticFeedback, InteractiveDismiss, TimedDismiss,
    ToastBehaviorPreferences,
};
use crate::stack::StackLayout;
use crate::values::{
    PreheatValues, RoundedCorners, ShadowSpec, ToastContainerDisplayValues,
    TransitionValues,
};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity for a presented toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocate a fresh unique ID.
    pub fn next() -> Self {
        Self(NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A toast that has completed its pre-heat sizing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreheatedToast {
    pub id: ToastId,
    /// Content size reported during pre-heat.
    pub preferred_size: Size,
}

impl PreheatedToast {
    pub fn new(id: ToastId, preferred_size: Size) -> Self {
        Self { id, preferred_size }
    }
}

/// Read-only snapshot for toast queries, built fresh per query.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContext {
    /// Size of the presenting container.
    pub container_size: Size,
    /// Safe-area insets of the presenting container.
    pub safe_area: EdgeInsets,
    /// Already-preheated toasts in presentation order (oldest first).
    pub presented: Vec<PreheatedToast>,
    /// Velocity of an in-flight dismissal gesture, for interactive exit.
    pub gesture_velocity: Option<Vector>,
}

impl ToastContext {
    /// Create a context with no presented toasts and no gesture.
    pub fn new(container_size: Size, safe_area: EdgeInsets) -> Self {
        Self {
            container_size,
            safe_area,
            presented: Vec::new(),
            gesture_velocity: None,
        }
    }

    /// Set the presented toasts, oldest first.
    #[must_use]
    pub fn presented(mut self, presented: Vec<PreheatedToast>) -> Self {
        self.presented = presented;
        self
    }

    /// Attach an in-flight gesture velocity.
    #[must_use]
    pub fn gesture_velocity(mut self, velocity: Vector) -> Self {
        self.gesture_velocity = Some(velocity);
        self
    }
}

/// Capability contract for a single toast's transitions.
pub trait ToastPresentationStyle {
    /// Non-visual behavior for this toast.
    fn behavior_preferences(&self, _context: &ToastContext) -> ToastBehaviorPreferences {
        ToastBehaviorPreferences::default()
    }

    /// Starting values for the entrance animation of the frontmost toast.
    fn enter_transition_values(&self, context: &ToastContext) -> TransitionValues;

    /// Ending values for a non-interactive exit.
    fn exit_transition_values(&self, context: &ToastContext) -> TransitionValues;

    /// Ending values for a gesture-driven exit; the context's gesture
    /// velocity is carried into the animation spec.
    fn interactive_exit_transition_values(&self, context: &ToastContext)
    -> TransitionValues;

    /// Values for scrubbing a cancelled dismissal back to rest.
    fn reverse_transition_values(&self, context: &ToastContext) -> TransitionValues;

    /// Inject configuration into the ambient environment for descendant
    /// content. Default is a no-op.
    fn customize(&self, _environment: &mut Environment) {}
}

/// Capability contract for laying out a whole toast container.
pub trait ToastContainerPresentationStyle {
    /// Sizing box for a toast that has not yet claimed a slot.
    fn preheat_values(&self, context: &ToastContext) -> PreheatValues;

    /// Resting values for every visible toast, index-aligned with the
    /// context's presented order.
    fn display_values(&self, context: &ToastContext) -> ToastContainerDisplayValues;
}

/// Bottom-anchored stacked toast style.
///
/// Implements both the container contract (stack layout) and the per-item
/// contract (slide up from the bottom edge).
#[derive(Debug, Clone, PartialEq)]
pub struct StackedToastStyle {
    /// Stack layout parameters.
    pub layout: StackLayout,
    /// Corner radius applied to each toast.
    pub corner_radius: f32,
    presentation_haptic: Option<HapticFeedback>,
    auto_dismiss: Option<(Duration, DismissHandler)>,
    swipe_dismiss: Option<DismissHandler>,
}

impl Default for StackedToastStyle {
    fn default() -> Self {
        Self {
            layout: StackLayout::default(),
            corner_radius: 12.0,
            presentation_haptic: None,
            auto_dismiss: None,
            swipe_dismiss: None,
        }
    }
}

impl StackedToastStyle {
    /// Duration of the reverse-scrub settle animation.
    const REVERSE_DURATION: Duration = Duration::from_millis(350);

    /// Create a style with default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred toast width.
    #[must_use]
    pub fn target_width(mut self, width: f32) -> Self {
        self.layout.target_width = width;
        self
    }

    /// Set the vertical gap between stacked toasts.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.layout.spacing = spacing;
        self
    }

    /// Set the padding between the safe area and the toasts.
    #[must_use]
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.layout.padding = padding;
        self
    }

    /// Play a haptic when the toast is presented.
    #[must_use]
    pub fn presentation_haptic(mut self, haptic: HapticFeedback) -> Self {
        self.presentation_haptic = Some(haptic);
        self
    }

    /// Describe a timed dismissal: the host invokes `on_dismiss` once
    /// `duration` has elapsed.
    #[must_use]
    pub fn auto_dismiss_after(mut self, duration: Duration, on_dismiss: DismissHandler) -> Self {
        self.auto_dismiss = Some((duration, on_dismiss));
        self
    }

    /// Describe a swipe-down dismissal: the host invokes `on_dismiss` when
    /// the gesture crosses its commit threshold.
    #[must_use]
    pub fn swipe_to_dismiss(mut self, on_dismiss: DismissHandler) -> Self {
        self.swipe_dismiss = Some(on_dismiss);
        self
    }

    fn shadow() -> ShadowSpec {
        ShadowSpec::new(0.18, 12.0, Vector::new(0.0, 4.0))
    }

    fn decorated(&self, frame: Rect) -> TransitionValues {
        TransitionValues::frame(frame)
            .shadow(Self::shadow())
            .rounded_corners(RoundedCorners::all(self.corner_radius))
    }

    /// Resting frame of the frontmost (most recent) toast. With no toasts
    /// presented, an empty frame at the bottom anchor.
    fn frontmost_resting_frame(&self, context: &ToastContext) -> Rect {
        let sizes: Vec<Size> = context
            .presented
            .iter()
            .map(|toast| toast.preferred_size)
            .collect();
        self.layout
            .presented_frames(context.container_size, context.safe_area, &sizes)
            .last()
            .copied()
            .unwrap_or_else(|| {
                let width = self
                    .layout
                    .item_width(context.container_size, context.safe_area);
                let x = (context.container_size.width / 2.0 - width / 2.0).round();
                let bottom = context.container_size.height
                    - context.safe_area.bottom
                    - self.layout.padding.bottom;
                Rect::new(x, bottom, width, 0.0)
            })
    }

    fn offscreen_frame(&self, context: &ToastContext) -> Rect {
        let frame = self.frontmost_resting_frame(context);
        Rect::new(
            frame.x(),
            context.container_size.height,
            frame.width(),
            frame.height(),
        )
    }
}

impl ToastPresentationStyle for StackedToastStyle {
    fn behavior_preferences(&self, _context: &ToastContext) -> ToastBehaviorPreferences {
        ToastBehaviorPreferences {
            presentation_haptic: self.presentation_haptic,
            timed_dismiss: match &self.auto_dismiss {
                Some((duration, on_dismiss)) => TimedDismiss::After {
                    duration: *duration,
                    on_dismiss: on_dismiss.clone(),
                },
                None => TimedDismiss::Disabled,
            },
            interactive_dismiss: match &self.swipe_dismiss {
                Some(on_dismiss) => InteractiveDismiss::SwipeDown {
                    on_dismiss: on_dismiss.clone(),
                },
                None => InteractiveDismiss::Disabled,
            },
        }
    }

    fn enter_transition_values(&self, context: &ToastContext) -> TransitionValues {
        self.decorated(self.offscreen_frame(context))
    }

    fn exit_transition_values(&self, context: &ToastContext) -> TransitionValues {
        self.decorated(self.offscreen_frame(context))
    }

    fn interactive_exit_transition_values(
        &self,
        context: &ToastContext,
    ) -> TransitionValues {
        let velocity = context.gesture_velocity.unwrap_or(Vector::ZERO);
        self.decorated(self.offscreen_frame(context))
            .animation(AnimationSpec::spring(velocity))
    }

    fn reverse_transition_values(&self, context: &ToastContext) -> TransitionValues {
        self.decorated(self.frontmost_resting_frame(context))
            .animation(AnimationSpec::ease_out(Self::REVERSE_DURATION))
    }
}

impl ToastContainerPresentationStyle for StackedToastStyle {
    fn preheat_values(&self, context: &ToastContext) -> PreheatValues {
        PreheatValues {
            size: self
                .layout
                .preheat_size(context.container_size, context.safe_area),
        }
    }

    fn display_values(&self, context: &ToastContext) -> ToastContainerDisplayValues {
        let sizes: Vec<Size> = context
            .presented
            .iter()
            .map(|toast| toast.preferred_size)
            .collect();
        let presented = self
            .layout
            .presented_frames(context.container_size, context.safe_area, &sizes)
            .into_iter()
            .map(|frame| self.decorated(frame))
            .collect();
        ToastContainerDisplayValues { presented }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_toast_context() -> ToastContext {
        ToastContext::new(Size::new(400.0, 800.0), EdgeInsets::ZERO).presented(vec![
            PreheatedToast::new(ToastId::next(), Size::new(340.0, 50.0)),
            PreheatedToast::new(ToastId::next(), Size::new(340.0, 80.0)),
        ])
    }

    #[test]
    fn display_matches_reference_stack() {
        let style = StackedToastStyle::new();
        let values = ToastContainerPresentationStyle::display_values(&style, &two_toast_context());

        assert_eq!(values.presented.len(), 2);
        assert_eq!(values.presented[0].frame, Rect::new(16.0, 638.0, 368.0, 50.0));
        assert_eq!(values.presented[1].frame, Rect::new(16.0, 704.0, 368.0, 80.0));
        for item in &values.presented {
            assert_eq!(item.animation, AnimationSpec::Default);
            assert!(item.shadow.is_some());
            assert!(item.rounded_corners.is_some());
        }
    }

    #[test]
    fn preheat_reports_full_available_height() {
        let style = StackedToastStyle::new();
        let ctx = ToastContext::new(Size::new(400.0, 800.0), EdgeInsets::ZERO);
        let values = style.preheat_values(&ctx);
        assert_eq!(values.size, Size::new(368.0, 768.0));
    }

    #[test]
    fn enter_starts_below_container() {
        let style = StackedToastStyle::new();
        let ctx = two_toast_context();
        let enter = style.enter_transition_values(&ctx);
        assert_eq!(enter.frame.y(), 800.0);
        assert_eq!(enter.frame.size, Size::new(368.0, 80.0));
        assert_eq!(enter.animation, AnimationSpec::Default);
    }

    #[test]
    fn interactive_exit_carries_gesture_velocity() {
        let style = StackedToastStyle::new();
        let ctx = two_toast_context().gesture_velocity(Vector::new(0.0, 1200.0));

        let interactive = style.interactive_exit_transition_values(&ctx);
        assert_eq!(
            interactive.animation,
            AnimationSpec::Spring {
                initial_velocity: Vector::new(0.0, 1200.0)
            }
        );

        // Distinct from the non-interactive exit spec.
        let plain = style.exit_transition_values(&ctx);
        assert_eq!(plain.animation, AnimationSpec::Default);
        assert_ne!(interactive.animation, plain.animation);
    }

    #[test]
    fn reverse_scrub_uses_explicit_curve() {
        let style = StackedToastStyle::new();
        let ctx = two_toast_context();
        let reverse = style.reverse_transition_values(&ctx);

        // Settles back onto the frontmost resting frame.
        assert_eq!(reverse.frame, Rect::new(16.0, 704.0, 368.0, 80.0));
        assert!(matches!(
            reverse.animation,
            AnimationSpec::CubicBezier { .. }
        ));
    }

    #[test]
    fn behavior_preferences_describe_host_duties() {
        let timed = DismissHandler::new(|| {});
        let swiped = DismissHandler::new(|| {});
        let style = StackedToastStyle::new()
            .presentation_haptic(HapticFeedback::Success)
            .auto_dismiss_after(Duration::from_secs(5), timed.clone())
            .swipe_to_dismiss(swiped.clone());

        let ctx = two_toast_context();
        let prefs = ToastPresentationStyle::behavior_preferences(&style, &ctx);
        assert_eq!(prefs.presentation_haptic, Some(HapticFeedback::Success));
        assert_eq!(
            prefs.timed_dismiss,
            TimedDismiss::After {
                duration: Duration::from_secs(5),
                on_dismiss: timed,
            }
        );
        assert_eq!(
            prefs.interactive_dismiss,
            InteractiveDismiss::SwipeDown { on_dismiss: swiped }
        );
    }

    #[test]
    fn empty_context_does_not_panic() {
        let style = StackedToastStyle::new();
        let ctx = ToastContext::new(Size::new(400.0, 800.0), EdgeInsets::ZERO);

        let values = ToastContainerPresentationStyle::display_values(&style, &ctx);
        assert!(values.presented.is_empty());

        let enter = style.enter_transition_values(&ctx);
        assert_eq!(enter.frame.height(), 0.0);
        assert_eq!(enter.frame.y(), 800.0);
    }

    #[test]
    fn queries_are_pure() {
        let style = StackedToastStyle::new();
        let ctx = two_toast_context().gesture_velocity(Vector::new(12.0, 840.0));

        assert_eq!(
            ToastContainerPresentationStyle::display_values(&style, &ctx),
            ToastContainerPresentationStyle::display_values(&style, &ctx)
        );
        assert_eq!(
            style.interactive_exit_transition_values(&ctx),
            style.interactive_exit_transition_values(&ctx)
        );
        assert_eq!(
            style.reverse_transition_values(&ctx),
            style.reverse_transition_values(&ctx)
        );
    }

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastId::next();
        let b = ToastId::next();
        assert_ne!(a, b);
        assert!(b.id() > a.id());
    }
}
