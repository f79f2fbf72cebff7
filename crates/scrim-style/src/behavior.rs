#![forbid(unsafe_code)]

//! Non-visual behavior descriptions.
//!
//! A style never schedules timers or installs gesture recognizers. It only
//! *describes* the behavior here — "call this after five seconds", "call
//! this when a downward swipe crosses its threshold" — and the host acts on
//! the description at the right moment.
//!
//! # Invariants
//!
//! - Handlers are opaque to the core; they are invoked by the host, never
//!   by the style that captured them.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A zero-argument dismissal callback captured at style construction time.
///
/// Cloning shares the underlying closure; equality is by closure identity,
/// which is what structural style comparison needs across re-presentation.
#[derive(Clone)]
pub struct DismissHandler {
    callback: Rc<dyn Fn()>,
}

impl DismissHandler {
    /// Wrap a closure.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback. Host-side only.
    pub fn call(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for DismissHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissHandler").finish_non_exhaustive()
    }
}

impl PartialEq for DismissHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

/// Haptic feedback to play when a toast is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticFeedback {
    Success,
    Warning,
    Error,
}

/// Timer-based auto-dismiss description.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TimedDismiss {
    /// No auto-dismiss.
    #[default]
    Disabled,
    /// The host should invoke `on_dismiss` once `duration` has elapsed
    /// since the toast became visible.
    After {
        duration: Duration,
        on_dismiss: DismissHandler,
    },
}

/// Gesture-based dismiss description.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractiveDismiss {
    /// No gesture dismissal.
    #[default]
    Disabled,
    /// The host should invoke `on_dismiss` when a downward swipe crosses
    /// its commit threshold.
    SwipeDown { on_dismiss: DismissHandler },
}

/// Non-visual preferences for a modal presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalBehaviorPreferences {
    /// Whether the host should size the content from its reported
    /// preferred content size.
    pub uses_preferred_content_size: bool,
    /// Handler for taps outside the presented content, if the style
    /// supports outside-tap dismissal.
    pub outside_tap_dismiss: Option<DismissHandler>,
}

/// Non-visual preferences for a toast presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastBehaviorPreferences {
    /// Haptic to play at presentation, if any.
    pub presentation_haptic: Option<HapticFeedback>,
    /// Auto-dismiss timing.
    pub timed_dismiss: TimedDismiss,
    /// Gesture dismissal.
    pub interactive_dismiss: InteractiveDismiss,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn handler_invokes_captured_closure() {
        let fired = Rc::new(Cell::new(0u32));
        let handler = {
            let fired = Rc::clone(&fired);
            DismissHandler::new(move || fired.set(fired.get() + 1))
        };

        handler.call();
        handler.call();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn handler_equality_is_by_identity() {
        let a = DismissHandler::new(|| {});
        let b = DismissHandler::new(|| {});
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn defaults_describe_no_behavior() {
        let prefs = ToastBehaviorPreferences::default();
        assert_eq!(prefs.presentation_haptic, None);
        assert_eq!(prefs.timed_dismiss, TimedDismiss::Disabled);
        assert_eq!(prefs.interactive_dismiss, InteractiveDismiss::Disabled);

        let modal = ModalBehaviorPreferences::default();
        assert!(!modal.uses_preferred_content_size);
        assert!(modal.outside_tap_dismiss.is_none());
    }
}
