#![forbid(unsafe_code)]

//! Style contracts and built-in styles for scrim presentations.
//!
//! A *style* is a value bundle that computes geometry and animation values
//! from an immutable context snapshot; it carries no identity and schedules
//! nothing. This crate provides:
//!
//! - [`modal`]: [`ModalPresentationStyle`] and the built-in full-screen,
//!   card, popover, and sheet styles, selectable through [`ModalStyle`].
//! - [`toast`]: [`ToastPresentationStyle`] / [`ToastContainerPresentationStyle`]
//!   and the bottom-anchored [`StackedToastStyle`].
//! - [`stack`]: the pure stacking layout engine toast containers delegate to.
//! - [`values`] and [`behavior`]: the computed value objects styles return.

pub mod behavior;
pub mod modal;
pub mod stack;
pub mod toast;
pub mod values;

pub use behavior::{
    DismissHandler, HapticFeedback, InteractiveDismiss, ModalBehaviorPreferences,
    TimedDismiss, ToastBehaviorPreferences,
};
pub use modal::{
    CardStyle, FullScreenStyle, ModalContext, ModalPresentationStyle, ModalStyle,
    PopoverStyle, SheetStyle,
};
pub use stack::StackLayout;
pub use toast::{
    PreheatedToast, StackedToastStyle, ToastContainerPresentationStyle, ToastContext,
    ToastId, ToastPresentationStyle,
};
pub use values::{
    CornerMask, ModalDisplayValues, PreheatValues, RoundedCorners, ShadowSpec,
    ToastContainerDisplayValues, TransitionValues,
};
