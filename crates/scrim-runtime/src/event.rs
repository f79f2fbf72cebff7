#![forbid(unsafe_code)]

//! Transition state tag and the will-transition log event.
//!
//! A presentation goes through exactly two transition directions: entering
//! and exiting. The direction is a snapshot tag supplied by the caller at
//! the moment the host begins animating; the core keeps no "currently
//! entering" state between calls.
//!
//! [`ModalTransitionEvent`] round-trips through the string-keyed
//! [`Metadata`] mapping: encoded for emission to the logging collaborator,
//! and reconstructed from arbitrary metadata on the consuming side.
//!
//! # Failure Modes
//!
//! - Decoding returns `None` (never an error) when the discriminator key is
//!   missing or mismatched, or when any required field is missing or
//!   mistyped. Unknown extra keys are ignored.

use crate::metadata::Metadata;

/// Fixed label identifying the presentation log channel.
pub const LOG_TARGET: &str = "scrim.presentation";

/// Direction of an in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Entering,
    Exiting,
}

impl TransitionState {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entering => "entering",
            Self::Exiting => "exiting",
        }
    }

    /// Parse the wire representation.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "entering" => Some(Self::Entering),
            "exiting" => Some(Self::Exiting),
            _ => None,
        }
    }
}

/// Opaque handle identifying a host view controller.
///
/// The core treats it purely as identity; it never inspects the host object
/// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentableId(u64);

impl PresentableId {
    /// Wrap a raw host identity.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identity value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Structured event describing a modal presentation about to transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTransitionEvent {
    /// The view controller performing the presentation.
    pub presenter: PresentableId,
    /// The view controller being transitioned from.
    pub from: PresentableId,
    /// The view controller being transitioned to.
    pub to: PresentableId,
    /// Direction of the transition.
    pub state: TransitionState,
    /// Whether the host animates the transition.
    pub animated: bool,
}

impl ModalTransitionEvent {
    /// Discriminator value stored under [`Self::KEY_EVENT_TYPE`].
    pub const EVENT_TYPE: &'static str = "modalPresentationWillTransition";

    pub const KEY_EVENT_TYPE: &'static str = "eventType";
    pub const KEY_PRESENTER: &'static str = "presenterViewController";
    pub const KEY_FROM: &'static str = "fromViewController";
    pub const KEY_TO: &'static str = "toViewController";
    pub const KEY_STATE: &'static str = "transitionState";
    pub const KEY_ANIMATED: &'static str = "animated";

    /// Encode the event into a metadata mapping.
    pub fn into_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert(Self::KEY_EVENT_TYPE, Self::EVENT_TYPE);
        metadata.insert(Self::KEY_PRESENTER, self.presenter.id());
        metadata.insert(Self::KEY_FROM, self.from.id());
        metadata.insert(Self::KEY_TO, self.to.id());
        metadata.insert(Self::KEY_STATE, self.state.as_str());
        metadata.insert(Self::KEY_ANIMATED, self.animated);
        metadata
    }

    /// Best-effort reconstruction from arbitrary metadata.
    ///
    /// Returns `None` if the discriminator does not match this event's tag
    /// or any required field is absent or mistyped. Callers treat `None` as
    /// "not this event type", not as a failure.
    pub fn from_metadata(metadata: &Metadata) -> Option<Self> {
        if metadata.get_str(Self::KEY_EVENT_TYPE)? != Self::EVENT_TYPE {
            return None;
        }
        Some(Self {
            presenter: PresentableId::new(metadata.get_u64(Self::KEY_PRESENTER)?),
            from: PresentableId::new(metadata.get_u64(Self::KEY_FROM)?),
            to: PresentableId::new(metadata.get_u64(Self::KEY_TO)?),
            state: TransitionState::from_str(metadata.get_str(Self::KEY_STATE)?)?,
            animated: metadata.get_bool(Self::KEY_ANIMATED)?,
        })
    }

    /// Emit the event on the presentation log channel.
    pub fn emit(&self) {
        tracing::debug!(
            target: LOG_TARGET,
            event_type = Self::EVENT_TYPE,
            presenter = self.presenter.id(),
            from = self.from.id(),
            to = self.to.id(),
            state = self.state.as_str(),
            animated = self.animated,
            "modal presentation will transition"
        );
    }
}
