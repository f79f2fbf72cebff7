#![forbid(unsafe_code)]

//! Lifetime and event model for scrim presentations.
//!
//! This crate provides:
//! - [`token`]: the [`PresentationToken`] ownership handle whose release
//!   dismisses its presentation exactly once, and the weak
//!   [`PresentationHandle`] the engine side observes it through.
//! - [`event`]: the [`TransitionState`] tag and the
//!   [`ModalTransitionEvent`] log event with its metadata codec.
//! - [`metadata`]: the string-keyed heterogeneous [`Metadata`] mapping
//!   exchanged with the logging collaborator.

pub mod event;
pub mod metadata;
pub mod token;

pub use event::{LOG_TARGET, ModalTransitionEvent, PresentableId, TransitionState};
pub use metadata::{Metadata, MetadataValue};
pub use token::{PresentationHandle, PresentationToken};
