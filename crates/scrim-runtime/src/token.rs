#![forbid(unsafe_code)]

//! Presentation lifetime token.
//!
//! Presenting returns exactly one [`PresentationToken`]. The presenting
//! caller retains it for as long as the presentation should stay visible;
//! dropping it — or calling [`PresentationToken::dismiss`] — runs the
//! teardown routine. The presenting engine side holds only a
//! [`PresentationHandle`] (a weak back-reference) and never keeps the
//! presentation alive itself.
//!
//! # Invariants
//!
//! - Teardown runs exactly once per token, however many times dismissal is
//!   triggered (explicit call, drop, or both). Redundant dismissal is a
//!   no-op, not an error.
//!
//! # Failure Modes
//!
//! - The token does not enforce that an exit-transition event was emitted
//!   before teardown; that ordering is the caller's documented
//!   responsibility.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Teardown = Box<dyn FnOnce()>;

struct TokenInner {
    teardown: RefCell<Option<Teardown>>,
}

impl TokenInner {
    fn dismiss(&self) {
        // take() first so a teardown that re-enters dismiss() is a no-op.
        let teardown = self.teardown.borrow_mut().take();
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    fn is_active(&self) -> bool {
        self.teardown.borrow().is_some()
    }
}

/// Ownership handle for one active presentation.
///
/// Not cloneable: exactly one token exists per presentation.
pub struct PresentationToken {
    inner: Rc<TokenInner>,
}

impl PresentationToken {
    /// Issue a token owning the given teardown routine.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Rc::new(TokenInner {
                teardown: RefCell::new(Some(Box::new(teardown))),
            }),
        }
    }

    /// Tear the presentation down now. Safe to call repeatedly; only the
    /// first call has an effect.
    pub fn dismiss(&self) {
        self.inner.dismiss();
    }

    /// Whether the presentation has not been dismissed yet.
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Weak back-reference for the presenting engine side.
    pub fn handle(&self) -> PresentationHandle {
        PresentationHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Drop for PresentationToken {
    fn drop(&mut self) {
        self.inner.dismiss();
    }
}

impl fmt::Debug for PresentationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationToken")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Weak observer of a presentation's liveness.
///
/// Never keeps the presentation alive; once the owning token is dropped or
/// dismissed, `is_active` reports `false`.
#[derive(Clone)]
pub struct PresentationHandle {
    inner: Weak<TokenInner>,
}

impl PresentationHandle {
    /// Whether the observed presentation is still active.
    pub fn is_active(&self) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.is_active())
    }
}

impl fmt::Debug for PresentationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationHandle")
            .field("active", &self.is_active())
            .finish()
    }
}
