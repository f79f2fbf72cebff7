#![forbid(unsafe_code)]

//! Ambient environment passed to presented content.
//!
//! A style's `customize` hook may inject arbitrary configuration here for
//! descendant content to read. The core defines no schema: values are keyed
//! by type, and reading a type that was never inserted returns `None`.
//!
//! Single-threaded by design (values are `Rc`-shared), matching the rest of
//! the presentation core.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Type-keyed bag of ambient values.
#[derive(Clone, Default)]
pub struct Environment {
    values: HashMap<TypeId, Rc<dyn Any>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("len", &self.values.len())
            .finish_non_exhaustive()
    }
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Read a value by type.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Whether a value of the given type is present.
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct TintColor(u32);

    #[test]
    fn insert_then_get() {
        let mut env = Environment::new();
        env.insert(TintColor(0xff00ff));
        assert_eq!(env.get::<TintColor>(), Some(&TintColor(0xff00ff)));
        assert!(env.contains::<TintColor>());
    }

    #[test]
    fn missing_type_is_none() {
        let env = Environment::new();
        assert_eq!(env.get::<TintColor>(), None);
        assert!(!env.contains::<TintColor>());
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut env = Environment::new();
        env.insert(TintColor(1));
        env.insert(TintColor(2));
        assert_eq!(env.get::<TintColor>(), Some(&TintColor(2)));
    }
}
