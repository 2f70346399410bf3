//! Persistent variable environment.
//!
//! An environment is an immutable singly-linked chain of frames, innermost
//! first. Extending one allocates a single frame whose parent is shared, so a
//! closure can hold on to the exact chain that was active when it was created
//! while evaluation carries on with longer ones.

use std::fmt;
use std::rc::Rc;

use msd_ir::Name;

use crate::Value;

/// A chain of bindings. Cloning shares the chain.
#[derive(Clone, Default)]
pub struct Environment(Option<Rc<Frame>>);

struct Frame {
    name: Name,
    value: Value,
    parent: Environment,
}

impl Environment {
    /// The environment with no bindings.
    pub fn empty() -> Self {
        Environment(None)
    }

    /// A new environment binding `name` to `value` in front of `self`.
    ///
    /// `self` is left untouched and stays valid.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value) -> Environment {
        Environment(Some(Rc::new(Frame {
            name,
            value,
            parent: self.clone(),
        })))
    }

    /// Innermost binding of `name`, if any.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.0.as_deref();
        while let Some(frame) = current {
            if frame.name == name {
                return Some(frame.value.clone());
            }
            current = frame.parent.0.as_deref();
        }
        None
    }

    /// Whether both are the same chain (not merely equal bindings).
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of frames, shadowed ones included.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.0.as_deref();
        while let Some(frame) = current {
            depth += 1;
            current = frame.parent.0.as_deref();
        }
        depth
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

// Unlink uniquely owned parents in a loop; the derived recursive drop would
// use one native stack frame per binding.
impl Drop for Frame {
    fn drop(&mut self) {
        let mut next = self.parent.0.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut frame) => next = frame.parent.0.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .finish()
    }
}
