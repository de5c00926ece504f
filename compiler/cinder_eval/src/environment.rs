//! Environment frames.
//!
//! A frame is one flat map from name to value. Entering a scope never chains
//! to a parent: [`Environment::extend`] copies every binding of the base into
//! a new frame and overlays the new bindings. Lookup is therefore a single
//! map probe, and frames that share an ancestor are independent maps once
//! they diverge.
//!
//! `Environment` is a shared handle. Cloning it aliases the same frame, so an
//! [`assign`](Environment::assign) through one handle is visible through
//! every clone of it, and through nothing extended from it earlier.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use cinder_ir::Name;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// Bindings introduced at one scope-entry point.
pub type Bindings = FxHashMap<Name, Value>;

/// Error returned by `Environment::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The frame has no binding for the name.
    Unbound,
}

struct Frame {
    bindings: Bindings,
    /// Most recent frame extended from this one. Bookkeeping only; lookup
    /// never follows it. Weak so a frame does not keep its extensions
    /// (and the closures inside them) alive.
    next: Weak<RefCell<Frame>>,
}

/// Shared handle to one flat frame.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::from_bindings(Bindings::default())
    }

    /// Create a frame holding exactly `bindings`.
    pub fn from_bindings(bindings: Bindings) -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            bindings,
            next: Weak::new(),
        })))
    }

    /// Look up a name in this frame.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.0.borrow().bindings.get(&name).cloned()
    }

    /// Whether this frame binds `name`.
    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.0.borrow().bindings.contains_key(&name)
    }

    /// Bind or rebind a name in this frame. Used to seed root frames.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Derive a new frame from this one.
    ///
    /// Returns `self` (same handle) when `bindings` is empty. Otherwise the
    /// new frame starts as a copy of this frame's bindings with `bindings`
    /// laid over them.
    pub fn extend(&self, bindings: Bindings) -> Environment {
        if bindings.is_empty() {
            return self.clone();
        }

        let mut merged = self.0.borrow().bindings.clone();
        merged.extend(bindings);
        tracing::trace!(size = merged.len(), "extend environment");

        let extended = Environment::from_bindings(merged);
        self.0.borrow_mut().next = Rc::downgrade(&extended.0);
        extended
    }

    /// Overwrite an existing binding of this frame in place.
    ///
    /// Never creates a binding.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), AssignError> {
        match self.0.borrow_mut().bindings.get_mut(&name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(AssignError::Unbound),
        }
    }

    /// The most recent frame extended from this one, if still alive.
    pub fn latest_extension(&self) -> Option<Environment> {
        self.0.borrow().next.upgrade().map(Environment)
    }

    /// Number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().bindings.is_empty()
    }

    /// Whether two handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints only the frame size; frames can reach themselves through closures.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
