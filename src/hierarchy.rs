// Two-level polymorphic hierarchy: a base trait with one dispatchable
// behavior, a concrete base, and a derived variant that adds nothing.

use std::any::Any;

use crate::identity::TypeIdentity;

/// The base interface.
///
/// `label` is the dispatchable behavior. `type_identity` is a provided
/// method, so every implementor gets its own copy in its vtable and a call
/// through `&dyn Base` reports the implementor, not the trait object.
pub trait Base: Any {
    fn label(&self) -> &str;

    fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn Base {
    pub fn downcast_ref<T: Base>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Base>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A directly-instantiated base.
///
/// Holds a label so a boxed value is a real heap allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainBase {
    label: &'static str,
}

impl PlainBase {
    pub const DEFAULT_LABEL: &'static str = "base";

    pub fn new() -> Self {
        Self {
            label: Self::DEFAULT_LABEL,
        }
    }
}

impl Default for PlainBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Base for PlainBase {
    fn label(&self) -> &str {
        self.label
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The derived variant. Behaves exactly like its embedded base.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Derived {
    base: PlainBase,
}

impl Derived {
    pub fn new() -> Self {
        Self {
            base: PlainBase::new(),
        }
    }

    pub fn base(&self) -> &PlainBase {
        &self.base
    }
}

impl Base for Derived {
    fn label(&self) -> &str {
        self.base.label()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
