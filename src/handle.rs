// Single owning handle to one heap-allocated `dyn Base`.

use std::ops::Deref;

use tracing::{debug, trace};

use crate::hierarchy::{Base, Derived, PlainBase};
use crate::identity::TypeIdentity;

/// Owns exactly one boxed value, statically typed as `dyn Base`.
///
/// The handle cannot be cloned. The box is released once, when the handle
/// is dropped.
pub struct Handle {
    inner: Box<dyn Base>,
}

impl Handle {
    pub fn new<T: Base>(value: T) -> Self {
        let inner: Box<dyn Base> = Box::new(value);
        debug!(
            concrete = inner.type_identity().name(),
            "allocated handle"
        );
        Self { inner }
    }

    pub fn derived() -> Self {
        Self::new(Derived::new())
    }

    pub fn plain_base() -> Self {
        Self::new(PlainBase::new())
    }

    pub fn type_identity(&self) -> TypeIdentity {
        self.inner.type_identity()
    }

    pub fn downcast_ref<T: Base>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Base>(&self) -> bool {
        self.inner.is::<T>()
    }
}

impl Deref for Handle {
    type Target = dyn Base;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        trace!(concrete = self.inner.type_identity().name(), "releasing handle");
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("concrete", &self.type_identity().name())
            .field("label", &self.inner.label())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
