// Dynamic type identity: a display name paired with the compiler's TypeId.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The concrete runtime type of a value.
///
/// The name comes from [`std::any::type_name`] and is only meant for
/// humans; its exact text depends on the toolchain. Comparison uses the
/// [`TypeId`], which is stable within one build.
#[derive(Debug, Clone, Copy)]
pub struct TypeIdentity {
    name: &'static str,
    id: TypeId,
}

impl TypeIdentity {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Last path segment of the name, e.g. `Derived` for `crate::hierarchy::Derived`.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Marker;

    #[test]
    fn test_identity_name_is_not_empty() {
        let identity = TypeIdentity::of::<Marker>();
        assert!(!identity.name().is_empty());
        assert!(identity.name().ends_with("Marker"));
    }

    #[test]
    fn test_short_name_strips_module_path() {
        assert_eq!(TypeIdentity::of::<Marker>().short_name(), "Marker");
        assert_eq!(TypeIdentity::of::<u32>().short_name(), "u32");
    }

    #[test]
    fn test_equality_follows_type_id() {
        assert_eq!(TypeIdentity::of::<Marker>(), TypeIdentity::of::<Marker>());
        assert_ne!(TypeIdentity::of::<Marker>(), TypeIdentity::of::<u8>());
    }

    #[test]
    fn test_is_checks_concrete_type() {
        let identity = TypeIdentity::of::<String>();
        assert!(identity.is::<String>());
        assert!(!identity.is::<str>());
    }

    #[test]
    fn test_display_prints_full_name() {
        let identity = TypeIdentity::of::<Marker>();
        assert_eq!(format!("{}", identity), identity.name());
    }

    #[test]
    fn test_hash_dedups_same_type() {
        let mut seen = HashSet::new();
        seen.insert(TypeIdentity::of::<Marker>());
        seen.insert(TypeIdentity::of::<Marker>());
        seen.insert(TypeIdentity::of::<i64>());
        assert_eq!(seen.len(), 2);
    }
}
