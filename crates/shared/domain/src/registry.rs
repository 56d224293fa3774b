//! Slice registry for modular features.
//! A minimal type-erased container for pre-initialized feature state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Erases a concrete slice, remembering its type for later lookups.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), state: Box::new(state) }
    }

    /// Gets the concrete slice back, or `None` when `T` is not what was registered.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Aviary;

    impl FeatureSlice for Aviary {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Aquarium;

    impl FeatureSlice for Aquarium {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_downcast_matches_only_the_registered_type() {
        let slice = InitializedSlice::new(Aviary);

        assert_eq!(slice.id, TypeId::of::<Aviary>());
        assert!(slice.name.ends_with("Aviary"));
        assert!(slice.downcast_ref::<Aviary>().is_some());
        assert!(slice.downcast_ref::<Aquarium>().is_none());
    }
}
