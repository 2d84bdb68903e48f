//! Type descriptors.
//!
//! A [`TypeDescribe`] facility turns a type into a comparable key. The
//! factory map keys its containers by the descriptor of the container's
//! factory type, so each (interface, info, arguments) combination gets its
//! own container.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::Hash;

/// Maps types to descriptor keys.
pub trait TypeDescribe {
    type Descriptor: Clone + Eq + Ord + Hash + fmt::Debug + Send;

    fn describe<T: ?Sized + 'static>() -> Self::Descriptor;
}

/// Descriptor of [`DefaultTypeInfo`]: the type's `TypeId` and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeDescriptor {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The default facility, distinguishing every distinct type.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTypeInfo;

impl TypeDescribe for DefaultTypeInfo {
    type Descriptor = TypeDescriptor;

    fn describe<T: ?Sized + 'static>() -> TypeDescriptor {
        TypeDescriptor::of::<T>()
    }
}
