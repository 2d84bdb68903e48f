//! Extension Runtime
//!
//! Rust-native counterparts of the generated extension headers:
//!
//! | Header | Runtime type |
//! |--------|--------------|
//! | `factory.hpp` | [`Factory`] |
//! | `counted_factory.hpp` | [`CountedFactory`], [`Counted`], [`LiveCounter`] |
//! | `shared_library.hpp` | [`Functor`], [`SharedLibrary`] |
//! | `factory_map.hpp` | [`FactoryMap`] |
//! | `counted_factory_map.hpp` | [`CountedFactoryMap`] |
//!
//! Where the headers repeat each declaration once per arity, the runtime
//! uses tuples as argument lists: a factory taking `(f64, String)` is a
//! `Factory<I, Info, (f64, String)>`, and [`Signature`] covers function
//! pointers of up to six parameters.

mod container;
mod counted;
mod counter;
mod descriptor;
mod error;
mod factory;
mod functor;
mod library;
mod map;
mod shared;

pub use container::{FactoryContainer, FactoryEntry};
pub use counted::{Counted, CountedFactory};
pub use counter::{CounterGuard, LiveCounter};
pub use descriptor::{DefaultTypeInfo, TypeDescribe, TypeDescriptor};
pub use error::{Result, RuntimeError};
pub use factory::{Factory, Implementation};
pub use functor::{Functor, Signature};
pub use library::SharedLibrary;
pub use map::{
    BasicFactoryMap, CountedFactoryMap, CountedVariant, FactoryMap, MapVariant, PlainVariant,
};
pub use shared::SharedFactoryMap;
