//! Type-indexed factory maps.
//!
//! A [`BasicFactoryMap`] owns one [`FactoryContainer`] per (interface, info,
//! arguments) combination. Containers are created on first [`get`] and
//! reused afterwards; they are stored type-erased under the descriptor of
//! their factory type and recovered with a checked downcast.
//!
//! The [`MapVariant`] decides which factory type the containers hold and
//! what happens to a factory before it is appended: [`PlainVariant`] holds
//! [`Factory`]s, [`CountedVariant`] holds [`CountedFactory`]s stamped with
//! the current library and counter.
//!
//! [`get`]: BasicFactoryMap::get

use std::any::type_name;
use std::collections::hash_map::Entry;
use std::fmt;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::container::{ErasedContainer, FactoryContainer, FactoryEntry};
use crate::counted::CountedFactory;
use crate::counter::{CounterGuard, LiveCounter};
use crate::descriptor::{DefaultTypeInfo, TypeDescribe};
use crate::error::{Result, RuntimeError};
use crate::factory::{Factory, Implementation};

/// Variant behaviour of a [`BasicFactoryMap`].
pub trait MapVariant {
    /// Entry type of the container for one combination.
    type Factory<I: ?Sized + 'static, Info: Send + 'static, Args: 'static>: FactoryEntry
        + Send
        + 'static;

    /// Guard a newly created container holds for its lifetime.
    fn container_guard(&self) -> Option<CounterGuard>;

    /// Build an entry for `T`, applying the variant's pre-insertion effects.
    fn make_factory<T, I, Info, Args>(&self, info: Info) -> Self::Factory<I, Info, Args>
    where
        T: Implementation<I, Args>,
        I: ?Sized + 'static,
        Info: Send + 'static,
        Args: 'static;
}

/// Containers of plain [`Factory`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainVariant;

impl MapVariant for PlainVariant {
    type Factory<I: ?Sized + 'static, Info: Send + 'static, Args: 'static> =
        Factory<I, Info, Args>;

    fn container_guard(&self) -> Option<CounterGuard> {
        None
    }

    fn make_factory<T, I, Info, Args>(&self, info: Info) -> Self::Factory<I, Info, Args>
    where
        T: Implementation<I, Args>,
        I: ?Sized + 'static,
        Info: Send + 'static,
        Args: 'static,
    {
        Factory::new::<T>(info)
    }
}

/// Containers of [`CountedFactory`]s, tagged with the library being loaded.
///
/// Each container counts as one live object in the counter that was current
/// when it was created; each factory added counts its products in the
/// counter that was current when it was added.
#[derive(Debug)]
pub struct CountedVariant {
    current_library: String,
    default_counter: LiveCounter,
    current_counter: LiveCounter,
}

impl Default for CountedVariant {
    fn default() -> Self {
        let default_counter = LiveCounter::new();
        CountedVariant {
            current_library: String::new(),
            current_counter: default_counter.clone(),
            default_counter,
        }
    }
}

impl MapVariant for CountedVariant {
    type Factory<I: ?Sized + 'static, Info: Send + 'static, Args: 'static> =
        CountedFactory<I, Info, Args>;

    fn container_guard(&self) -> Option<CounterGuard> {
        Some(self.current_counter.guard())
    }

    fn make_factory<T, I, Info, Args>(&self, info: Info) -> Self::Factory<I, Info, Args>
    where
        T: Implementation<I, Args>,
        I: ?Sized + 'static,
        Info: Send + 'static,
        Args: 'static,
    {
        let mut factory = CountedFactory::new::<T>(info);
        factory.set_library(self.current_library.as_str());
        factory.set_counter(self.current_counter.clone());
        factory
    }
}

/// Registry of factory containers keyed by type descriptor.
pub struct BasicFactoryMap<V: MapVariant = PlainVariant, D: TypeDescribe = DefaultTypeInfo> {
    containers: FxHashMap<D::Descriptor, Box<dyn ErasedContainer>>,
    variant: V,
    describe: PhantomData<fn() -> D>,
}

/// Map of plain factories under the default type-info facility.
pub type FactoryMap = BasicFactoryMap<PlainVariant>;

/// Map of counted factories under the default type-info facility.
pub type CountedFactoryMap = BasicFactoryMap<CountedVariant>;

impl<V: MapVariant + Default, D: TypeDescribe> BasicFactoryMap<V, D> {
    pub fn new() -> Self {
        Self::with_variant(V::default())
    }
}

impl<V: MapVariant, D: TypeDescribe> BasicFactoryMap<V, D> {
    pub fn with_variant(variant: V) -> Self {
        BasicFactoryMap {
            containers: FxHashMap::default(),
            variant,
            describe: PhantomData,
        }
    }

    /// The container for `(I, Info, Args)`, created empty on first access.
    ///
    /// Repeated calls for the same combination return the same container.
    pub fn get<I, Info, Args>(
        &mut self,
    ) -> Result<&mut FactoryContainer<V::Factory<I, Info, Args>>>
    where
        I: ?Sized + 'static,
        Info: Send + 'static,
        Args: 'static,
    {
        let descriptor = D::describe::<V::Factory<I, Info, Args>>();
        let container = match self.containers.entry(descriptor) {
            Entry::Occupied(entry) => {
                trace!(descriptor = ?entry.key(), "reusing factory container");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(descriptor = ?entry.key(), "creating factory container");
                let container: FactoryContainer<V::Factory<I, Info, Args>> =
                    FactoryContainer::with_guard(self.variant.container_guard());
                entry.insert(Box::new(container))
            }
        };
        container
            .as_any_mut()
            .downcast_mut::<FactoryContainer<V::Factory<I, Info, Args>>>()
            .ok_or_else(|| RuntimeError::DescriptorCollision {
                descriptor: type_name::<V::Factory<I, Info, Args>>().to_string(),
            })
    }

    /// Append a factory building `T` to the `(I, Info, Args)` container.
    pub fn add<T, I, Info, Args>(&mut self, info: Info) -> Result<()>
    where
        T: Implementation<I, Args>,
        I: ?Sized + 'static,
        Info: Send + 'static,
        Args: 'static,
    {
        let factory = self.variant.make_factory::<T, I, Info, Args>(info);
        self.get::<I, Info, Args>()?.push(factory);
        Ok(())
    }

    /// Whether a container for `(I, Info, Args)` exists.
    pub fn contains<I, Info, Args>(&self) -> bool
    where
        I: ?Sized + 'static,
        Info: Send + 'static,
        Args: 'static,
    {
        self.containers
            .contains_key(&D::describe::<V::Factory<I, Info, Args>>())
    }

    /// Number of containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }
}

impl<D: TypeDescribe> BasicFactoryMap<CountedVariant, D> {
    /// Tag factories added from now on with `library`, counting into
    /// `counter`, or into the map's own counter when `None`.
    pub fn set_current_library(
        &mut self,
        library: impl Into<String>,
        counter: Option<LiveCounter>,
    ) {
        let variant = &mut self.variant;
        variant.current_library = library.into();
        variant.current_counter = counter.unwrap_or_else(|| variant.default_counter.clone());
    }

    pub fn current_library(&self) -> &str {
        &self.variant.current_library
    }

    pub fn current_counter(&self) -> &LiveCounter {
        &self.variant.current_counter
    }

    /// Counter used when no library counter is supplied.
    pub fn default_counter(&self) -> &LiveCounter {
        &self.variant.default_counter
    }

    /// Drop every factory registered from `library` and every container left
    /// empty by that. Containers that were already empty are kept, along with
    /// their counter units. Returns whether the map holds no containers
    /// afterwards.
    pub fn remove_library(&mut self, library: &str) -> bool {
        let before = self.containers.len();
        self.containers
            .retain(|_, container| !container.prune_library(library));
        debug!(
            library,
            pruned = before - self.containers.len(),
            remaining = self.containers.len(),
            "removed library factories"
        );
        self.containers.is_empty()
    }
}

impl<V: MapVariant + Default, D: TypeDescribe> Default for BasicFactoryMap<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: MapVariant + fmt::Debug, D: TypeDescribe> fmt::Debug for BasicFactoryMap<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicFactoryMap")
            .field("containers", &self.containers.keys().collect::<Vec<_>>())
            .field("variant", &self.variant)
            .finish()
    }
}
