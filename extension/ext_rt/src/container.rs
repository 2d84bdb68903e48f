//! Factory containers: the ordered collections a factory map owns.

use std::any::Any;
use std::slice;

use crate::counted::CountedFactory;
use crate::counter::CounterGuard;
use crate::factory::Factory;

/// An entry a [`FactoryContainer`] can hold.
pub trait FactoryEntry {
    /// Library the entry was registered from, if entries track one.
    fn library(&self) -> Option<&str> {
        None
    }
}

impl<I: ?Sized, Info, Args> FactoryEntry for Factory<I, Info, Args> {}

impl<I: ?Sized, Info, Args> FactoryEntry for CountedFactory<I, Info, Args> {
    fn library(&self) -> Option<&str> {
        Some(CountedFactory::library(self))
    }
}

/// Factories of one (interface, info, arguments) combination, in
/// registration order.
///
/// A container may hold a unit of a live counter for as long as it exists.
#[derive(Debug)]
pub struct FactoryContainer<E> {
    entries: Vec<E>,
    guard: Option<CounterGuard>,
}

impl<E> FactoryContainer<E> {
    pub fn new() -> Self {
        Self::with_guard(None)
    }

    pub(crate) fn with_guard(guard: Option<CounterGuard>) -> Self {
        FactoryContainer {
            entries: Vec::new(),
            guard,
        }
    }

    /// Append an entry after all existing ones.
    pub fn push(&mut self, entry: E) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, E> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        self.entries.get_mut(index)
    }

    /// The counter guard held by this container, if any.
    pub fn guard(&self) -> Option<&CounterGuard> {
        self.guard.as_ref()
    }
}

impl<E: FactoryEntry> FactoryContainer<E> {
    /// Drop every entry registered from `library`, keeping the others in
    /// order. Returns whether the container is now empty.
    pub fn remove_library(&mut self, library: &str) -> bool {
        self.entries.retain(|entry| entry.library() != Some(library));
        self.entries.is_empty()
    }
}

impl<E> Default for FactoryContainer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a FactoryContainer<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut FactoryContainer<E> {
    type Item = &'a mut E;
    type IntoIter = slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A container with its entry type erased, as stored in a factory map.
pub(crate) trait ErasedContainer: Any + Send {
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Drop the entries of `library`. Returns whether this removed at least
    /// one entry and left the container empty.
    fn prune_library(&mut self, library: &str) -> bool;
}

impl<E: FactoryEntry + Send + 'static> ErasedContainer for FactoryContainer<E> {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn prune_library(&mut self, library: &str) -> bool {
        let before = self.len();
        self.remove_library(library) && self.len() < before
    }
}
