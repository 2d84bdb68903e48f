//! A factory map behind one lock.

use parking_lot::{Mutex, MutexGuard};

use crate::descriptor::{DefaultTypeInfo, TypeDescribe};
use crate::map::{BasicFactoryMap, MapVariant, PlainVariant};

/// A [`BasicFactoryMap`] shared between threads.
///
/// Every operation runs under a single lock, so a get-or-create for one
/// combination never races another and container identity stays stable.
pub struct SharedFactoryMap<V: MapVariant = PlainVariant, D: TypeDescribe = DefaultTypeInfo> {
    inner: Mutex<BasicFactoryMap<V, D>>,
}

impl<V: MapVariant, D: TypeDescribe> SharedFactoryMap<V, D> {
    pub fn new(map: BasicFactoryMap<V, D>) -> Self {
        SharedFactoryMap {
            inner: Mutex::new(map),
        }
    }

    /// Run `f` with exclusive access to the map.
    pub fn with<R>(&self, f: impl FnOnce(&mut BasicFactoryMap<V, D>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn lock(&self) -> MutexGuard<'_, BasicFactoryMap<V, D>> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> BasicFactoryMap<V, D> {
        self.inner.into_inner()
    }
}

impl<V: MapVariant + Default, D: TypeDescribe> Default for SharedFactoryMap<V, D> {
    fn default() -> Self {
        Self::new(BasicFactoryMap::new())
    }
}
