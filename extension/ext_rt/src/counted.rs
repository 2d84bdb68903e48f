//! Counted factories.
//!
//! A [`CountedFactory`] is a [`Factory`] whose products hold a unit of a
//! [`LiveCounter`] for their whole lifetime, and which records the library
//! it was registered from so whole libraries can be unregistered later.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::counter::{CounterGuard, LiveCounter};
use crate::factory::{Factory, Implementation};

/// A product of a [`CountedFactory`]; counts as live until dropped.
pub struct Counted<I: ?Sized> {
    value: Box<I>,
    guard: CounterGuard,
}

impl<I: ?Sized> Counted<I> {
    /// Counter this object is counted in.
    pub fn counter(&self) -> &LiveCounter {
        self.guard.counter()
    }
}

impl<I: ?Sized> Deref for Counted<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.value
    }
}

impl<I: ?Sized> DerefMut for Counted<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.value
    }
}

impl<I: ?Sized + fmt::Debug> fmt::Debug for Counted<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}

/// Factory whose products adjust a shared live-object counter.
pub struct CountedFactory<I: ?Sized, Info, Args> {
    factory: Factory<I, Info, Args>,
    library: String,
    counter: LiveCounter,
}

impl<I: ?Sized, Info, Args> CountedFactory<I, Info, Args> {
    /// Factory building `T`, with no library and a private counter.
    pub fn new<T: Implementation<I, Args>>(info: Info) -> Self {
        CountedFactory {
            factory: Factory::new::<T>(info),
            library: String::new(),
            counter: LiveCounter::new(),
        }
    }

    pub fn set_type<T: Implementation<I, Args>>(&mut self) {
        self.factory.set_type::<T>();
    }

    /// Build a new instance, counted until it is dropped.
    pub fn create(&self, args: Args) -> Counted<I> {
        let value = self.factory.create(args);
        Counted {
            value,
            guard: self.counter.guard(),
        }
    }

    pub fn info(&self) -> &Info {
        self.factory.info()
    }

    pub fn info_mut(&mut self) -> &mut Info {
        self.factory.info_mut()
    }

    /// Record the library this factory was registered from.
    pub fn set_library(&mut self, library: impl Into<String>) {
        self.library = library.into();
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    /// Count future products in `counter`.
    pub fn set_counter(&mut self, counter: LiveCounter) {
        self.counter = counter;
    }

    pub fn counter(&self) -> &LiveCounter {
        &self.counter
    }

    pub fn type_name(&self) -> &'static str {
        self.factory.type_name()
    }
}

impl<I: ?Sized, Info: Clone, Args> Clone for CountedFactory<I, Info, Args> {
    fn clone(&self) -> Self {
        CountedFactory {
            factory: self.factory.clone(),
            library: self.library.clone(),
            counter: self.counter.clone(),
        }
    }
}

impl<I: ?Sized, Info: fmt::Debug, Args> fmt::Debug for CountedFactory<I, Info, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountedFactory")
            .field("type", &self.type_name())
            .field("info", self.info())
            .field("library", &self.library)
            .field("counter", &self.counter)
            .finish()
    }
}
