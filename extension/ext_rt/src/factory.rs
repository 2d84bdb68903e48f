//! Object factories.
//!
//! A [`Factory`] owns exactly one construction behaviour and an `Info`
//! value describing it. The behaviour is always bound: a factory can only be
//! built from a concrete [`Implementation`], and rebinding replaces it.
//!
//! Argument lists are tuples, so `Factory<dyn Shape, String, (f64, f64)>`
//! builds a `Box<dyn Shape>` from two floats.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

/// How a concrete type is built behind interface `I` from arguments `Args`.
pub trait Implementation<I: ?Sized, Args>: 'static {
    fn create(args: Args) -> Box<I>;
}

/// Type-erased construction behaviour.
pub(crate) trait FactoryFunction<I: ?Sized, Args>: Send + Sync {
    fn call(&self, args: Args) -> Box<I>;

    /// Independent clone of this behaviour.
    fn copy(&self) -> Box<dyn FactoryFunction<I, Args>>;

    fn type_name(&self) -> &'static str;
}

/// Behaviour bound to the concrete type `T`.
struct Bound<T>(PhantomData<fn() -> T>);

impl<T> Bound<T> {
    fn new() -> Self {
        Bound(PhantomData)
    }
}

impl<T, I, Args> FactoryFunction<I, Args> for Bound<T>
where
    T: Implementation<I, Args>,
    I: ?Sized,
{
    fn call(&self, args: Args) -> Box<I> {
        T::create(args)
    }

    fn copy(&self) -> Box<dyn FactoryFunction<I, Args>> {
        Box::new(Bound::<T>::new())
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Produces `Box<I>` values from `Args` through a bound implementation.
pub struct Factory<I: ?Sized, Info, Args> {
    function: Box<dyn FactoryFunction<I, Args>>,
    info: Info,
}

impl<I: ?Sized, Info, Args> Factory<I, Info, Args> {
    /// Factory building `T`.
    pub fn new<T: Implementation<I, Args>>(info: Info) -> Self {
        Factory {
            function: Box::new(Bound::<T>::new()),
            info,
        }
    }

    /// Rebind the factory to build `T`.
    pub fn set_type<T: Implementation<I, Args>>(&mut self) {
        self.function = Box::new(Bound::<T>::new());
    }

    /// Build a new instance.
    pub fn create(&self, args: Args) -> Box<I> {
        self.function.call(args)
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut Info {
        &mut self.info
    }

    /// Name of the bound concrete type.
    pub fn type_name(&self) -> &'static str {
        self.function.type_name()
    }
}

impl<I: ?Sized, Info: Clone, Args> Clone for Factory<I, Info, Args> {
    fn clone(&self) -> Self {
        Factory {
            function: self.function.copy(),
            info: self.info.clone(),
        }
    }
}

impl<I: ?Sized, Info: fmt::Debug, Args> fmt::Debug for Factory<I, Info, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("type", &self.type_name())
            .field("info", &self.info)
            .finish()
    }
}
