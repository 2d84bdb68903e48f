//! Function wrappers.
//!
//! A [`Functor`] holds a function pointer of a statically known
//! [`Signature`], typically resolved by name from a [`SharedLibrary`]. An
//! unresolved wrapper is still a value: [`Functor::is_valid`] reports it and
//! [`Functor::call`] returns [`RuntimeError::InvalidFunctor`].
//!
//! [`SharedLibrary`]: crate::SharedLibrary

#![allow(unsafe_code, reason = "function pointers are rebuilt from symbol addresses")]

use std::any::type_name;
use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;

use crate::error::RuntimeError;

/// A function pointer type with a tuple argument list.
pub trait Signature: Copy + Send + Sync + 'static {
    /// Arguments as a tuple, e.g. `(i32, i32)`.
    type Args;
    type Output;

    fn invoke(self, args: Self::Args) -> Self::Output;

    /// Reinterpret a symbol address as this signature.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and point to a function with exactly this
    /// signature and calling convention.
    unsafe fn from_raw(ptr: *const c_void) -> Self;
}

macro_rules! impl_signature {
    ($($param:ident),*) => {
        impl_signature!(@abi fn($($param),*) -> R; $($param),*);
        impl_signature!(@abi extern "C" fn($($param),*) -> R; $($param),*);
    };
    (@abi $fn_ty:ty; $($param:ident),*) => {
        impl<R: 'static $(, $param: 'static)*> Signature for $fn_ty {
            type Args = ($($param,)*);
            type Output = R;

            #[allow(non_snake_case, reason = "bindings reuse the type parameter names")]
            fn invoke(self, ($($param,)*): Self::Args) -> R {
                self($($param),*)
            }

            unsafe fn from_raw(ptr: *const c_void) -> Self {
                // SAFETY: function pointers are pointer-sized; the caller
                // guarantees the signature.
                unsafe { std::mem::transmute_copy::<*const c_void, Self>(&ptr) }
            }
        }
    };
}

impl_signature!();
impl_signature!(A1);
impl_signature!(A1, A2);
impl_signature!(A1, A2, A3);
impl_signature!(A1, A2, A3, A4);
impl_signature!(A1, A2, A3, A4, A5);
impl_signature!(A1, A2, A3, A4, A5, A6);

/// A possibly unresolved function of signature `F`, valid while `'lib` is.
#[derive(Clone, Copy)]
pub struct Functor<'lib, F: Signature> {
    function: Option<F>,
    symbol: &'lib str,
    library: PhantomData<&'lib ()>,
}

impl<'lib, F: Signature> Functor<'lib, F> {
    /// Wrap a function that is already in hand.
    pub fn new(function: F) -> Self {
        Functor {
            function: Some(function),
            symbol: type_name::<F>(),
            library: PhantomData,
        }
    }

    /// A wrapper whose lookup of `symbol` failed.
    pub fn unresolved(symbol: &'lib str) -> Self {
        Functor {
            function: None,
            symbol,
            library: PhantomData,
        }
    }

    /// Wrap a raw symbol address; null yields an unresolved wrapper.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a function of signature `F` that stays
    /// loaded for `'lib`.
    pub unsafe fn from_raw(symbol: &'lib str, ptr: *const c_void) -> Self {
        if ptr.is_null() {
            return Self::unresolved(symbol);
        }
        Functor {
            // SAFETY: non-null and of signature `F` per the caller.
            function: Some(unsafe { F::from_raw(ptr) }),
            symbol,
            library: PhantomData,
        }
    }

    /// Whether a function was resolved.
    pub fn is_valid(&self) -> bool {
        self.function.is_some()
    }

    pub fn symbol(&self) -> &'lib str {
        self.symbol
    }

    /// Call the wrapped function.
    pub fn call(&self, args: F::Args) -> Result<F::Output, RuntimeError> {
        let function = self.function.ok_or_else(|| RuntimeError::InvalidFunctor {
            symbol: self.symbol.to_string(),
        })?;
        Ok(function.invoke(args))
    }
}

impl<F: Signature> fmt::Debug for Functor<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Functor")
            .field("symbol", &self.symbol)
            .field("valid", &self.is_valid())
            .finish()
    }
}

#[cfg(test)]
mod tests;
