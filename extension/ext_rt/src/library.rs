//! Shared libraries.
//!
//! [`SharedLibrary`] names a dynamic library on disk and opens it on request
//! through `libloading`. Functions are resolved into [`Functor`]s that borrow
//! the library, so it cannot be closed while any of them is alive.
//!
//! A library that was not opened with `auto_close` stays loaded after the
//! handle is dropped: objects built by its factories may still be running
//! its code.

#![allow(unsafe_code, reason = "loading libraries and resolving symbols is FFI")]

use std::ffi::c_void;
use std::fmt;
use std::mem;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::debug;

use crate::error::{Result, RuntimeError};
use crate::functor::{Functor, Signature};

/// File extensions recognised as dynamic libraries.
const LIBRARY_EXTENSIONS: [&str; 4] = ["so", "dylib", "dll", "bundle"];

/// A dynamic library at a fixed location.
pub struct SharedLibrary {
    location: PathBuf,
    handle: Option<Library>,
    auto_close: bool,
}

impl SharedLibrary {
    /// Handle for the library at `location`; nothing is loaded yet.
    pub fn new(location: impl Into<PathBuf>, auto_close: bool) -> Self {
        SharedLibrary {
            location: location.into(),
            handle: None,
            auto_close,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether `file_name` looks like a dynamic library (`.so`, `.so.N`,
    /// `.dylib`, `.dll`, `.bundle`).
    pub fn is_linkable_library(file_name: impl AsRef<Path>) -> bool {
        let path = file_name.as_ref();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        let mut parts = name.split('.');
        if parts.next().unwrap_or_default().is_empty() {
            return false;
        }
        let Some(first) = parts.next() else {
            return false;
        };
        // libfoo.so.1.2
        if first == "so"
            && parts.all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                LIBRARY_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    /// Load the library. Opening an open library is a no-op.
    pub fn open(&mut self) -> Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }
        // SAFETY: loading runs the library's initialisers; callers choose
        // which libraries to trust.
        let library = unsafe { Library::new(&self.location) }.map_err(|err| {
            RuntimeError::LibraryOpen {
                path: self.location.display().to_string(),
                message: err.to_string(),
            }
        })?;
        debug!(path = %self.location.display(), "opened shared library");
        self.handle = Some(library);
        Ok(())
    }

    /// Unload the library.
    pub fn close(&mut self) -> Result<()> {
        let library = self.handle.take().ok_or_else(|| self.not_open())?;
        library.close().map_err(|err| RuntimeError::LibraryClose {
            path: self.location.display().to_string(),
            message: err.to_string(),
        })?;
        debug!(path = %self.location.display(), "closed shared library");
        Ok(())
    }

    /// Resolve `name` as a function of signature `F`.
    ///
    /// Missing symbols and closed libraries yield an unresolved wrapper.
    ///
    /// # Safety
    ///
    /// If the symbol exists it must be a function of signature `F`.
    pub unsafe fn get_functor<'lib, F: Signature>(
        &'lib self,
        name: &'lib str,
    ) -> Functor<'lib, F> {
        let Some(library) = &self.handle else {
            debug!(symbol = name, path = %self.location.display(), "library not open");
            return Functor::unresolved(name);
        };
        // SAFETY: the address is only reinterpreted as `F` below, which the
        // caller vouches for.
        match unsafe { library.get::<*const c_void>(name.as_bytes()) } {
            Ok(symbol) => unsafe { Functor::from_raw(name, *symbol) },
            Err(err) => {
                debug!(symbol = name, error = %err, "symbol not found");
                Functor::unresolved(name)
            }
        }
    }

    fn not_open(&self) -> RuntimeError {
        RuntimeError::LibraryNotOpen {
            path: self.location.display().to_string(),
        }
    }
}

impl Drop for SharedLibrary {
    fn drop(&mut self) {
        if let Some(library) = self.handle.take() {
            if self.auto_close {
                drop(library);
            } else {
                mem::forget(library);
            }
        }
    }
}

impl fmt::Debug for SharedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLibrary")
            .field("location", &self.location)
            .field("open", &self.is_open())
            .field("auto_close", &self.auto_close)
            .finish()
    }
}
