//! Runtime errors.

/// Error raised by the extension runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The dynamic loader rejected the library.
    #[error("failed to open library `{path}`: {message}")]
    LibraryOpen { path: String, message: String },

    /// The dynamic loader failed to unload the library.
    #[error("failed to close library `{path}`: {message}")]
    LibraryClose { path: String, message: String },

    /// An operation needed an open library.
    #[error("library `{path}` is not open")]
    LibraryNotOpen { path: String },

    /// A function wrapper with no resolved function was invoked.
    #[error("function `{symbol}` is not resolved")]
    InvalidFunctor { symbol: String },

    /// Two different factory combinations were given the same descriptor.
    #[error("descriptor collision: container for `{descriptor}` has a different type")]
    DescriptorCollision { descriptor: String },
}

pub type Result<T, E = RuntimeError> = std::result::Result<T, E>;
