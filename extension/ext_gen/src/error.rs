//! Generator errors.
//!
//! Every error here is a configuration error: it is raised before any
//! emission starts, and a run that hits one produces no output at all.

/// Error raised while configuring the header generator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    /// `max_params` text was negative, non-integral or out of range.
    #[error("invalid max_params `{input}`: {reason}")]
    InvalidMaxParams { input: String, reason: &'static str },

    /// `max_params` exceeds what the generator supports.
    #[error("max_params {value} exceeds the supported maximum of {limit}")]
    TooManyParams { value: usize, limit: usize },

    /// The configured namespace has no segments.
    #[error("namespace must have at least one segment")]
    EmptyNamespace,

    /// A namespace segment or include directory is not usable in C++.
    #[error("invalid {what} `{value}`")]
    InvalidIdentifier { what: &'static str, value: String },
}
