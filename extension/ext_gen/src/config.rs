//! Generator configuration.
//!
//! The only semantic knob is `max_params`; the remaining fields control how
//! the emitted headers are framed (namespace, include paths, license banner).

use std::num::{IntErrorKind, ParseIntError};

use crate::GenError;

/// Default maximum call arity.
pub const DEFAULT_MAX_PARAMS: usize = 6;

/// Largest `max_params` the generator accepts.
pub const MAX_SUPPORTED_PARAMS: usize = 64;

/// Configuration for a header generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum supported call arity; blocks are emitted for `0..=max_params`.
    pub max_params: usize,
    /// Namespace path the declarations are emitted into, outermost first.
    pub namespace: Vec<String>,
    /// Include directory of the generated headers (`/`-separated).
    pub include_dir: String,
    /// Whether to emit the license banner at the top of each header.
    pub license_header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
            namespace: vec!["boost".to_string(), "extensions".to_string()],
            include_dir: "boost/extension".to_string(),
            license_header: true,
        }
    }
}

impl GeneratorConfig {
    /// Set the maximum call arity.
    #[must_use]
    pub fn with_max_params(mut self, max_params: usize) -> Self {
        self.max_params = max_params;
        self
    }

    /// Set the namespace from a `a::b::c` path.
    #[must_use]
    pub fn with_namespace(mut self, path: &str) -> Self {
        self.namespace = path
            .split("::")
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// Parse a textual `max_params` value.
    ///
    /// Rejects negative and non-integral input as well as values above
    /// [`MAX_SUPPORTED_PARAMS`].
    pub fn parse_max_params(input: &str) -> Result<usize, GenError> {
        let trimmed = input.trim();
        let invalid = |reason| GenError::InvalidMaxParams {
            input: input.to_string(),
            reason,
        };

        let value: i64 = trimmed.parse().map_err(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => invalid("out of range"),
            _ => invalid("not an integer"),
        })?;
        if value < 0 {
            return Err(invalid("must not be negative"));
        }
        let value = usize::try_from(value).map_err(|_| invalid("out of range"))?;
        if value > MAX_SUPPORTED_PARAMS {
            return Err(GenError::TooManyParams {
                value,
                limit: MAX_SUPPORTED_PARAMS,
            });
        }
        Ok(value)
    }

    /// Check the configuration before any emission happens.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.max_params > MAX_SUPPORTED_PARAMS {
            return Err(GenError::TooManyParams {
                value: self.max_params,
                limit: MAX_SUPPORTED_PARAMS,
            });
        }
        if self.namespace.is_empty() {
            return Err(GenError::EmptyNamespace);
        }
        for segment in &self.namespace {
            if !is_identifier(segment) {
                return Err(GenError::InvalidIdentifier {
                    what: "namespace segment",
                    value: segment.clone(),
                });
            }
        }
        if self.include_dir.is_empty() || !self.include_dir.split('/').all(is_identifier) {
            return Err(GenError::InvalidIdentifier {
                what: "include directory",
                value: self.include_dir.clone(),
            });
        }
        Ok(())
    }

    /// Include-guard prefix derived from the include directory.
    ///
    /// `boost/extension` becomes `BOOST_EXTENSION_`.
    pub fn guard_prefix(&self) -> String {
        let mut prefix = String::with_capacity(self.include_dir.len() + 1);
        for c in self.include_dir.chars() {
            if c.is_ascii_alphanumeric() {
                prefix.push(c.to_ascii_uppercase());
            } else {
                prefix.push('_');
            }
        }
        prefix.push('_');
        prefix
    }

    /// Path of a sibling header under the include directory.
    pub fn include_path(&self, file: &str) -> String {
        format!("{}/{file}", self.include_dir)
    }
}

/// Whether `s` is a plain C++ identifier.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap expected errors")]
mod tests;
