//! Extension Header Generator CLI
//!
//! Library half of the `extgen` binary: argument parsing, the generate
//! command and tracing setup live here so they can be tested directly.

use std::sync::Once;

pub mod commands;
mod error;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per process.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let default = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .with(filter)
            .init();
    });
}
