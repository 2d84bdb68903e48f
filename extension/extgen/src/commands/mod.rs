//! Command handlers for the `extgen` CLI.

mod generate;
mod options;

pub use generate::run_generate;
pub use options::{parse_args, GenerateOptions, Invocation, DEFAULT_OUT_DIR};

/// Help text.
pub const USAGE: &str = "\
Usage: extgen [MAX_PARAMS] [options]

Generates the extension headers for call arities 0..=MAX_PARAMS (default 6).

Options:
  --out-dir=<dir>       Output directory (default: boost/extension)
  --namespace=<a::b>    Namespace of the declarations (default: boost::extensions)
  --include-dir=<a/b>   Include path of sibling headers (default: boost/extension)
  --only=<artifact>     Generate one artifact; repeatable. One of: factory,
                        counted-factory, shared-library, factory-map,
                        counted-factory-map
  --stdout              Print headers instead of writing files
  --no-license          Omit the license banner
  -v, --verbose         Debug logging (RUST_LOG overrides)
  -h, --help            Show this help";
