//! Arity-Expanded Header Generator
//!
//! Generates the C++ headers of the extension library from a single
//! `max_params` setting. Each header repeats one structural skeleton for
//! every call arity in `0..=max_params`:
//!
//! | Header | Blocks | Order |
//! |--------|--------|-------|
//! | `factory.hpp` | `factory` | descending |
//! | `counted_factory.hpp` | `counted_factory` | descending |
//! | `shared_library.hpp` | `functor`, then `get_functor` accessors | descending, ascending |
//! | `factory_map.hpp` | `get`/`add` operations | ascending |
//! | `counted_factory_map.hpp` | `get`/`add` operations | ascending |
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig ──validate──▶ HeaderGenerator
//!                                  │
//!          ┌───────────────────────┼───────────────────────┐
//!          ▼                       ▼                       ▼
//!  skeleton (fragments)      functor              factory_map (fragments)
//!          │                       │                       │
//!          └──── arity loop ──▶ params views ──▶ EmitContext
//! ```

mod arity;
mod artifact;
mod config;
mod context;
mod error;
pub mod factory_map;
mod frame;
pub mod functor;
mod generator;
pub mod params;
pub mod skeleton;

pub use arity::{emit_blocks, render_blocks, Arity, ArityOrder};
pub use artifact::Artifact;
pub use config::{GeneratorConfig, DEFAULT_MAX_PARAMS, MAX_SUPPORTED_PARAMS};
pub use context::EmitContext;
pub use error::GenError;
pub use frame::{guard_name, Include};
pub use generator::{GeneratedHeader, HeaderGenerator};
pub use params::{instantiate, ParamList, Slot};
