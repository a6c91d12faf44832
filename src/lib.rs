//! # Value Dispatch
//!
//! Three ways to hold "one of several things" and act on it:
//!
//! 1. **Nullable Values** (`optional`)
//!    - `Option<i32>` with a value-or-default accessor
//!    - Absence is a normal case, not an error
//!
//! 2. **Type Erasure** (`erased`)
//!    - `ErasedValue` wraps `Box<dyn Any>` and remembers its type name
//!    - Safe downcasting that reports a bad cast as a typed error
//!    - Unsupported runtime types rejected with `DispatchError::UnsupportedType`
//!
//! 3. **Closed-Set Variants** (`variant`)
//!    - `Variant` enum with a `Visitor` trait
//!    - Exhaustive matching, so a new alternative is a compile error
//!
//! `dispatch::process` is the single entry point over all three, and
//! `suite::run` checks them end to end.
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_optional
//! cargo run --example p2_erased
//! cargo run --example p3_variant
//!
//! # Suite runner, optionally with a TOML config
//! cargo run --bin dispatch_suite -- dispatch.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the error types
//! - `serde` / `toml` - Configuration loading
//! - `tracing` - Dispatch events
//! - `colored` - Suite report output

pub mod config;
pub mod dispatch;
pub mod erased;
pub mod error;
pub mod optional;
pub mod suite;
pub mod variant;

pub use config::{DispatchConfig, Labels};
pub use dispatch::{process, Dispatcher, Process};
pub use erased::{describe, describe_with, ErasedValue};
pub use error::{ConfigError, DispatchError, ErrorKind, Result};
pub use optional::{process_optional, process_optional_or, DEFAULT_VALUE};
pub use suite::{SuiteReport, SUITE_NAME};
pub use variant::{apply_visitor, process_variant, LengthVisitor, Variant, Visitor};
