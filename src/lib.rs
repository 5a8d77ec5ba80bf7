//! Restamp - post-build configuration injection for compiled web builds
//!
//! Restamp is a single-binary deployment tool for server-rendered status-page
//! builds. A "placeholder build" is compiled once with a fixed sentinel
//! configuration baked into its bundles; at container start, restamp rewrites
//! every artifact embedding either serialized form of that sentinel so one
//! build artifact can be re-parameterized per deployment without rebuilding.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Orchestrates the Scan -> Rewrite -> Verify -> Persist lifecycle
//! - [`core`] - Serialization dialects, placeholder registry, settings, paths, run lock
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Restamp maintains the following invariants:
//!
//! 1. Serialized configuration forms are byte-stable, so exact-substring
//!    matching against compiled text is sound
//! 2. A file is persisted only after the rewritten content is verified to
//!    contain the replacement configuration
//! 3. Per-file failures are aggregated into the run summary; only a failure
//!    to read or parse the deployment configuration aborts a run

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
