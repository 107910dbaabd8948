//! # Presentation Layer
//!
//! Display-only types for the CLI. Handlers build a view from engine
//! output and print it; views hold the data plus a `colored` switch and
//! do all layout in their `Display` impls.
//!
//! JSON output never goes through this layer. Handlers serialize the
//! engine's data directly, so `--format json` stays stable when the
//! plain layout changes.

pub mod formatters;
