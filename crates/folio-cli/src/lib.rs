// NOTE: folio Architecture
//
// Why a pure query engine (not filtering inside handlers)?
// - Category, search, and sort rules live in one tested place
// - Handlers reduce to building QueryParams and presenting the result
// - Plain and JSON output always agree on the sequence they show
//
// Why SQLite for two preferences (not a flat file)?
// - Preference reads must never break rendering; the store reads fall
//   back to defaults on any failure
// - New keys need no migration, the kv table is schema-free
// - config.toml stays human-edited, the store stays machine-written

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
pub mod services;

pub use args::{Cli, Commands, NameCommand, ProjectCommand, ThemeCommand};
pub use commands::run;
