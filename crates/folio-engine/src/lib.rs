// Engine module - Pure computation over catalog data (queries, validation, greetings)
// This layer sits between core types and CLI presentation; no IO happens here

pub mod contact;
pub mod greeting;
pub mod query;

pub use contact::{validate, ContactField, ContactMessage, FieldError};
pub use greeting::{greeting_line, time_greeting};
pub use query::{evaluate, CategoryFilter, QueryParams, SortOrder};
