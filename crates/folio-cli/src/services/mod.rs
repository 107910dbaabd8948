pub mod quote;

pub use quote::QuoteClient;
