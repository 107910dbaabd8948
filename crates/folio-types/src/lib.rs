pub mod project;
pub mod theme;

pub use project::*;
pub use theme::*;
