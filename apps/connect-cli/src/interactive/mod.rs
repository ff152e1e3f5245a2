//! Interactive mode for building connector documents.

pub mod builder;
pub mod prompts;

pub use builder::InteractiveBuilder;
pub use prompts::*;
