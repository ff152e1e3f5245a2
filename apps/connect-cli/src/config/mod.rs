//! Configuration management for connect-cli

mod paths;
mod settings;

pub use paths::{ConfigPaths, CONFIG_DIR_ENV};
pub use settings::{Config, HOST_ENV, PORT_ENV};
