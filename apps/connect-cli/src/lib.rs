//! connect-cli library
//!
//! Administration client for a Kafka Connect control plane. The binary in
//! `main.rs` is a thin clap front end over these modules.

pub mod actions;
pub mod api;
pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod output;
pub mod validation;

pub use error::{CliError, CliResult};
