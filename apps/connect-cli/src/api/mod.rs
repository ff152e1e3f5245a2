//! API client modules for the Connect REST API

mod client;
mod connectors;
mod plugins;

pub use client::ApiClient;
