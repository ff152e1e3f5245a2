//! Batch operations over all connectors

pub mod progress;
pub mod result;
pub mod runner;

pub use result::{BatchItemResult, BatchItemStatus, BatchResult};
pub use runner::{install_interrupt_handler, BatchRunner, CancelFlag};
