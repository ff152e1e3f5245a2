//! Terminal output helpers

mod printer;

pub use printer::{print_batch_failures, print_json, print_success, print_warning, to_pretty_json};
