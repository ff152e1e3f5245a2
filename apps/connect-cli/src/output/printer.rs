//! Terminal output helpers for consistent CLI formatting
//!
//! Results go to stdout as pretty-printed JSON; status lines go to stderr so
//! the JSON stays machine-readable.

use crate::batch::BatchResult;
use crate::error::CliResult;
use serde::Serialize;

/// Check if color output is enabled
fn use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Render a value as pretty-printed JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

/// Print a value to stdout as pretty-printed JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

/// Print a success message (green checkmark)
pub fn print_success(message: &str) {
    if use_color() {
        eprintln!("\x1b[32m✓\x1b[0m {}", message);
    } else {
        eprintln!("OK: {}", message);
    }
}

/// Print a warning message (yellow)
pub fn print_warning(message: &str) {
    if use_color() {
        eprintln!("\x1b[33mWarning:\x1b[0m {}", message);
    } else {
        eprintln!("Warning: {}", message);
    }
}

/// Report every failed item of a batch on stderr
pub fn print_batch_failures(result: &BatchResult) {
    for item in result.failed_items() {
        print_warning(&format!(
            "{}: {}",
            item.name,
            item.error.as_deref().unwrap_or("unknown error")
        ));
    }
    if result.interrupted {
        print_warning(&format!(
            "{} stopped early; {} connector(s) not attempted",
            result.operation, result.skipped_count
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_use_color_respects_no_color() {
        let had_no_color = std::env::var("NO_COLOR").is_ok();

        std::env::set_var("NO_COLOR", "1");
        assert!(!use_color());

        std::env::remove_var("NO_COLOR");
        assert!(use_color());

        if had_no_color {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    #[test]
    fn test_to_pretty_json_indents() {
        let rendered = to_pretty_json(&json!(["c1", "c2"])).unwrap();
        assert_eq!(rendered, "[\n  \"c1\",\n  \"c2\"\n]");
    }
}
