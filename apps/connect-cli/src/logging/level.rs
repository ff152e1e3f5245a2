//! Log level definitions for CLI verbose/debug output
//!
//! Levels are cumulative: Debug includes Verbose.

use std::fmt;

/// Verbosity level for CLI output
///
/// Levels are ordered: Normal < Verbose < Debug
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Warnings and errors only (default)
    #[default]
    Normal = 0,
    /// Progress messages for each operation
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
}

impl LogLevel {
    /// Create LogLevel from CLI flags
    ///
    /// Order of precedence: debug > verbose > normal
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this level enables verbose output
    pub fn is_verbose(&self) -> bool {
        *self >= Self::Verbose
    }

    /// Check if this level enables debug output
    pub fn is_debug(&self) -> bool {
        *self >= Self::Debug
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Normal => "warn",
            Self::Verbose => "warn,connect_cli=info",
            Self::Debug => "info,connect_cli=debug",
        }
    }

    /// Get the display name for this level
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Normal < LogLevel::Verbose);
        assert!(LogLevel::Verbose < LogLevel::Debug);
    }

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Verbose);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Debug);
    }

    #[test]
    fn test_is_verbose_and_debug() {
        assert!(!LogLevel::Normal.is_verbose());
        assert!(LogLevel::Verbose.is_verbose());
        assert!(!LogLevel::Verbose.is_debug());
        assert!(LogLevel::Debug.is_verbose());
        assert!(LogLevel::Debug.is_debug());
    }

    #[test]
    fn test_directives() {
        assert_eq!(LogLevel::Normal.directive(), "warn");
        assert!(LogLevel::Debug.directive().contains("connect_cli=debug"));
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Verbose), "VERBOSE");
        assert_eq!(LogLevel::default(), LogLevel::Normal);
    }
}
