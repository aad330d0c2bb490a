//! Output verbosity for CLI commands
//!
//! Verbosity is an explicit value threaded through the commands that need
//! it, never process-global state. Levels are cumulative: Debug includes
//! Verbose.

use std::fmt;

/// Verbosity level derived from repeated `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Standard CLI output only (default)
    #[default]
    Normal = 0,
    /// Progress notes for each operation
    Verbose = 1,
    /// Remote-state dumps and skip reasons
    Debug = 2,
}

impl Verbosity {
    /// Map a `-v` occurrence count to a level (`-vv` and above is Debug)
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
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
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_count(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_count(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_count(5), Verbosity::Debug);
    }

    #[test]
    fn test_levels_are_cumulative() {
        assert!(!Verbosity::Normal.is_verbose());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(!Verbosity::Verbose.is_debug());
        assert!(Verbosity::Debug.is_verbose());
        assert!(Verbosity::Debug.is_debug());
    }
}
