//! Process exit statuses for the `fencefmt` binary.
//!
//! `fmt --check` is the only command that reports "would change" through its
//! status; every command uses [`TOOL_ERROR`] for bad input or configuration.

/// The document was processed, or `--check` found nothing to reformat.
pub const SUCCESS: i32 = 0;

/// `--check` found code blocks whose formatted body differs.
pub const WOULD_REFORMAT: i32 = 1;

/// Unreadable document, invalid configuration or a refused `init`.
pub const TOOL_ERROR: i32 = 2;

pub mod exit {
    use super::{SUCCESS, TOOL_ERROR, WOULD_REFORMAT};

    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    pub fn would_reformat() -> ! {
        std::process::exit(WOULD_REFORMAT);
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
