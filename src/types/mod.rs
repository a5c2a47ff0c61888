//! Range-checked configuration values.
//!
//! Values are validated when they are deserialized, so a loaded
//! [`Settings`](crate::config::Settings) never carries an indent or print
//! width the formatters would reject.

mod indent_size;
mod print_width;

pub use indent_size::IndentSize;
pub use print_width::PrintWidth;

/// A configuration value fell outside its accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{name} must be between {min} and {max}, got {value}")]
pub struct OutOfRange {
    pub name: &'static str,
    pub min: u16,
    pub max: u16,
    pub value: u16,
}
