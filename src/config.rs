//! Driver constants.
//!
//! Exit codes follow the BSD `sysexits.h` values.

/// Language name
pub const LANG_NAME: &str = "lox";

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interactive prompt
pub const PROMPT: &str = "> ";

/// Printed when the prompt receives an empty line
pub const QUIT_MESSAGE: &str = "Quitting...";

pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATA_ERROR: i32 = 65;
pub const EXIT_NO_INPUT: i32 = 66;
