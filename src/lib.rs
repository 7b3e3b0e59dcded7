#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Returns the 1-based `line` of `source` without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}


pub fn display_error<W: Write>(error: &Error, source: &str, out: &mut W) -> io::Result<()> {
    /*
        Error near line 20: Unexpected character.
            |
         20 | var a = #;
            = Found `#`
    */

    writeln!(out, "{}", error)?;

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 3;

    let excerpt = get_line(source, error.get_line())
        .map(str::trim)
        .filter(|text| !text.is_empty());

    if let Some(line_text) = excerpt {
        writeln!(out, "{:>padding$}", "|")?;
        writeln!(out, " {} | {}", line_string, line_text)?;
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        writeln!(out, "{:>padding$} {}", "=", tip)?;
    }

    Ok(())
}
