#![allow(clippy::module_inception)]

use std::fmt::{self, Display, Formatter};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A 1-based line/column location in the source text.
///
/// Columns count decoded characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Renders a diagnostic with a caret under the offending column.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be Identifier, ...)
/// -> main.lm:1:5
///   |
/// 1 | let = 5;
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    ErrorExcerpt {
        error,
        source,
        file,
    }
    .to_string()
}

struct ErrorExcerpt<'a> {
    error: &'a Error,
    source: &'a str,
    file: &'a str,
}

impl Display for ErrorExcerpt<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let error = self.error;
        let position = error.get_position();

        if let ErrorTip::None = error.get_tip() {
            writeln!(f, "Error: {}", error.get_error_name())?;
        } else {
            writeln!(f, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
        }
        writeln!(f, "-> {}:{}", self.file, position)?;

        let Some(line_text) = get_line_at_position(self.source, position.line) else {
            return Ok(());
        };

        let line_string = position.line.to_string();
        let padding = line_string.len() + 2;
        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = (position.column as usize)
            .saturating_sub(removed_whitespace)
            .max(1);
        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
