//! Compiler diagnostics. Error numbers are a stable public contract and
//! must never be renumbered.

use std::fmt;

use crate::ast::Cursor;

/// No rules defined in the grammar.
pub const PEG0001: &str = "PEG0001";
/// A rule name is defined more than once.
pub const PEG0002: &str = "PEG0002";
/// A rule reference does not resolve to any rule.
pub const PEG0003: &str = "PEG0003";
/// A rule can invoke itself without first consuming input.
pub const PEG0004: &str = "PEG0004";
/// A setting key appears more than once.
pub const PEG0005: &str = "PEG0005";
/// A setting key is not recognized (warning).
pub const PEG0006: &str = "PEG0006";
/// Leftover characters after an embedded code expression.
pub const RS1026: &str = "RS1026";

/// A single diagnostic. Created once per detected condition and never
/// mutated afterwards.
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct CompilerError {
    pub file_name: String,
    pub line: usize,
    pub column: usize,
    pub error_number: String,
    pub message: String,
    pub is_warning: bool,
}

impl CompilerError {
    pub fn error(cursor: &Cursor, error_number: &str, message: String) -> Self {
        CompilerError {
            file_name: cursor.file_name.clone(),
            line: cursor.line,
            column: cursor.column,
            error_number: error_number.to_owned(),
            message,
            is_warning: false,
        }
    }

    pub fn warning(cursor: &Cursor, error_number: &str, message: String) -> Self {
        CompilerError {
            is_warning: true,
            ..CompilerError::error(cursor, error_number, message)
        }
    }
}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({},{}): {} {}: {}",
            self.file_name,
            self.line,
            self.column,
            if self.is_warning { "warning" } else { "error" },
            self.error_number,
            self.message,
        )
    }
}

/// The outcome of one compilation: the generated parser source, if
/// emission was not blocked, plus every diagnostic in pass order.
#[derive(Clone, Debug, Default)]
pub struct CompileResult {
    pub code: Option<String>,
    pub errors: Vec<CompilerError>,
}

impl CompileResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any diagnostic is an actual error. Warnings never block
    /// code generation.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|err| !err.is_warning)
    }

    /// True when a diagnostic with the given error number was recorded.
    pub fn has_error_number(&self, error_number: &str) -> bool {
        self.errors.iter().any(|err| err.error_number == error_number)
    }
}
