//! The pass scheduler. Passes run in a fixed order; each declares which
//! error numbers block it, and a blocked pass is skipped entirely rather
//! than run against a grammar it cannot reason about.

use crate::ast::Grammar;
use crate::code::{CodeChecker, RustChecker};
use crate::error::CompileResult;
use crate::passes;

/// One analysis pass over a grammar.
pub trait CompilePass {
    /// The error numbers this pass may record.
    fn errors_produced(&self) -> &'static [&'static str];

    /// Error numbers which, when already recorded, cause this pass to be
    /// skipped.
    fn blocked_by(&self) -> &'static [&'static str];

    fn run(&self, compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult);
}

/// The out of scope code emitter, injected by the surrounding pipeline.
/// Invoked only when no pass recorded an actual error.
pub trait CodeEmitter {
    fn emit(&self, grammar: &Grammar) -> String;
}

pub struct PegCompiler {
    passes: Vec<Box<dyn CompilePass>>,
    checker: Box<dyn CodeChecker>,
    emitter: Option<Box<dyn CodeEmitter>>,
}

impl Default for PegCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl PegCompiler {
    pub fn new() -> Self {
        PegCompiler {
            passes: passes::registry(),
            checker: Box::new(RustChecker),
            emitter: None,
        }
    }

    /// Replace the foreign code checker, for other output languages or
    /// for tests running with a stub.
    pub fn with_checker(mut self, checker: Box<dyn CodeChecker>) -> Self {
        self.checker = checker;
        self
    }

    pub fn with_emitter(mut self, emitter: Box<dyn CodeEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub(crate) fn checker(&self) -> &dyn CodeChecker {
        self.checker.as_ref()
    }

    /// Run every unblocked pass over the grammar, then hand the grammar
    /// to the emitter unless an error was recorded.
    pub fn compile(&self, grammar: &Grammar) -> CompileResult {
        let mut result = CompileResult::new();

        for pass in &self.passes {
            let blocked = pass
                .blocked_by()
                .iter()
                .any(|number| result.has_error_number(number));

            if !blocked {
                pass.run(self, grammar, &mut result);
            }
        }

        if !result.has_errors() {
            if let Some(emitter) = &self.emitter {
                result.code = Some(emitter.emit(grammar));
            }
        }

        result
    }
}
