//! Compiler front end for parsing expression grammars. Takes a grammar
//! AST built by a textual parser, runs an ordered sequence of analysis
//! passes over it (rule counts, duplicates, reference resolution,
//! setting validation, left recursion, embedded code syntax) and
//! produces a [`CompileResult`] holding every diagnostic found, plus the
//! generated parser source when nothing blocked emission.

pub mod ast;
mod code;
mod compiler;
mod error;
mod passes;

pub use code::{CodeChecker, CodeDiagnostic, RustChecker, SyntaxCheck, RS0001};
pub use compiler::{CodeEmitter, CompilePass, PegCompiler};
pub use error::{CompileResult, CompilerError};
pub use error::{PEG0001, PEG0002, PEG0003, PEG0004, PEG0005, PEG0006, RS1026};

/// Compile a grammar with the default pipeline: the full pass registry,
/// the Rust snippet checker and no emitter.
pub fn compile(grammar: &ast::Grammar) -> CompileResult {
    PegCompiler::new().compile(grammar)
}
