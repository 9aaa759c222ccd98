use std::collections::HashSet;

use crate::ast::{Cursor, Grammar};
use crate::compiler::{CompilePass, PegCompiler};
use crate::error::{CompileResult, CompilerError, PEG0001, PEG0002};

/// A grammar with no rules at all cannot be compiled into anything.
pub struct RuleCountPass;

impl CompilePass for RuleCountPass {
    fn errors_produced(&self) -> &'static [&'static str] {
        &[PEG0001]
    }

    fn blocked_by(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, _compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult) {
        if grammar.rules.is_empty() {
            // an empty grammar has no span to point at
            result.errors.push(CompilerError::error(
                &Cursor::default(),
                PEG0001,
                String::from("A grammar must have at least one rule."),
            ));
        }
    }
}

/// Reports every occurrence of a rule name after the first. Later passes
/// treat the first occurrence as authoritative.
pub struct DuplicateRulesPass;

impl CompilePass for DuplicateRulesPass {
    fn errors_produced(&self) -> &'static [&'static str] {
        &[PEG0002]
    }

    fn blocked_by(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, _compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult) {
        let mut seen = HashSet::new();

        for rule in &grammar.rules {
            if !seen.insert(rule.name.name.as_str()) {
                result.errors.push(CompilerError::error(
                    &rule.name.start,
                    PEG0002,
                    format!("The rule '{}' is already defined.", rule.name.name),
                ));
            }
        }
    }
}
