use std::collections::HashSet;

use crate::ast::Grammar;
use crate::compiler::{CompilePass, PegCompiler};
use crate::error::{CompileResult, CompilerError, PEG0005, PEG0006};

/// The closed set of setting keys the compiler understands. Anything
/// outside this list is ignored downstream, so it only warrants a
/// warning.
const KNOWN_SETTINGS: &[&str] = &[
    "namespace",
    "classname",
    "accessibility",
    "using",
    "members",
    "start",
];

pub struct SettingsPass;

impl CompilePass for SettingsPass {
    fn errors_produced(&self) -> &'static [&'static str] {
        &[PEG0005, PEG0006]
    }

    fn blocked_by(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, _compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult) {
        let mut seen = HashSet::new();

        for setting in &grammar.settings {
            let key = setting.key.name.as_str();

            if !seen.insert(key) {
                result.errors.push(CompilerError::error(
                    &setting.key.start,
                    PEG0005,
                    format!("The setting '{}' is already specified.", key),
                ));
            } else if !KNOWN_SETTINGS.contains(&key) {
                result.errors.push(CompilerError::warning(
                    &setting.key.start,
                    PEG0006,
                    format!("The setting '{}' is not recognized and will be ignored.", key),
                ));
            }
        }
    }
}
