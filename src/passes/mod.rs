mod code_syntax;
mod left_recursion;
mod references;
mod rules;
mod settings;

use crate::compiler::CompilePass;

/// The pass pipeline, in the order passes run. Diagnostic order in a
/// compile result follows this order, then emission order within a pass.
pub fn registry() -> Vec<Box<dyn CompilePass>> {
    vec![
        Box::new(rules::RuleCountPass),
        Box::new(rules::DuplicateRulesPass),
        Box::new(settings::SettingsPass),
        Box::new(references::ReferencesPass),
        Box::new(left_recursion::LeftRecursionPass),
        Box::new(code_syntax::CodeSyntaxPass),
    ]
}
