use std::collections::BTreeSet;

use crate::ast::{Expression, Grammar};
use crate::compiler::{CompilePass, PegCompiler};
use crate::error::{CompileResult, CompilerError, PEG0003};

/// Every rule reference must resolve, by exact name match, to a rule
/// defined in the grammar.
pub struct ReferencesPass;

impl CompilePass for ReferencesPass {
    fn errors_produced(&self) -> &'static [&'static str] {
        &[PEG0003]
    }

    fn blocked_by(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, _compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult) {
        let defined: BTreeSet<&str> = grammar
            .rules
            .iter()
            .map(|rule| rule.name.name.as_str())
            .collect();

        for rule in &grammar.rules {
            check_expr(&rule.expression, &defined, result);
        }
    }
}

fn check_expr(expr: &Expression, defined: &BTreeSet<&str>, result: &mut CompileResult) {
    match expr {
        Expression::Name(id) => {
            if !defined.contains(id.name.as_str()) {
                result.errors.push(CompilerError::error(
                    &id.start,
                    PEG0003,
                    format!("The rule '{}' is not defined.", id.name),
                ));
            }
        }
        Expression::Sequence(list) | Expression::Choice(list) => {
            for expr in list {
                check_expr(expr, defined, result);
            }
        }
        Expression::Repetition {
            expression,
            quantifier,
        } => {
            check_expr(expression, defined, result);

            if let Some(delimiter) = &quantifier.delimiter {
                check_expr(delimiter, defined, result);
            }
        }
        Expression::And(expr) | Expression::Not(expr) => {
            check_expr(expr, defined, result);
        }
        Expression::Literal { .. }
        | Expression::Code(_)
        | Expression::Wildcard
        | Expression::Class(_) => (),
    }
}
