//! Syntax checking of embedded code snippets. Each snippet eventually
//! lands inside the generated parser as either a closure body expression
//! or a closure body block, so it is wrapped in the matching synthetic
//! closure and handed to the injected checker, and the checker's
//! diagnostics are mapped back onto the snippet's own source span.

use crate::ast::{CodeExpression, CodeKind, Expression, Grammar};
use crate::compiler::{CompilePass, PegCompiler};
use crate::error::{CompileResult, CompilerError, RS1026};

pub struct CodeSyntaxPass;

impl CompilePass for CodeSyntaxPass {
    fn errors_produced(&self) -> &'static [&'static str] {
        &[crate::code::RS0001, RS1026]
    }

    fn blocked_by(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult) {
        for rule in &grammar.rules {
            walk_expr(&rule.expression, compiler, result);
        }
    }
}

fn walk_expr(expr: &Expression, compiler: &PegCompiler, result: &mut CompileResult) {
    match expr {
        Expression::Code(code) => check_code(code, compiler, result),
        Expression::Sequence(list) | Expression::Choice(list) => {
            for expr in list {
                walk_expr(expr, compiler, result);
            }
        }
        Expression::Repetition {
            expression,
            quantifier,
        } => {
            walk_expr(expression, compiler, result);

            if let Some(delimiter) = &quantifier.delimiter {
                walk_expr(delimiter, compiler, result);
            }
        }
        Expression::And(expr) | Expression::Not(expr) => {
            walk_expr(expr, compiler, result);
        }
        Expression::Literal { .. }
        | Expression::Name(_)
        | Expression::Wildcard
        | Expression::Class(_) => (),
    }
}

fn check_code(code: &CodeExpression, compiler: &PegCompiler, result: &mut CompileResult) {
    let (prefix, suffix) = match code.kind {
        // kinds that must be a single expression
        CodeKind::Result | CodeKind::Error => ("|state| ", ""),
        CodeKind::Action | CodeKind::State => ("|state| {", "}"),
    };

    let wrapped = format!("{}{}{}", prefix, code.span.code, suffix);
    let wrapped = wrapped.trim_end();

    let checked = compiler.checker().check(wrapped);

    for diag in &checked.diagnostics {
        // offsets inside the synthetic prefix clamp to the snippet start
        let cursor = code
            .span
            .start
            .advanced(&code.span.code, diag.offset.saturating_sub(prefix.len()));

        result.errors.push(CompilerError {
            file_name: cursor.file_name,
            line: cursor.line,
            column: cursor.column,
            error_number: diag.code.clone(),
            message: diag.message.clone(),
            is_warning: diag.is_warning,
        });
    }

    if checked.consumed < wrapped.len() {
        let sliced = &wrapped[checked.consumed..];
        let trimmed = sliced.trim_start();

        if let Some(unexpected) = trimmed.chars().next() {
            let offset = checked.consumed + (sliced.len() - trimmed.len());
            let cursor = code
                .span
                .start
                .advanced(&code.span.code, offset.saturating_sub(prefix.len()));

            result.errors.push(CompilerError::error(
                &cursor,
                RS1026,
                format!("Unexpected character '{}' after code expression.", unexpected),
            ));
        }
    }
}
