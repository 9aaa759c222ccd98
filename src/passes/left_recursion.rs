//! Left recursion detection. A rule that can invoke itself at the input
//! position it started at, before consuming anything, would regress
//! forever in a recursive descent parser, so it is rejected outright.
//!
//! Detection runs in two phases. A structural phase computes, per rule,
//! whether its expression is nullable and which rules it can invoke at
//! its own start position. A graph phase then looks for cycles among
//! those zero width invocation edges.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::ast::{Expression, Grammar, Rule};
use crate::compiler::{CompilePass, PegCompiler};
use crate::error::{CompileResult, CompilerError, PEG0001, PEG0003, PEG0004};

pub struct LeftRecursionPass;

impl CompilePass for LeftRecursionPass {
    fn errors_produced(&self) -> &'static [&'static str] {
        &[PEG0004]
    }

    // The zero width graph is only meaningful once every reference
    // resolves; an empty grammar has nothing to analyse.
    fn blocked_by(&self) -> &'static [&'static str] {
        &[PEG0001, PEG0003]
    }

    fn run(&self, _compiler: &PegCompiler, grammar: &Grammar, result: &mut CompileResult) {
        // the first occurrence of a name is authoritative when the
        // grammar contains duplicates
        let mut rules: BTreeMap<&str, &Rule> = BTreeMap::new();

        for rule in &grammar.rules {
            rules.entry(rule.name.name.as_str()).or_insert(rule);
        }

        let nullable = nullable_rules(&rules);

        let graph: BTreeMap<&str, BTreeSet<&str>> = rules
            .iter()
            .map(|(name, rule)| (*name, zero_width_refs(&rule.expression, &nullable)))
            .collect();

        // Depth first search with an on-stack set. Every rule is a
        // starting point, since the generated parser exposes every rule;
        // a back edge means the on-stack rule is the entry of a cycle,
        // reported once.
        let mut visited = HashSet::new();
        let mut reported = HashSet::new();

        for rule in &grammar.rules {
            let mut stack = Vec::new();

            visit(
                rule.name.name.as_str(),
                &graph,
                &mut visited,
                &mut stack,
                &mut reported,
            );
        }

        for rule in &grammar.rules {
            if reported.remove(rule.name.name.as_str()) {
                result.errors.push(CompilerError::error(
                    &rule.name.start,
                    PEG0004,
                    format!("The rule '{}' is left recursive.", rule.name.name),
                ));
            }
        }
    }
}

fn visit<'g>(
    name: &'g str,
    graph: &BTreeMap<&'g str, BTreeSet<&'g str>>,
    visited: &mut HashSet<&'g str>,
    stack: &mut Vec<&'g str>,
    reported: &mut HashSet<&'g str>,
) {
    if stack.contains(&name) {
        reported.insert(name);
        return;
    }

    if !visited.insert(name) {
        return;
    }

    stack.push(name);

    if let Some(targets) = graph.get(name) {
        for target in targets {
            visit(target, graph, visited, stack, reported);
        }
    }

    stack.pop();
}

/// Computes which rules can match the empty input, as a monotone
/// fixpoint: a reference is as nullable as its target rule, so keep
/// re-evaluating until nothing changes. Terminates because rules only
/// ever flip from non-nullable to nullable.
pub(crate) fn nullable_rules<'g>(rules: &BTreeMap<&'g str, &'g Rule>) -> BTreeSet<&'g str> {
    let mut nullable = BTreeSet::new();

    loop {
        let mut changed = false;

        for (name, rule) in rules {
            if !nullable.contains(name) && is_nullable(&rule.expression, &nullable) {
                nullable.insert(*name);
                changed = true;
            }
        }

        if !changed {
            return nullable;
        }
    }
}

/// Whether `expr` can succeed without consuming input, given the set of
/// rule names currently known to be nullable. Unresolved references count
/// as non-nullable; the pass never runs on grammars where that matters.
pub(crate) fn is_nullable(expr: &Expression, nullable: &BTreeSet<&str>) -> bool {
    match expr {
        Expression::Literal { value, .. } => value.is_empty(),
        Expression::Name(id) => nullable.contains(id.name.as_str()),
        Expression::Sequence(list) => list.iter().all(|expr| is_nullable(expr, nullable)),
        Expression::Choice(list) => list.iter().any(|expr| is_nullable(expr, nullable)),
        Expression::Repetition {
            expression,
            quantifier,
        } => quantifier.min == 0 || is_nullable(expression, nullable),
        // lookahead never consumes input, whatever its outcome
        Expression::And(_) | Expression::Not(_) => true,
        Expression::Code(_) => true,
        Expression::Wildcard | Expression::Class(_) => false,
    }
}

/// The set of rules that `expr` can invoke at the same position it
/// started at, before any input is consumed.
pub(crate) fn zero_width_refs<'g>(
    expr: &'g Expression,
    nullable: &BTreeSet<&str>,
) -> BTreeSet<&'g str> {
    let mut refs = BTreeSet::new();

    collect_refs(expr, nullable, &mut refs);

    refs
}

fn collect_refs<'g>(
    expr: &'g Expression,
    nullable: &BTreeSet<&str>,
    refs: &mut BTreeSet<&'g str>,
) {
    match expr {
        Expression::Name(id) => {
            refs.insert(id.name.as_str());
        }
        Expression::Sequence(list) => {
            // members stay at the start position only while everything
            // before them is nullable
            for expr in list {
                collect_refs(expr, nullable, refs);

                if !is_nullable(expr, nullable) {
                    break;
                }
            }
        }
        Expression::Choice(list) => {
            // every alternative is tried at the start position
            for expr in list {
                collect_refs(expr, nullable, refs);
            }
        }
        Expression::Repetition {
            expression,
            quantifier,
        } => {
            // zero repetitions is always a structural possibility, so the
            // body is reachable at the start position regardless of its
            // own nullability
            collect_refs(expression, nullable, refs);

            if let Some(delimiter) = &quantifier.delimiter {
                if is_nullable(expression, nullable) {
                    collect_refs(delimiter, nullable, refs);
                }
            }
        }
        // lookahead rewinds whatever its inner expression consumes
        Expression::And(expr) | Expression::Not(expr) => {
            collect_refs(expr, nullable, refs);
        }
        Expression::Literal { .. }
        | Expression::Code(_)
        | Expression::Wildcard
        | Expression::Class(_) => (),
    }
}
