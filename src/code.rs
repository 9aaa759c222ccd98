//! Syntax checking of embedded foreign code. The compiler only knows the
//! [`CodeChecker`] contract; the concrete checker is injected so that it
//! can be swapped per output language, or stubbed out in tests.

use proc_macro2::TokenStream;
use syn::parse::{ParseStream, Parser};

/// Error number reported for snippets the Rust checker cannot parse.
pub const RS0001: &str = "RS0001";

/// One diagnostic from the foreign code parser. Offsets are byte offsets
/// into the wrapped text the checker was handed.
#[derive(Clone, Debug)]
pub struct CodeDiagnostic {
    pub offset: usize,
    pub length: usize,
    pub message: String,
    pub code: String,
    pub is_warning: bool,
}

/// The outcome of checking one wrapped snippet: any diagnostics, plus the
/// number of bytes that parsed as a syntactically complete unit.
#[derive(Clone, Debug)]
pub struct SyntaxCheck {
    pub diagnostics: Vec<CodeDiagnostic>,
    pub consumed: usize,
}

pub trait CodeChecker {
    fn check(&self, source: &str) -> SyntaxCheck;
}

/// Checks snippets destined for generated Rust source, using the same
/// parser rustc front ends do. Every wrapper shape the compiler produces
/// is a closure, so a single expression parse covers all code kinds.
#[derive(Debug, Default)]
pub struct RustChecker;

impl CodeChecker for RustChecker {
    fn check(&self, source: &str) -> SyntaxCheck {
        let tokens: TokenStream = match source.parse() {
            Ok(tokens) => tokens,
            Err(err) => {
                return SyntaxCheck {
                    diagnostics: vec![CodeDiagnostic {
                        offset: err.span().byte_range().start,
                        length: err.span().byte_range().len(),
                        message: err.to_string(),
                        code: RS0001.to_owned(),
                        is_warning: false,
                    }],
                    consumed: source.len(),
                };
            }
        };

        let parse_one_expression = |input: ParseStream| -> syn::Result<usize> {
            input.parse::<syn::Expr>()?;

            if input.is_empty() {
                Ok(source.len())
            } else {
                let consumed = input.span().byte_range().start;
                // drain the leftovers so parse2 does not reject them; the
                // caller reports them against the original snippet
                input.parse::<TokenStream>()?;
                Ok(consumed)
            }
        };

        match parse_one_expression.parse2(tokens) {
            Ok(consumed) => SyntaxCheck {
                diagnostics: Vec::new(),
                consumed,
            },
            Err(err) => SyntaxCheck {
                diagnostics: err
                    .into_iter()
                    .map(|err| CodeDiagnostic {
                        offset: err.span().byte_range().start,
                        length: err.span().byte_range().len(),
                        message: err.to_string(),
                        code: RS0001.to_owned(),
                        is_warning: false,
                    })
                    .collect(),
                consumed: source.len(),
            },
        }
    }
}
