//! The grammar AST handed to the compiler by a front end parser. The
//! compiler only reads it; diagnostics refer back into it by cursor.

/// A position in the grammar source, used for diagnostics.
#[derive(Clone, Hash, Eq, PartialEq, Debug, Default)]
pub struct Cursor {
    pub file_name: String,
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(file_name: &str, line: usize, column: usize) -> Self {
        Cursor {
            file_name: file_name.to_owned(),
            line,
            column,
        }
    }

    /// Walk `bytes` bytes into `text`, tracking line and column. Offsets
    /// past the end of `text` clamp to the end; an offset of zero returns
    /// the cursor unchanged.
    pub fn advanced(&self, text: &str, bytes: usize) -> Cursor {
        let mut res = self.clone();

        for (off, ch) in text.char_indices() {
            if off >= bytes {
                break;
            }

            if ch == '\n' {
                res.line += 1;
                res.column = 1;
            } else {
                res.column += 1;
            }
        }

        res
    }
}

/// A name together with where it appears in the source.
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct Identifier {
    pub name: String,
    pub start: Cursor,
}

impl Identifier {
    pub fn new(name: &str, start: Cursor) -> Self {
        Identifier {
            name: name.to_owned(),
            start,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Grammar {
    pub rules: Vec<Rule>,
    pub settings: Vec<Setting>,
    /// Module level prologue emitted verbatim ahead of the generated
    /// parser. Opaque to every analysis pass.
    pub initializer: Option<CodeSpan>,
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub name: Identifier,
    /// Only used for diagnostics and code generation, never for analysis.
    pub display_name: Option<String>,
    pub expression: Expression,
}

#[derive(Clone, Debug)]
pub struct Setting {
    pub key: Identifier,
    pub value: String,
}

/// A snippet of foreign code together with its start position, so that
/// diagnostics inside the snippet can be mapped back to grammar source.
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct CodeSpan {
    pub code: String,
    pub start: Cursor,
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub enum CodeKind {
    /// A statement block run for its side effects when the containing
    /// sequence matches.
    Action,
    /// An expression producing the value of the containing sequence.
    Result,
    /// An expression producing a parse error message.
    Error,
    /// A statement block mutating parser state.
    State,
}

#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct CodeExpression {
    pub kind: CodeKind,
    pub span: CodeSpan,
}

/// Repetition bounds plus the optional delimiter matched between
/// repetitions. `max` of `None` means unbounded.
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct Quantifier {
    pub min: usize,
    pub max: Option<usize>,
    pub delimiter: Option<Box<Expression>>,
}

/// A set of character ranges, such as `[a-z0-9]`. When `negated`, the
/// class matches any character outside the ranges.
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct CharacterClass {
    pub ranges: Vec<(char, char)>,
    pub negated: bool,
}

#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Expression {
    /// A literal string. Matches the empty input iff `value` is empty.
    Literal {
        value: String,
        ignore_case: bool,
        start: Cursor,
    },
    /// A reference to another rule by name.
    Name(Identifier),
    /// Sub-expressions matched one after another.
    Sequence(Vec<Expression>),
    /// Ordered alternatives, all tried at the same start position.
    Choice(Vec<Expression>),
    Repetition {
        expression: Box<Expression>,
        quantifier: Quantifier,
    },
    /// `&e` positive lookahead. Never consumes input.
    And(Box<Expression>),
    /// `!e` negative lookahead. Never consumes input.
    Not(Box<Expression>),
    /// Embedded foreign code. Zero width, opaque to structural passes.
    Code(CodeExpression),
    /// `.`, matches exactly one character.
    Wildcard,
    Class(CharacterClass),
}
