//! Tokenizer
//!
//!     Builds the token sequence of a template from its lexemes. A token is either a directive
//!     or a literal run of text. Adjacent non-directive lexemes are coalesced, so a literal
//!     token is always the longest run of text between two directives. The parser relies on
//!     this: each literal token is stripped from the input as one unit.
//!
//!     Brace groups are matched against the directive table only when the whole group content
//!     is a directive spelling. `{MMMM}` is a directive, `{MMMMM}` and `{ YYYY }` are not.

use crate::directive::Directive;
use crate::lexing::lexemes::{lex, Lexeme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tokenizer output unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Directive(Directive),
    Literal(String),
}

impl Token {
    pub fn directive(&self) -> Option<Directive> {
        match self {
            Token::Directive(directive) => Some(*directive),
            Token::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Directive(directive) => write!(f, "{}", directive),
            Token::Literal(text) => f.write_str(text),
        }
    }
}

/// A brace group that looks like a directive but is not in the directive table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    /// Group content, without braces.
    pub name: String,
    /// Byte offset of the opening brace in the template.
    pub offset: usize,
}

/// Result of scanning a template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scan {
    pub tokens: Vec<Token>,
    /// Directive-shaped groups that were kept as literal text.
    pub unrecognized: Vec<Unrecognized>,
}

/// Tokenize a template. Never fails; unknown brace groups stay literal.
pub fn tokenize(template: &str) -> Vec<Token> {
    scan(template).tokens
}

/// Tokenize a template and report the brace groups that degraded to literal text.
pub fn scan(template: &str) -> Scan {
    let mut scan = Scan::default();
    let mut literal = String::new();

    for (lexeme, span) in lex(template) {
        let text = &template[span.clone()];
        if lexeme == Lexeme::Braced {
            let name = &text[1..text.len() - 1];
            if let Some(directive) = Directive::lookup(name) {
                flush_literal(&mut scan.tokens, &mut literal);
                scan.tokens.push(Token::Directive(directive));
                continue;
            }
            if is_directive_shaped(name) {
                scan.unrecognized.push(Unrecognized {
                    name: name.to_string(),
                    offset: span.start,
                });
            }
        }
        literal.push_str(text);
    }
    flush_literal(&mut scan.tokens, &mut literal);

    scan
}

fn flush_literal(tokens: &mut Vec<Token>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

/// Brace content that a template author most likely meant as a directive.
fn is_directive_shaped(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}
