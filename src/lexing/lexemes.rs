//! Raw lexemes of a template string
//!
//! This is the entry point where template strings become lexeme streams, using the logos
//! lexer library. Lexemes know nothing about directives: a brace group is only a candidate
//! until the tokenizer looks it up.

use logos::Logos;

/// Lexical classes of template text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// `{` ... `}` with no braces in between.
    #[regex(r"\{[^{}]*\}")]
    Braced,

    /// An opening brace that does not start a brace group.
    #[token("{")]
    OpenBrace,

    /// Everything up to the next opening brace.
    #[regex(r"[^{]+")]
    Text,
}

/// Lex a template with byte spans.
///
/// Every byte of the template belongs to exactly one lexeme; spans are contiguous and cover
/// the whole input.
pub fn lex(template: &str) -> Vec<(Lexeme, logos::Span)> {
    let mut lexer = Lexeme::lexer(template);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        // Every character is covered by a rule; keep anything unexpected as text.
        let lexeme = result.unwrap_or(Lexeme::Text);
        lexemes.push((lexeme, lexer.span()));
    }

    lexemes
}
