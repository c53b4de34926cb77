//! Compiled templates
//!
//! A [Template] is the tokenized form of a template string. It holds no mutable state, so one
//! template can be shared across threads and used for any number of render and parse calls.

use crate::calendar::Date;
use crate::directive::Directive;
use crate::error::{CompileError, ParseError};
use crate::lexing::{scan, Token};
use crate::parsing::{self, ParseOptions};
use crate::rendering::{self, Options, Rendered};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

/// Compile a template, refusing brace groups that look like directives but are not.
///
/// `{YYY}` is an error; `{ YYY }`, `{}` and a lone `{` are literal text.
pub fn compile(template: &str) -> Result<Template, CompileError> {
    let scan = scan(template);
    if let Some(unknown) = scan.unrecognized.into_iter().next() {
        debug!(template, directive = %unknown.name, "unrecognized directive");
        return Err(CompileError::UnrecognizedDirective {
            directive: unknown.name,
            offset: unknown.offset,
        });
    }
    Ok(Template::from_tokens(template, scan.tokens))
}

/// Compile a template, keeping unknown brace groups as literal text.
pub fn compile_lenient(template: &str) -> Template {
    let scan = scan(template);
    for unknown in &scan.unrecognized {
        debug!(
            template,
            directive = %unknown.name,
            offset = unknown.offset,
            "unrecognized directive kept as literal text"
        );
    }
    Template::from_tokens(template, scan.tokens)
}

impl Template {
    fn from_tokens(source: &str, tokens: Vec<Token>) -> Self {
        debug!(template = source, tokens = tokens.len(), "compiled template");
        Template {
            source: source.to_string(),
            tokens,
        }
    }

    /// The template string this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Directives in template order.
    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        self.tokens.iter().filter_map(Token::directive)
    }

    /// Render `date` into a new string.
    pub fn render(&self, date: &Date, options: &Options) -> String {
        rendering::render(&self.tokens, date, options)
    }

    /// Bind `date` for formatting through `Display`, without allocating.
    pub fn format<'a>(&'a self, date: &'a Date, options: &'a Options) -> Rendered<'a> {
        Rendered::new(&self.tokens, date, options)
    }

    /// Read a date out of `input`.
    pub fn parse(&self, input: &str, options: &ParseOptions) -> Result<Date, ParseError> {
        parsing::parse(&self.tokens, input, options)
    }
}

impl FromStr for Template {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
