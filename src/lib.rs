//! # tinytime
//!
//! Date/time templates such as `{h}:{mm}{a} on {MMMM} {Do}`.
//!
//! A template string is tokenized once into a [Template]. The same template then renders dates
//! into text and parses text written in that shape back into dates:
//!
//!     template string -> lexing -> tokens -> rendering (date -> text)
//!                                         -> parsing   (text -> date)
//!
//! Directives are brace-delimited and case-sensitive; see [directive] for the full table.
//! Dates are plain wall-clock values with no time zone ([Date]). Month and weekday names are
//! English only.
//!
//! ## Modules
//!
//! - [directive]: the directive table.
//! - [lexing]: logos lexing and the tokenizer.
//! - [rendering]: tokens + date -> text.
//! - [parsing]: tokens + text -> date.
//! - [template]: compiled templates, the main entry point.
//! - [config]: layered settings loading.

pub mod calendar;
pub mod config;
pub mod directive;
pub mod error;
pub mod lexing;
pub mod parsing;
pub mod rendering;
pub mod template;

pub use calendar::Date;
pub use directive::Directive;
pub use error::{CompileError, DateError, Field, ParseError};
pub use lexing::{tokenize, Token};
pub use parsing::ParseOptions;
pub use rendering::{Options, Rendered};
pub use template::{compile, compile_lenient, Template};
