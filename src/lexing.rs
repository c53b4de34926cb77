//! Template lexing
//!
//! This module turns a template string into the token sequence that rendering and parsing
//! walk over.
//!
//! The pipeline consists of:
//! 1. Raw lexing using logos (./lexing/lexemes.rs): the template is split into brace groups
//!    (`{...}` without nested braces), stray opening braces, and runs of plain text.
//! 2. Tokenization (./lexing/tokenizer.rs): brace groups are looked up in the directive table;
//!    everything that is not a directive is coalesced into a single literal token per run.
//!
//! Tokenizing never fails. Brace groups that do not name a directive stay literal text and are
//! reported alongside the tokens, so strict compilation can refuse them.

pub mod lexemes;
pub mod tokenizer;

pub use lexemes::Lexeme;
pub use tokenizer::{scan, tokenize, Scan, Token, Unrecognized};
