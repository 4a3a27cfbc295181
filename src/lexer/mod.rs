//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for diagnostics, counted in characters
//! - Reporting unknown characters as `Illegal` tokens instead of failing

pub mod lexer;
pub mod tokens;
