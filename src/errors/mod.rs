//! Diagnostics produced while tokenizing and parsing.
//!
//! Every problem the front end finds is recorded as an [`errors::Error`]
//! carrying the source position it was found at. Nothing here is raised as
//! control flow: the parser accumulates errors and hands them back alongside
//! the program it managed to build.

pub mod errors;
