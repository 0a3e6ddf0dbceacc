//! Shared code generation utilities for dartjsonclass.
//!
//! This crate holds the language-agnostic half of the generator:
//!
//! - [`builder`] - Token model, formatter, and line-oriented file assembly
//! - [`lint`] - Record validation (Lint trait, Diagnostic, built-in lints)

pub mod builder;
pub mod lint;
