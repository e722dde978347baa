//! # exprwhizz
//!
//! exprwhizz is an interactive calculator written in Rust.
//! It tokenizes a line of arithmetic text, parses it into an expression tree
//! under an operator-precedence grammar (with assignment to named variables),
//! evaluates the tree against a mutable variable store, and renders the tree
//! back to a canonical parenthesized string alongside its numeric result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::tokenize, parser::core::parse, store::VarStore};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of one input line as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for values, symbols, negation, binary
///   arithmetic and assignment.
/// - Provides structural queries (node count, tree depth).
/// - Renders trees into their canonical fully parenthesized form, including
///   a bounded-buffer variant with explicit truncation reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an input line. It standardizes error reporting and carries
/// detailed information about failures, including byte positions for lexical
/// errors and token kinds for syntax errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of evaluating one input line.
///
/// This module ties together lexing, parsing, evaluation, the variable store
/// and error handling to provide a complete pipeline from raw text to a
/// numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and store.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The outcome of evaluating one input line.
///
/// Carries the canonical rendering of the parsed tree together with the
/// numeric result, which is what the REPL displays as `canonical ==> value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The canonical fully parenthesized form of the parsed expression.
    pub canonical: String,
    /// The numeric result of evaluating the expression.
    pub value:     f64,
}

/// Runs one input line through the whole pipeline.
///
/// The line is tokenized, parsed into an expression tree, rendered into its
/// canonical string, and evaluated against `vars`. Assignments mutate the
/// store, which outlives any single line.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluation fails. A blank
/// line (nothing but whitespace) is not an error; it yields `Ok(None)`.
///
/// # Examples
/// ```
/// use exprwhizz::{eval_line, interpreter::store::VarStore};
///
/// let mut vars = VarStore::new();
///
/// let evaluation = eval_line("x = 2 + 3", &mut vars).unwrap().unwrap();
/// assert_eq!(evaluation.canonical, "(x=(2+3))");
/// assert_eq!(evaluation.value, 5.0);
///
/// // The store persists between lines.
/// let evaluation = eval_line("x + 1", &mut vars).unwrap().unwrap();
/// assert_eq!(evaluation.value, 6.0);
///
/// // A blank line is a no-op, not an error.
/// assert!(eval_line("   ", &mut vars).unwrap().is_none());
/// ```
pub fn eval_line(input: &str,
                 vars: &mut VarStore)
                 -> Result<Option<Evaluation>, Box<dyn std::error::Error>> {
    let tokens = tokenize(input)?;

    // Only the end marker: the user typed nothing.
    if tokens.len() == 1 {
        return Ok(None);
    }

    let tree = parse(&tokens)?;
    let canonical = tree.to_canonical();
    let value = tree.evaluate(vars)?;

    Ok(Some(Evaluation { canonical, value }))
}
