/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks a tree in post-order, performs the arithmetic,
/// resolves symbols against the variable store, and applies assignments.
///
/// # Responsibilities
/// - Evaluates tree nodes, performing all supported operations.
/// - Resolves and mutates variable bindings.
/// - Reports runtime errors such as division by zero or undefined
///   variables.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw text and produces a sequence of
/// tokens, each corresponding to a meaningful element such as a number, a
/// symbol name, an operator, or a parenthesis. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input text into tokens, terminated by an end marker.
/// - Handles numeric literals, bounded-length symbol names, and operators.
/// - Reports lexical errors with 1-based byte positions.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the token sequence produced by the lexer front to
/// back and constructs an expression tree according to the precedence
/// grammar, with at most two tokens of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Enforces precedence and associativity rules, reporting syntax errors.
/// - Supports arithmetic, grouping, unary minus, and assignment.
pub mod parser;
/// The store module holds variable bindings between input lines.
///
/// The store maps symbol names to numeric values through a narrow
/// store/retrieve/contains/delete interface. It is long-lived: it outlives
/// any single expression's tree and is passed by mutable reference into
/// evaluation.
///
/// # Responsibilities
/// - Maps variable names to `f64` values.
/// - Distinguishes "not bound" from "bound to NaN" via `Option`.
pub mod store;
