/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include malformed numeric literals, oversized
/// symbol names, unrecognized characters, and unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined variable references, division by zero, and
/// invalid assignment targets.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
