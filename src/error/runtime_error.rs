#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in the store.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by an exactly-zero right operand.
    DivisionByZero,
    /// The left side of an assignment was not a symbol.
    AssignTargetNotSymbol,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{name}'")
            },
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::AssignTargetNotSymbol => {
                write!(f, "Left side of '=' must be a variable")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
