use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::store::VarStore,
};

/// Result type used by the evaluator.
///
/// All evaluation returns either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the tree against a mutable variable store.
    ///
    /// Evaluation is a single recursive post-order walk:
    /// - A value leaf evaluates to its stored value.
    /// - A symbol leaf looks up its name in the store; a miss is an error.
    /// - An assignment evaluates its right side first, then binds the
    ///   result to the target name (overwriting any prior binding) and
    ///   returns it. The target must be a symbol leaf; that is checked
    ///   here, not at construction time.
    /// - Negation evaluates its operand and negates the result.
    /// - A binary node evaluates both children, left before right and
    ///   unconditionally, then applies the operator. Division by an
    ///   exactly-zero right operand is an error rather than an infinity.
    ///
    /// # Parameters
    /// - `vars`: The variable store consulted and mutated during
    ///   evaluation.
    ///
    /// # Returns
    /// The computed value wrapped in [`EvalResult`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for an undefined variable reference,
    /// division by zero, or an assignment whose target is not a symbol.
    ///
    /// # Examples
    /// ```
    /// use exprwhizz::interpreter::{
    ///     lexer::tokenize, parser::core::parse, store::VarStore,
    /// };
    ///
    /// let mut vars = VarStore::new();
    ///
    /// let tree = parse(&tokenize("x = 3").unwrap()).unwrap();
    /// assert_eq!(tree.evaluate(&mut vars).unwrap(), 3.0);
    ///
    /// let tree = parse(&tokenize("2 ^ x").unwrap()).unwrap();
    /// assert_eq!(tree.evaluate(&mut vars).unwrap(), 8.0);
    ///
    /// let tree = parse(&tokenize("1 / 0").unwrap()).unwrap();
    /// assert!(tree.evaluate(&mut vars).is_err());
    /// ```
    #[allow(clippy::float_cmp)] // the division guard is an exact-zero check
    pub fn evaluate(&self, vars: &mut VarStore) -> EvalResult<f64> {
        match self {
            Self::Value(value) => Ok(*value),

            Self::Symbol(name) => {
                vars.retrieve(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
            },

            Self::Negate(operand) => Ok(-operand.evaluate(vars)?),

            Self::Assign { target, value } => {
                let result = value.evaluate(vars)?;
                match target.as_ref() {
                    Self::Symbol(name) => {
                        vars.store(name, result);
                        Ok(result)
                    },
                    _ => Err(RuntimeError::AssignTargetNotSymbol),
                }
            },

            Self::Binary { op, left, right } => {
                let left_val = left.evaluate(vars)?;
                let right_val = right.evaluate(vars)?;
                match op {
                    BinaryOperator::Add => Ok(left_val + right_val),
                    BinaryOperator::Sub => Ok(left_val - right_val),
                    BinaryOperator::Mul => Ok(left_val * right_val),
                    BinaryOperator::Div => {
                        if right_val == 0.0 {
                            return Err(RuntimeError::DivisionByZero);
                        }
                        Ok(left_val / right_val)
                    },
                    BinaryOperator::Pow => Ok(left_val.powf(right_val)),
                }
            },
        }
    }
}
