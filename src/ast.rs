use std::fmt;

/// Represents a binary operator.
///
/// Binary operators cover the four arithmetic operations plus
/// exponentiation. Assignment is not a `BinaryOperator`; it has its own
/// [`Expr`] variant because its left side is a binding target, not a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// An expression tree node.
///
/// `Expr` is a closed set of variants covering everything one input line can
/// parse into: numeric leaves, symbol leaves, unary negation, binary
/// arithmetic, and assignment. Children are exclusively owned through
/// `Box`, so dropping a tree releases every node and owned name string
/// recursively; there is no sharing and there are no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric leaf holding a floating-point value.
    Value(f64),
    /// A symbol leaf referencing a variable by name.
    Symbol(String),
    /// Unary negation of a single operand.
    Negate(Box<Self>),
    /// A binary arithmetic operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// An assignment binding a value to a variable.
    ///
    /// The target must be a [`Expr::Symbol`]; this is checked when the tree
    /// is evaluated, not when it is constructed.
    Assign {
        /// The binding target.
        target: Box<Self>,
        /// The value being assigned.
        value:  Box<Self>,
    },
}

impl Expr {
    /// Counts every node in the tree, leaves and interior nodes alike.
    ///
    /// A lone leaf counts as 1.
    ///
    /// # Example
    /// ```
    /// use exprwhizz::{
    ///     interpreter::{lexer::tokenize, parser::core::parse},
    /// };
    ///
    /// let tree = parse(&tokenize("1+2*3").unwrap()).unwrap();
    /// assert_eq!(tree.count(), 5);
    /// ```
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Value(_) | Self::Symbol(_) => 1,
            Self::Negate(operand) => 1 + operand.count(),
            Self::Binary { left, right, .. } => 1 + left.count() + right.count(),
            Self::Assign { target, value } => 1 + target.count() + value.count(),
        }
    }

    /// Computes the length of the longest root-to-leaf path.
    ///
    /// A lone leaf has depth 1.
    ///
    /// # Example
    /// ```
    /// use exprwhizz::{
    ///     interpreter::{lexer::tokenize, parser::core::parse},
    /// };
    ///
    /// let tree = parse(&tokenize("1+2*3").unwrap()).unwrap();
    /// assert_eq!(tree.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Value(_) | Self::Symbol(_) => 1,
            Self::Negate(operand) => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Assign { target, value } => 1 + target.depth().max(value.depth()),
        }
    }

    /// Renders the tree into its canonical fully parenthesized form.
    ///
    /// Equivalent to `to_string()`; provided as a named operation because
    /// the canonical form is the calculator's echo of what it parsed.
    ///
    /// # Example
    /// ```
    /// use exprwhizz::{
    ///     interpreter::{lexer::tokenize, parser::core::parse},
    /// };
    ///
    /// let tree = parse(&tokenize("2+3*4").unwrap()).unwrap();
    /// assert_eq!(tree.to_canonical(), "(2+(3*4))");
    /// ```
    #[must_use]
    pub fn to_canonical(&self) -> String {
        self.to_string()
    }

    /// Renders the canonical form into a fixed-capacity byte buffer.
    ///
    /// When the whole form fits, the buffer's first `len` bytes hold the
    /// exact canonical string and `Rendered::Complete { len }` is returned.
    /// When it does not fit, as many leading bytes as possible are written,
    /// the last available byte is overwritten with the `$` truncation
    /// marker, and `Rendered::Truncated { required }` reports how many bytes
    /// the full form needs so the caller can resize and retry. Nothing is
    /// ever written past the end of `buf`.
    ///
    /// The canonical form is pure ASCII (digits, operators, parentheses and
    /// identifier characters), so a byte boundary is always a character
    /// boundary.
    ///
    /// # Example
    /// ```
    /// use exprwhizz::{
    ///     ast::Rendered,
    ///     interpreter::{lexer::tokenize, parser::core::parse},
    /// };
    ///
    /// let tree = parse(&tokenize("1+2").unwrap()).unwrap();
    ///
    /// let mut buf = [0u8; 8];
    /// assert_eq!(tree.render_into(&mut buf), Rendered::Complete { len: 5 });
    /// assert_eq!(&buf[..5], b"(1+2)");
    ///
    /// let mut small = [0u8; 3];
    /// assert_eq!(tree.render_into(&mut small),
    ///            Rendered::Truncated { required: 5 });
    /// assert_eq!(&small, b"(1$");
    /// ```
    #[must_use]
    pub fn render_into(&self, buf: &mut [u8]) -> Rendered {
        let canonical = self.to_canonical();
        let required = canonical.len();

        if required <= buf.len() {
            buf[..required].copy_from_slice(canonical.as_bytes());
            return Rendered::Complete { len: required };
        }

        if let Some(last) = buf.len().checked_sub(1) {
            buf[..last].copy_from_slice(&canonical.as_bytes()[..last]);
            buf[last] = b'$';
        }

        Rendered::Truncated { required }
    }
}

/// The outcome of rendering a tree into a fixed-capacity buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The whole canonical form fit; `len` bytes were written.
    Complete {
        /// The number of bytes written.
        len: usize,
    },
    /// The buffer was too small; the output was truncated and marked with
    /// `$`.
    Truncated {
        /// The number of bytes the full canonical form needs.
        required: usize,
    },
}

impl fmt::Display for Expr {
    /// Formats the tree as its canonical fully parenthesized form.
    ///
    /// Values use Rust's shortest round-trip float formatting (integers
    /// print without a trailing `.0`), symbols print as their bare name,
    /// negation prints as `(-X)`, and every binary node (including
    /// assignment) prints as `(L op R)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Symbol(name) => f.write_str(name),
            Self::Negate(operand) => write!(f, "(-{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left}{op}{right})"),
            Self::Assign { target, value } => write!(f, "({target}={value})"),
        }
    }
}
