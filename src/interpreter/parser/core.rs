use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into an expression tree.
///
/// This is the entry point for parsing. It runs the top grammar rule
/// (assignment) and then requires the next token to be the end marker; any
/// remaining token is a syntax error reporting that token's kind. Tokens
/// are consumed front to back with no backtracking; on failure the partial
/// tree is dropped and the error propagates.
///
/// # Parameters
/// - `tokens`: The token sequence, terminated by [`Token::End`].
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// Returns a [`ParseError`] for an unexpected token at any grammar point or
/// for trailing tokens after a complete expression.
///
/// # Examples
/// ```
/// use exprwhizz::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tree = parse(&tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(tree.to_canonical(), "(2^(3^2))");
///
/// let err = parse(&tokenize("1 2").unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "Syntax error on token VALUE");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let tree = parse_assignment(&mut iter)?;

    match iter.peek() {
        Some(Token::End) | None => Ok(tree),
        Some(token) => Err(ParseError::TrailingToken { token: token.to_string() }),
    }
}

/// Parses an assignment or falls through to the additive rule.
///
/// Assignment is recognized by exactly two tokens of lookahead: the current
/// token is a symbol and the one after it is `=`. This keeps a bare symbol
/// in an expression (`x + 1`) from being mistaken for a binding target. The
/// right-hand side recurses into this same rule, making assignment
/// right-associative so that `x = y = 5` binds both names.
///
/// Grammar: `assignment := SYMBOL "=" assignment | additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Assign`] node, or whatever the additive rule produces.
pub(in crate::interpreter::parser) fn parse_assignment<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Symbol(name)) = tokens.peek() {
        let name = name.to_owned();
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(Token::Equal) = lookahead.peek() {
            tokens.next(); // consume the symbol
            tokens.next(); // consume '='

            let value = parse_assignment(tokens)?;
            return Ok(Expr::Assign { target: Box::new(Expr::Symbol(name)),
                                     value:  Box::new(value), });
        }
    }

    parse_additive(tokens)
}
