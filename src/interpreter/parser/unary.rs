use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_assignment},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - symbols used as value references
/// - parenthesized expressions
/// - unary minus
///
/// Unary minus binds tighter than any binary operator and recurses into
/// this same rule, so `--x` produces nested negation nodes. A
/// parenthesized expression recurses into the top grammar rule so that
/// assignment is legal inside parentheses, e.g. `2*(x=3)`.
///
/// Grammar:
/// ```text
///     primary := VALUE
///              | SYMBOL
///              | "(" assignment ")"
///              | "-" primary
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// Returns a `ParseError` reporting the offending token's kind if:
/// - the leading token cannot start a primary expression (e.g. a stray
///   operator),
/// - a parenthesized expression is not closed with `)`.
pub(in crate::interpreter::parser) fn parse_primary<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token::Value(value)) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Value(value))
        },

        Some(Token::Symbol(name)) => {
            let name = name.to_owned();
            tokens.next();
            Ok(Expr::Symbol(name))
        },

        Some(Token::OpenParen) => {
            tokens.next();
            let inner = parse_assignment(tokens)?;
            match tokens.peek() {
                Some(Token::CloseParen) => {
                    tokens.next();
                    Ok(inner)
                },
                Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),
                None => Err(ParseError::UnexpectedEndOfInput),
            }
        },

        Some(Token::Minus) => {
            tokens.next();
            let operand = parse_primary(tokens)?;
            Ok(Expr::Negate(Box::new(operand)))
        },

        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
