use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. The accumulated
/// left tree is folded with each newly parsed right operand, so `10-3-2`
/// groups as `(10-3)-2`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Binary`] tree representing the parsed expression.
pub(in crate::interpreter::parser) fn parse_additive<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// Grammar: `multiplicative := exponential (("*" | "/") exponential)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining exponential-level nodes.
pub(in crate::interpreter::parser) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_exponential(tokens)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_exponential(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `2^3^2` parses as `2^(3^2)`. This
/// is achieved by having the right operand recurse into this same rule
/// rather than the next-higher one.
///
/// Grammar: `exponential := primary ("^" exponential)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub(in crate::interpreter::parser) fn parse_exponential<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_primary(tokens)?;
    while let Some(Token::Power) = tokens.peek() {
        tokens.next();
        let right = parse_exponential(tokens)?;
        left = Expr::Binary { op:    BinaryOperator::Pow,
                              left:  Box::new(left),
                              right: Box::new(right), };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the
/// arithmetic operators (`+`, `-`, `*`, `/`, `^`). Returns `None` for all
/// other tokens; in particular `=` is not a binary operator here because
/// assignment is handled by its own rule.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        Token::Power => Some(BinaryOperator::Pow),
        _ => None,
    }
}
