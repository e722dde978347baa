use exprwhizz::{
    ast::{Expr, Rendered},
    error::{ParseError, RuntimeError},
    eval_line,
    interpreter::{lexer::{Token, tokenize}, parser::core::parse, store::VarStore},
};

fn eval(src: &str, vars: &mut VarStore) -> f64 {
    eval_line(src, vars).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
                        .unwrap_or_else(|| panic!("'{src}' produced no result"))
                        .value
}

fn eval_fresh(src: &str) -> f64 {
    eval(src, &mut VarStore::new())
}

fn canonical(src: &str) -> String {
    parse(&tokenize(src).unwrap()).unwrap().to_canonical()
}

#[test]
fn tokenizing_numeric_literals() {
    assert_eq!(tokenize("42").unwrap(),
               vec![Token::Value(42.0), Token::End]);
    assert_eq!(tokenize("3.25").unwrap(),
               vec![Token::Value(3.25), Token::End]);
    assert_eq!(tokenize(".5").unwrap(),
               vec![Token::Value(0.5), Token::End]);
    assert_eq!(tokenize("2.1e-10").unwrap(),
               vec![Token::Value(2.1e-10), Token::End]);
}

#[test]
fn tokenizing_symbols() {
    assert_eq!(tokenize("rate_1").unwrap(),
               vec![Token::Symbol("rate_1".to_owned()), Token::End]);
    assert_eq!(tokenize("_x").unwrap(),
               vec![Token::Symbol("_x".to_owned()), Token::End]);

    // 31 identifier characters is the longest legal name.
    let longest = "a".repeat(31);
    assert_eq!(tokenize(&longest).unwrap(),
               vec![Token::Symbol(longest.clone()), Token::End]);

    let too_long = "a".repeat(32);
    assert!(matches!(tokenize(&too_long),
                     Err(ParseError::SymbolTooLong { position: 1 })));
}

#[test]
fn tokenizing_operators_and_whitespace() {
    assert_eq!(tokenize(" x = 1 + 2 ").unwrap(),
               vec![Token::Symbol("x".to_owned()),
                    Token::Equal,
                    Token::Value(1.0),
                    Token::Plus,
                    Token::Value(2.0),
                    Token::End]);
    assert_eq!(tokenize("(-1)*2/3^4").unwrap(),
               vec![Token::OpenParen,
                    Token::Minus,
                    Token::Value(1.0),
                    Token::CloseParen,
                    Token::Multiply,
                    Token::Value(2.0),
                    Token::Divide,
                    Token::Value(3.0),
                    Token::Power,
                    Token::Value(4.0),
                    Token::End]);
}

#[test]
fn tokenizing_rejects_bad_input() {
    let err = tokenize("2 ? 2").unwrap_err();
    assert!(matches!(err,
                     ParseError::UnexpectedCharacter { character: '?',
                                                       position:  3 }));
    assert_eq!(err.to_string(), "Position 3: unexpected character ?");

    // A lone '.' starts a numeric literal that never materializes.
    assert!(matches!(tokenize("1 + ."),
                     Err(ParseError::IllegalNumber { position: 5 })));

    // Failures discard the partial sequence entirely.
    assert!(tokenize("x = $").is_err());
}

#[test]
fn empty_line_is_a_no_op() {
    assert_eq!(tokenize("").unwrap(), vec![Token::End]);

    let mut vars = VarStore::new();
    assert!(eval_line("", &mut vars).unwrap().is_none());
    assert!(eval_line("   \t ", &mut vars).unwrap().is_none());
}

#[test]
fn canonical_form_reflects_precedence() {
    assert_eq!(canonical("2+3*4"), "(2+(3*4))");
    assert_eq!(canonical("2*3+4"), "((2*3)+4)");
    assert_eq!(canonical("1+2-3"), "((1+2)-3)");
    assert_eq!(canonical("8/4/2"), "((8/4)/2)");
    assert_eq!(canonical("(2+3)*4"), "((2+3)*4)");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(canonical("2^3^2"), "(2^(3^2))");
    assert_eq!(eval_fresh("2^3^2"), 512.0);
    assert_eq!(eval_fresh("(2^3)^2"), 64.0);
}

#[test]
fn addition_and_subtraction_are_left_associative() {
    assert_eq!(eval_fresh("10-3-2"), 5.0);
    assert_eq!(eval_fresh("16/4/2"), 2.0);
}

#[test]
fn unary_minus_nests_and_binds_tightly() {
    assert_eq!(canonical("--4"), "(-(-4))");
    assert_eq!(eval_fresh("--4"), 4.0);

    // '-' binds the primary, so -2^2 squares the negated base.
    assert_eq!(canonical("-2^2"), "((-2)^2)");
    assert_eq!(eval_fresh("-2^2"), 4.0);
}

#[test]
fn assignment_binds_and_returns_the_value() {
    let mut vars = VarStore::new();
    assert_eq!(eval("x=5", &mut vars), 5.0);
    assert_eq!(vars.retrieve("x"), Some(5.0));
    assert_eq!(eval("x+1", &mut vars), 6.0);
}

#[test]
fn assignment_is_right_associative() {
    let mut vars = VarStore::new();
    assert_eq!(canonical("x = y = 5"), "(x=(y=5))");
    assert_eq!(eval("x = y = 5", &mut vars), 5.0);
    assert_eq!(vars.retrieve("x"), Some(5.0));
    assert_eq!(vars.retrieve("y"), Some(5.0));
}

#[test]
fn assignment_is_legal_inside_parentheses() {
    let mut vars = VarStore::new();
    assert_eq!(eval("2*(x=3)", &mut vars), 6.0);
    assert_eq!(vars.retrieve("x"), Some(3.0));
}

#[test]
fn bare_symbol_followed_by_operator_is_a_reference() {
    let mut vars = VarStore::new();
    vars.store("x", 2.0);
    assert_eq!(canonical("x + 1"), "(x+1)");
    assert_eq!(eval("x + 1", &mut vars), 3.0);
    // The reference did not rebind anything.
    assert_eq!(vars.retrieve("x"), Some(2.0));
}

#[test]
fn undefined_variable_is_an_error() {
    let tree = parse(&tokenize("nope + 1").unwrap()).unwrap();
    let err = tree.evaluate(&mut VarStore::new()).unwrap_err();
    assert!(matches!(err, RuntimeError::UndefinedVariable { ref name } if name == "nope"));
    assert_eq!(err.to_string(), "Undefined variable 'nope'");
}

#[test]
fn division_by_zero_is_an_error() {
    let tree = parse(&tokenize("5/0").unwrap()).unwrap();
    assert!(matches!(tree.evaluate(&mut VarStore::new()),
                     Err(RuntimeError::DivisionByZero)));

    // A zero numerator is fine.
    assert_eq!(eval_fresh("0/5"), 0.0);
}

#[test]
fn assignment_target_must_be_a_symbol() {
    // The type permits a non-symbol target; evaluation rejects it.
    let tree = Expr::Assign { target: Box::new(Expr::Value(1.0)),
                              value:  Box::new(Expr::Value(2.0)), };
    assert!(matches!(tree.evaluate(&mut VarStore::new()),
                     Err(RuntimeError::AssignTargetNotSymbol)));
}

#[test]
fn count_and_depth() {
    let tree = parse(&tokenize("1+2*3").unwrap()).unwrap();
    assert_eq!(tree.count(), 5);
    assert_eq!(tree.depth(), 3);

    let leaf = parse(&tokenize("7").unwrap()).unwrap();
    assert_eq!(leaf.count(), 1);
    assert_eq!(leaf.depth(), 1);

    let negated = parse(&tokenize("-x").unwrap()).unwrap();
    assert_eq!(negated.count(), 2);
    assert_eq!(negated.depth(), 2);
}

#[test]
fn bounded_rendering_never_overruns() {
    let tree = parse(&tokenize("1+2").unwrap()).unwrap();
    assert_eq!(tree.to_canonical(), "(1+2)");

    // Exact fit: the full string, no marker.
    let mut exact = [0u8; 5];
    assert_eq!(tree.render_into(&mut exact), Rendered::Complete { len: 5 });
    assert_eq!(&exact, b"(1+2)");

    // Too small: truncated, last byte is the marker.
    let mut small = [0u8; 3];
    assert_eq!(tree.render_into(&mut small),
               Rendered::Truncated { required: 5 });
    assert_eq!(&small, b"(1$");

    // One byte short of fitting.
    let mut short = [0u8; 4];
    assert_eq!(tree.render_into(&mut short),
               Rendered::Truncated { required: 5 });
    assert_eq!(&short, b"(1+$");

    // Zero capacity: nothing written, requirement still reported.
    let mut empty = [0u8; 0];
    assert_eq!(tree.render_into(&mut empty),
               Rendered::Truncated { required: 5 });
}

#[test]
fn missing_closing_paren_is_a_syntax_error() {
    let err = parse(&tokenize("(1+2").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref token } if token == "(end)"));
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    let err = parse(&tokenize("1 2").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::TrailingToken { ref token } if token == "VALUE"));
    assert_eq!(err.to_string(), "Syntax error on token VALUE");

    assert!(matches!(parse(&tokenize("1+2)").unwrap()),
                     Err(ParseError::TrailingToken { .. })));
}

#[test]
fn stray_operator_is_a_syntax_error() {
    let err = parse(&tokenize("*3").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref token } if token == "MULTIPLY"));

    assert!(matches!(parse(&tokenize("1+").unwrap()),
                     Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn store_distinguishes_missing_from_nan() {
    let mut vars = VarStore::new();
    vars.store("n", f64::NAN);

    // A NaN binding is found; only an absent name is a miss.
    assert!(vars.contains("n"));
    assert!(vars.retrieve("n").is_some_and(f64::is_nan));
    assert_eq!(vars.retrieve("m"), None);

    vars.delete("n");
    assert!(!vars.contains("n"));
    assert_eq!(vars.retrieve("n"), None);
}

#[test]
fn results_use_shortest_round_trip_formatting() {
    let mut vars = VarStore::new();
    let evaluation = eval_line("2.5 * 2", &mut vars).unwrap().unwrap();
    assert_eq!(evaluation.canonical, "(2.5*2)");
    assert_eq!(evaluation.value, 5.0);
    // Integers render without a trailing `.0`.
    assert_eq!(evaluation.value.to_string(), "5");
}
