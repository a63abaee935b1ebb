use std::fs;

use calcula::{
    Calculator, ErrorKind, EvalError, evaluate,
    interpreter::{
        config::Config,
        functions::BUILTIN_FUNCTIONS,
        lexer::{Token, Tokenizer},
        parser::core::MAX_NESTING_DEPTH,
    },
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut calc = Calculator::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(separator) = line.strip_prefix("@separator ") {
                let separator = separator.chars().next().expect("missing separator");
                calc.set_decimal_separator(separator)
                    .unwrap_or_else(|e| panic!("{path:?}:{}: {e}", i + 1));
                continue;
            }

            let (source, expected) = line.rsplit_once("=>")
                                         .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            let source = source.trim();
            let expected = expected.trim();
            count += 1;

            let result = calc.evaluate(source);
            if let Some(kind) = expected.strip_prefix('!') {
                match result {
                    Err(e) => assert_eq!(format!("{:?}", e.kind()),
                                         kind,
                                         "{path:?}:{}: {source:?} failed with {e}",
                                         i + 1),
                    Ok(v) => panic!("{path:?}:{}: {source:?} evaluated to {v}, expected {kind}",
                                    i + 1),
                }
            } else {
                let expected: f64 = expected.parse()
                                            .unwrap_or_else(|e| panic!("{path:?}:{}: {e}", i + 1));
                match result {
                    Ok(v) => assert!((v - expected).abs() <= TOLERANCE,
                                     "{path:?}:{}: {source:?} evaluated to {v}, expected {expected}",
                                     i + 1),
                    Err(e) => panic!("{path:?}:{}: {source:?} failed: {e}", i + 1),
                }
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert!((v - expected).abs() <= TOLERANCE,
                         "{src:?} evaluated to {v}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(v) => panic!("{src:?} evaluated to {v} but was expected to fail with {kind:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

#[test]
fn single_literal() {
    assert_value(" 4 ", 4.0);
    assert_value("0.25", 0.25);
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
}

#[test]
fn leading_sign() {
    assert_value(" -  4 ", -4.0);
    assert_value(" +  4 ", 4.0);
    assert_kind(" --  4 ", ErrorKind::NotANumber);
    assert_kind("+-4", ErrorKind::NotANumber);
    assert_value("3 * -2", -6.0);
}

#[test]
fn sum_is_left_associative() {
    assert_value("2 +3 - 1 ", 4.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_kind("2 +3 -  ", ErrorKind::EndOfExpression);
}

#[test]
fn product_is_left_associative() {
    assert_value("4 *3 / 2 ", 6.0);
    assert_value("24 / 4 / 2", 3.0);
    assert_value("7 % 4 * 2", 6.0);
    assert_kind("3/0", ErrorKind::DivisionByZero);
    assert_kind("3/(1 - 1)", ErrorKind::DivisionByZero);
    assert_kind("5 % 0", ErrorKind::DivisionByZero);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ^4 ^0.5 ", 4.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("-2 ^ 2", -4.0);
    assert_kind("2 ^ -1", ErrorKind::NotANumber);
}

#[test]
fn brackets() {
    assert_value("((2) + 2)/2 ", 2.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_kind("(((", ErrorKind::EndOfExpression);
    assert_kind("))", ErrorKind::MissingBracket);
    assert_kind("(2", ErrorKind::EndOfExpression);
    assert_kind("(2 3", ErrorKind::MissingBracket);
    assert_kind("2)", ErrorKind::MissingBracket);
    assert_kind("()", ErrorKind::MissingBracket);
}

#[test]
fn functions() {
    assert!((1.0 - evaluate("cos 0").unwrap()).abs() < 0.01);
    assert!((1.0 - evaluate("cos (2 -2)").unwrap()).abs() < 0.01);
    assert_value("sin 30", 0.5);
    assert_value("sqrt 16 + 1", 5.0);
    assert_value("abs (0 - 3)", 3.0);
    assert_value("acos cos 60", 60.0);
    assert_kind("hello 5", ErrorKind::UnknownFunction);
    assert_kind("Cos 0", ErrorKind::UnknownFunction);
    assert_kind("cos", ErrorKind::EndOfExpression);
    assert_kind("cos -1", ErrorKind::NotANumber);
}

#[test]
fn lexical_errors() {
    assert_kind("1.2.3", ErrorKind::MalformedNumber);
    assert_kind(".", ErrorKind::MalformedNumber);
    assert_kind("2 $ 3", ErrorKind::UnknownCharacter);
    assert_kind("2 3", ErrorKind::TrailingInput);
    assert_kind("", ErrorKind::EndOfExpression);
    assert_kind("   ", ErrorKind::EndOfExpression);
    assert_kind("*", ErrorKind::NotANumber);
}

#[test]
fn errors_carry_context() {
    assert_eq!(evaluate("hello 5"),
               Err(EvalError::UnknownFunction { name:     "hello".to_string(),
                                                position: 0, }));
    assert_eq!(evaluate("2 + )"), Err(EvalError::MissingBracket { position: 4 }));
    assert_eq!(evaluate("1 + 2 #"),
               Err(EvalError::UnknownCharacter { character: '#',
                                                 position:  6, }));
    assert_eq!(evaluate("7 / 0"), Err(EvalError::DivisionByZero { position: 2 }));
    assert_eq!(evaluate("1 + 1.2.3"),
               Err(EvalError::MalformedNumber { lexeme:   "1.2.3".to_string(),
                                                position: 4, }));
    assert_eq!(evaluate("1 +"), Err(EvalError::EndOfExpression { position: 3 }));
    assert_eq!(evaluate("1 2").unwrap_err().position(), 2);
}

#[test]
fn error_messages_name_the_problem() {
    let message = evaluate("hello 5").unwrap_err().to_string();
    assert!(message.contains("hello"), "{message}");

    let message = evaluate("3/0").unwrap_err().to_string();
    assert!(message.contains("Division by zero"), "{message}");
}

#[test]
fn custom_decimal_separator() {
    let mut calc = Calculator::new();
    calc.set_decimal_separator(',').unwrap();
    assert_eq!(calc.decimal_separator(), ',');
    assert_eq!(calc.evaluate("1,5 + 1").unwrap(), 2.5);
    assert_eq!(calc.evaluate("1.5").unwrap_err().kind(), ErrorKind::UnknownCharacter);
    assert_eq!(calc.evaluate("1,5,5").unwrap_err().kind(), ErrorKind::MalformedNumber);

    calc.set_decimal_separator('\u{66b}').unwrap();
    assert_eq!(calc.evaluate("1\u{66b}25 * 4").unwrap(), 5.0);
}

#[test]
fn rejected_separator_keeps_previous() {
    let mut calc = Calculator::new();
    calc.set_decimal_separator(',').unwrap();
    for separator in ['+', '(', '7', 'x', ' '] {
        assert!(calc.set_decimal_separator(separator).is_err(),
                "{separator:?} should be rejected");
    }
    assert_eq!(calc.decimal_separator(), ',');
    assert_eq!(calc.evaluate("0,5").unwrap(), 0.5);
}

#[test]
fn registered_functions() {
    let mut calc = Calculator::new();
    assert!(!calc.has_function("double"));
    calc.register_function("double", |x| 2.0 * x);
    assert!(calc.has_function("double"));
    assert_eq!(calc.evaluate("double double 3").unwrap(), 12.0);

    let offset = 10.0;
    calc.register_function("cos", move |x| x + offset);
    assert_eq!(calc.evaluate("cos 1").unwrap(), 11.0);
}

#[test]
fn shared_calculator_across_threads() {
    let calc = Calculator::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|i| {
                                        let calc = &calc;
                                        scope.spawn(move || calc.evaluate(&format!("{i} * 2 + 1")))
                                    })
                                    .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap().unwrap();
            assert_eq!(value, f64::from(u8::try_from(i).unwrap()) * 2.0 + 1.0);
        }
    });
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let calc = Calculator::new();
    let first = calc.evaluate("sin 45 ^ 2 + cos 45 ^ 2").unwrap();
    for _ in 0..10 {
        assert_eq!(calc.evaluate("sin 45 ^ 2 + cos 45 ^ 2").unwrap(), first);
    }
}

#[test]
fn nesting_within_limit() {
    let depth = MAX_NESTING_DEPTH;
    assert_value(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), 1.0);
    assert_value(&format!("{}1", "abs ".repeat(depth)), 1.0);
    assert_value(&format!("1{}", " ^ 1".repeat(depth)), 1.0);

    let siblings = vec!["(1)"; 10_000].join(" + ");
    assert_value(&siblings, 10_000.0);
}

#[test]
fn deep_nesting_is_an_error() {
    let depth = 100_000;
    let brackets = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&brackets),
               Err(EvalError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                               position: MAX_NESTING_DEPTH, }));

    assert_kind(&format!("{}1", "abs ".repeat(depth)), ErrorKind::NestingTooDeep);
    assert_kind(&format!("1{}", " ^ 1".repeat(depth)), ErrorKind::NestingTooDeep);
    assert_kind(&"(cos ".repeat(depth), ErrorKind::NestingTooDeep);
}

#[test]
fn whitespace_produces_no_tokens() {
    let tokens: Vec<_> = Tokenizer::new(" \t1 \r\n+\x0c 2 ", Config::default()).collect();
    assert_eq!(tokens,
               vec![Ok((Token::Number(1.0), 2)), Ok((Token::Plus, 6)), Ok((Token::Number(2.0), 9))]);
    assert_eq!(Tokenizer::new(" \t\n ", Config::default()).count(), 0);
}

#[test]
fn calculator_exposes_its_config() {
    let mut calc = Calculator::new();
    assert_eq!(calc.config(), Config::default());

    calc.set_decimal_separator(',').unwrap();
    assert_eq!(calc.config(), Config::new(',').unwrap());
    assert_eq!(Calculator::with_config(calc.config()).evaluate("0,5 * 4").unwrap(), 2.0);
}

#[test]
fn every_builtin_is_callable() {
    let calc = Calculator::new();
    for name in BUILTIN_FUNCTIONS {
        assert!(calc.has_function(name), "{name} is not registered");
        let value = calc.evaluate(&format!("{name} 0.5"))
                        .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(!value.is_nan(), "{name} 0.5 is NaN");
    }
}
