//! Unit tests for error handling.

use crate::errors::errors::{errors_to_strings, Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.to_string(), "unrecognised token: \"@\"");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.monkey".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "=".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_missing_prefix_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "=".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "no prefix parse function for \"=\" found");
}

#[test]
fn test_expected_token_message() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "Assignment".to_string(),
            found: "5".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got \"5\" instead"
    );
}

#[test]
fn test_number_parse_message() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_stack_limit_message() {
    let error = Error::new(ErrorImpl::StackLimitExceeded { limit: 8 }, Position::null());

    assert_eq!(error.get_error_name(), "StackLimitExceeded");
    assert_eq!(error.to_string(), "expression nesting exceeds limit of 8");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "=".to_string(),
            message: "expected identifier".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `=`, expected identifier"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_errors_to_strings_keeps_order() {
    let errors = vec![
        Error::new(ErrorImpl::StackLimitExceeded { limit: 1 }, Position::null()),
        Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "#".to_string(),
            },
            Position::null(),
        ),
    ];

    assert_eq!(
        errors_to_strings(&errors),
        vec![
            "expression nesting exceeds limit of 1".to_string(),
            "unrecognised token: \"#\"".to_string(),
        ]
    );
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Position::null(),
    ));

    assert_eq!(error.to_string(), "no prefix parse function for \")\" found");
}
