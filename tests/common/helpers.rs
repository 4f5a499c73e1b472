#![allow(dead_code)]

//! Helper functions for common test assertions

use display_name_mcp::naming::error::NamingError;

pub fn assert_error_contains(err: &str, expected: &str, context: &str) {
    assert!(
        err.to_lowercase().contains(&expected.to_lowercase()),
        "{}: Error should contain '{}', got: {}",
        context,
        expected,
        err
    );
}

pub fn assert_configuration_error<T: std::fmt::Debug>(result: Result<T, NamingError>, context: &str) {
    match result {
        Err(NamingError::Configuration { .. }) => {}
        other => panic!("{}: expected a configuration error, got: {:?}", context, other),
    }
}

pub fn assert_invalid_input<T: std::fmt::Debug>(result: Result<T, NamingError>, context: &str) {
    match result {
        Err(NamingError::InvalidInput { .. }) => {}
        other => panic!("{}: expected an invalid input error, got: {:?}", context, other),
    }
}
