//! Assertion macros for optimizer tests.
//!
//! - [`crate::assert_result_ok!`] - Assert Result is Ok and extract value
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//! - [`crate::assert_error_code!`] - Assert a `BoundmapError` carries a code
//! - [`crate::assert_unit_interval!`] - Assert a score lies in `[0, 1]`
//!
//! # Example
//!
//! ```rust
//! use boundmap::{assert_contains_error, assert_result_ok};
//!
//! let result: Result<i32, String> = Ok(42);
//! assert_eq!(assert_result_ok!(result), 42);
//!
//! let result: Result<i32, String> = Err("duplicate id: svc-1".to_string());
//! assert_contains_error!(result, "duplicate");
//! ```

/// Assert that a Result is Ok and extract the value.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that an error's Display output contains a pattern.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}

/// Assert that a `Result<_, BoundmapError>` failed with the given error code.
#[macro_export]
macro_rules! assert_error_code {
    ($result:expr, $code:expr) => {{
        let err = $crate::assert_result_err!($result);
        assert_eq!(
            err.code(),
            $code,
            "Expected error code {}, got {}: {}\n  at {}:{}",
            $code,
            err.code(),
            err,
            file!(),
            line!()
        );
        err
    }};
}

/// Assert that a score is finite and within `[0, 1]`.
#[macro_export]
macro_rules! assert_unit_interval {
    ($value:expr) => {{
        let value: f64 = $value;
        assert!(
            value.is_finite() && (0.0..=1.0).contains(&value),
            "Expected {} = {} to lie in [0, 1]\n  at {}:{}",
            stringify!($value),
            value,
            file!(),
            line!()
        );
    }};
}
