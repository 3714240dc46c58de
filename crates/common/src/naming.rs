//! File naming for generated handlers
//!
//! RPC identifiers are converted to snake_case file stems with two regex
//! rewrites, applied once each and in order.

use regex::Regex;
use std::sync::LazyLock;

/// A character followed by a capitalized word (`SignUp` -> `Sign_Up`)
static FIRST_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));

/// A lowercase letter or digit followed by a capital (`OurAPI` -> `Our_API`)
static ALL_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Convert a mixed or camel case identifier into a snake_case file token
///
/// # Examples
/// ```
/// use grpc_handler_generator_common::to_file_token;
///
/// assert_eq!(to_file_token("SignUp"), "sign_up");
/// assert_eq!(to_file_token("HTTPRequest"), "http_request");
/// assert_eq!(to_file_token("OurAPI"), "our_api");
/// ```
pub fn to_file_token(identifier: &str) -> String {
    let snake = FIRST_CAP.replace_all(identifier, "${1}_${2}");
    let snake = ALL_CAP.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase()
}

/// `<token>_handler.<ext>`
pub fn handler_file_name(rpc_name: &str, extension: &str) -> String {
    format!("{}_handler.{}", to_file_token(rpc_name), extension)
}

/// `<token>_handler_test.<ext>`
pub fn handler_test_file_name(rpc_name: &str, extension: &str) -> String {
    format!("{}_handler_test.{}", to_file_token(rpc_name), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_file_token() {
        let cases = [
            ("", ""),
            ("already_snake", "already_snake"),
            ("A", "a"),
            ("AA", "aa"),
            ("AaAa", "aa_aa"),
            ("SignUp", "sign_up"),
            ("JungWinter", "jung_winter"),
            ("HTTPRequest", "http_request"),
            ("OurAPI", "our_api"),
        ];

        for (given, expected) in cases {
            assert_eq!(to_file_token(given), expected, "input: {given:?}");
        }
    }

    #[test]
    fn test_to_file_token_is_idempotent() {
        for input in ["SignIn", "HTTPRequest", "OurAPI", "GetV2Status", "already_snake", "X"] {
            let once = to_file_token(input);
            assert_eq!(to_file_token(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_digits_before_capital_split() {
        assert_eq!(to_file_token("GetV2Status"), "get_v2_status");
    }

    #[test]
    fn test_handler_file_names() {
        assert_eq!(handler_file_name("SignIn", "go"), "sign_in_handler.go");
        assert_eq!(handler_test_file_name("SignIn", "go"), "sign_in_handler_test.go");
        assert_eq!(handler_file_name("HTTPRequest", "rs"), "http_request_handler.rs");
    }
}
