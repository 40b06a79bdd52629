//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Handlers parse the request,
//! call one service method and shape the response.

pub mod health;
pub mod language;
pub mod matches;
pub mod message;
pub mod profile;
pub mod user;

use crate::shared::error::AppError;

/// Parse a numeric path segment, naming the entity in the error.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", entity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "match").unwrap(), 42);
        match parse_id("abc", "match") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid match ID"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
