use crate::errors::IntoErrorResponse;
use handeval_engine::category::Category;
use handeval_engine::errors::HandError;
use handeval_engine::hand::Hand;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluateResponse {
    pub rank: Category,
}

/// Failures of `POST /api`. All of them are client errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Invalid Request: expected 'cards' key with an array of cards")]
    InvalidRequest,
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl IntoErrorResponse for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_code(&self) -> Option<&'static str> {
        Some(match self {
            ApiError::InvalidJson => "invalid_json",
            ApiError::InvalidRequest => "invalid_request",
            ApiError::Hand(e) => e.code(),
        })
    }

    fn error_message(&self) -> String {
        self.to_string()
    }

    fn error_details(&self) -> Option<Value> {
        match self {
            ApiError::Hand(HandError::InvalidCard { cards })
            | ApiError::Hand(HandError::NonUniqueCards { cards }) => {
                Some(json!({ "cards": cards }))
            }
            ApiError::Hand(HandError::InvalidNumberOfCards { expected, actual }) => {
                Some(json!({ "expected": expected, "actual": actual }))
            }
            _ => None,
        }
    }
}

/// Evaluates the hand posted to the API.
///
/// # HTTP Method and Path
/// - **Method**: POST
/// - **Path**: `/api`
///
/// # Request Format
/// ```json
/// { "cards": ["2H", "KC", "4D", "10S", "AH"] }
/// ```
///
/// Array elements that are not strings are kept as their JSON text, so
/// `[2, "KC", ...]` reports `2` as an invalid card.
///
/// # Response Format
/// - **Success (200 OK)**: `{"rank": "High Card"}`
/// - **Error (400)**: `{"error": <message>, "code": <code>, "details": {...}}`
///
/// # Error Cases
/// - `invalid_json`: the body is not JSON
/// - `invalid_request`: no `cards` key, or it is not an array
/// - `invalid_card`, `non_unique_cards`, `invalid_number_of_cards`: the
///   hand failed validation
pub fn evaluate(body: &[u8]) -> Response {
    match evaluate_body(body) {
        Ok(response) => {
            tracing::debug!(rank = %response.rank, "hand evaluated");
            reply::with_status(reply::json(&response), StatusCode::OK).into_response()
        }
        Err(err) => err.into_http_response(),
    }
}

pub fn evaluate_body(body: &[u8]) -> Result<EvaluateResponse, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
    let cards = value
        .get("cards")
        .and_then(Value::as_array)
        .ok_or(ApiError::InvalidRequest)?;

    let tokens: Vec<String> = cards
        .iter()
        .map(|card| match card {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    let hand = Hand::from_tokens(&tokens)?;
    Ok(EvaluateResponse {
        rank: hand.category(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_a_valid_hand() {
        let response = evaluate_body(br#"{"cards": ["2H", "KC", "4D", "10S", "AH"]}"#).unwrap();
        assert_eq!(response.rank, Category::HighCard);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"rank": "High Card"})
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(evaluate_body(b"{cards:"), Err(ApiError::InvalidJson));
        assert_eq!(evaluate_body(b""), Err(ApiError::InvalidJson));
    }

    #[test]
    fn rejects_missing_or_non_array_cards() {
        for body in [
            &br#"{}"#[..],
            br#"{"cards": "2H KC 4D 10S AH"}"#,
            br#"["2H", "KC", "4D", "10S", "AH"]"#,
            br#"null"#,
        ] {
            assert_eq!(evaluate_body(body), Err(ApiError::InvalidRequest));
        }
    }

    #[test]
    fn non_string_elements_are_invalid_cards() {
        let err = evaluate_body(br#"{"cards": [2, "KC", null, "10S", "AH"]}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Hand(HandError::InvalidCard {
                cards: vec!["2".into(), "null".into()]
            })
        );
    }

    #[test]
    fn hand_errors_carry_code_and_details() {
        let err = evaluate_body(br#"{"cards": ["2H", "2H", "3H", "4H", "5H"]}"#).unwrap_err();
        let body = err.to_error_response();
        assert_eq!(body.code.as_deref(), Some("non_unique_cards"));
        assert_eq!(body.error, "The following cards are duplicated: 2H");
        assert_eq!(body.details, Some(json!({"cards": ["2H"]})));

        let err = evaluate_body(br#"{"cards": ["2H"]}"#).unwrap_err();
        assert_eq!(
            err.error_details(),
            Some(json!({"expected": 5, "actual": 1}))
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
