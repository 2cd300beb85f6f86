//! Responses for requests that no route accepted.

use crate::errors::IntoErrorResponse;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, Rejection};
use warp::reply::Response;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    NotFound,
    MethodNotAllowed,
    Internal(String),
}

impl RoutingError {
    pub fn from_rejection(rejection: &Rejection) -> Self {
        if rejection.is_not_found() {
            RoutingError::NotFound
        } else if rejection.find::<MethodNotAllowed>().is_some() {
            RoutingError::MethodNotAllowed
        } else {
            RoutingError::Internal(format!("{:?}", rejection))
        }
    }
}

impl IntoErrorResponse for RoutingError {
    fn status_code(&self) -> StatusCode {
        match self {
            RoutingError::NotFound => StatusCode::NOT_FOUND,
            // the HTTP contract reports wrong methods as plain bad requests
            RoutingError::MethodNotAllowed => StatusCode::BAD_REQUEST,
            RoutingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_message(&self) -> String {
        match self {
            RoutingError::NotFound => "Not found".to_string(),
            RoutingError::MethodNotAllowed => "Method not allowed".to_string(),
            RoutingError::Internal(detail) => format!("Internal server error: {}", detail),
        }
    }
}

pub async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    Ok(RoutingError::from_rejection(&rejection).into_http_response())
}
