use std::{collections::HashMap, sync::OnceLock};

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

pub(crate) const GENERIC_SERVER_ERROR: &str = "Database connection failed";

static ERROR_CODES: OnceLock<HashMap<String, String>> = OnceLock::new();

#[derive(Serialize, ToSchema)]
pub struct ErrorResp {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, detail) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status_code, Json(ErrorResp { detail })).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for repository::Response<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(error_code, operation = operation(error_code), "{:?}", e);
            ApiError::ServerError(GENERIC_SERVER_ERROR.to_string())
        })
    }
}

/// What the request was doing when the store failed. Logged only; clients
/// always see the generic detail.
fn operation(error_code: &str) -> &'static str {
    let errors = ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or_default()
    });

    errors
        .get(error_code)
        .map(String::as_str)
        .unwrap_or("unknown operation")
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors: HashMap<String, String> =
            serde_json::from_str(include_str!("error-code.json")).unwrap();

        let operations: HashSet<_> = errors.values().collect();

        assert!(errors.keys().all(|code| code.starts_with("500-")));
        assert_eq!(operations.len(), errors.len());
    }

    #[test]
    fn test_operation_lookup() {
        assert_eq!(operation("500-001"), "failed to create event");
        assert_eq!(operation("500-999"), "unknown operation");
    }
}
