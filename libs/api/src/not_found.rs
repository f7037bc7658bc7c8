use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::response::ErrorResp;

pub(super) async fn get_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResp {
            detail: "Not Found".to_string(),
        }),
    )
}
