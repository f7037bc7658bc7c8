use axum::{routing::get_service, Router};
use tower_http::services::{ServeDir, ServeFile};
use util::Paths;

const LOGIN_PAGE: &str = "login.html";
const TABULATION_PAGE: &str = "tabulation-head.html";

/// HTML documents and static assets, served byte for byte. Missing files
/// answer with the plain 404 of `tower-http`.
pub(crate) fn router(paths: &Paths) -> Router {
    Router::new()
        .route(
            "/",
            get_service(ServeFile::new(paths.templates_dir.join(LOGIN_PAGE))),
        )
        .route(
            "/tabulation-head",
            get_service(ServeFile::new(
                paths.templates_dir.join(TABULATION_PAGE),
            )),
        )
        .nest_service("/static", ServeDir::new(&paths.static_dir))
}
