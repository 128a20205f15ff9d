use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::SharedRegistry;

pub mod routes;

/// Builds the full application router over an injected registry.
///
/// The frontend lives under /static; the root issues a 307 so the
/// redirect survives non-GET-preserving clients unchanged.
pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route(
            "/activities",
            get(routes::activities::list_activities_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler)
                .delete(routes::activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
