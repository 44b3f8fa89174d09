pub mod error;
pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityStore;

/// Assemble the full application router around a store instance.
///
/// Main and the integration tests both go through here, so tests exercise
/// the exact production routing with a store of their own.
pub fn app(store: ActivityStore) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/health", get(routes::health::health_handler))
        .route("/activities", get(routes::activities::list_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/participants/:email",
            delete(routes::activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
