use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, handlers::dispatch::handle_request, state::AppState};

/// Create the application router with all routes and middleware.
///
/// The API is a single endpoint: GET and POST on `/` are handled
/// identically, with the `action` query parameter selecting the operation.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for the API endpoint
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handle_request).post(handle_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
