//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Method routers carry their own `not_found` fallback so that a known path
/// with an unhandled verb (e.g. `POST /cards/1`) gets the same 404 body as an
/// unknown path, instead of axum's default 405.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route(
            "/cards",
            get(handlers::list_cards)
                .post(handlers::create_card)
                .fallback(handlers::not_found),
        )
        .route(
            "/cards/:id",
            get(handlers::get_card)
                .put(handlers::replace_card)
                .patch(handlers::patch_card)
                .delete(handlers::delete_card)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
        .with_state(state)
}
