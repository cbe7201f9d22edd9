//! Contest management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{middleware::auth_middleware, state::AppState};

/// Contest routes. Writes sit behind the admin token guard.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_contests))
        .route("/{id}", get(handler::get_contest))
        .route("/class/{class_level}", get(handler::list_contests_by_class))
        .route("/year/{year}", get(handler::list_contests_by_year));

    let protected = Router::new()
        .route("/", post(handler::create_contest))
        .route(
            "/{id}",
            put(handler::update_contest).delete(handler::delete_contest),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
