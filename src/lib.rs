//! Election tracking REST API: candidates, parties, voters and votes over a
//! single SQLite database.

use crate::startup::AppState;
use axum::{
    Router,
    extract::Extension,
    http::{
        Method, StatusCode,
        header::{ACCEPT, CONTENT_TYPE},
    },
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate tracing;

pub mod candidates;
pub mod config;
pub mod db;
pub mod error;
pub mod parties;
pub mod startup;
pub mod validation;
pub mod voters;
pub mod votes;

/// Routes mounted under `/api`.
fn api_routes() -> Router {
    Router::new()
        .route(
            "/candidates",
            get(candidates::list_candidates).fallback(handler_404),
        )
        .route(
            "/candidate",
            post(candidates::create_candidate).fallback(handler_404),
        )
        .route(
            "/candidate/:id",
            get(candidates::get_candidate)
                .put(candidates::update_candidate_party)
                .delete(candidates::delete_candidate)
                .fallback(handler_404),
        )
        .route(
            "/parties",
            get(parties::list_parties).fallback(handler_404),
        )
        .route(
            "/party",
            post(parties::create_party).fallback(handler_404),
        )
        .route(
            "/party/:id",
            get(parties::get_party)
                .delete(parties::delete_party)
                .fallback(handler_404),
        )
        .route("/voters", get(voters::list_voters).fallback(handler_404))
        .route(
            "/voter",
            post(voters::register_voter).fallback(handler_404),
        )
        .route(
            "/voter/:id",
            get(voters::get_voter)
                .put(voters::update_voter_email)
                .delete(voters::delete_voter)
                .fallback(handler_404),
        )
        .route(
            "/vote",
            post(votes::cast_vote)
                .get(votes::tally_votes)
                .fallback(handler_404),
        )
}

/// Build the whole application around an already opened database.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handler_404)
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_credentials(true)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([CONTENT_TYPE, ACCEPT]),
        )
}

/// Anything the router does not know gets a bare 404.
async fn handler_404() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
