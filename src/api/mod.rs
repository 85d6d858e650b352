// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::require_auth,
    models::{LoginRequest, PrivateResponse, TokenResponse},
    state::AppState,
};

pub mod health;
pub mod login;
pub mod protected;

pub fn router(state: AppState) -> Router {
    // The gate wraps only this subtree; login and health stay public.
    let protected_routes = Router::new()
        .route("/private", get(protected::private_route))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let v1_routes = Router::new()
        .route("/login", post(login::login))
        .merge(protected_routes);

    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(health::health))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(login::login, protected::private_route, health::health),
    components(
        schemas(
            LoginRequest,
            TokenResponse,
            PrivateResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Credential check and token issuance"),
        (name = "Protected", description = "Endpoints requiring a bearer token"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;
