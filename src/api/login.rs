// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{LoginRequest, TokenResponse},
    state::AppState,
};

/// Login endpoint: check credentials, issue a bearer token.
///
/// The credential check is delegated to the configured [`CredentialStore`];
/// this handler only owns the boundary contract: subject in, token out.
///
/// [`CredentialStore`]: crate::credentials::CredentialStore
#[utoipa::path(
    post,
    path = "/v1/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Token issuance failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let subject = state
        .credentials
        .authenticate(&request.username, &request.password)
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let token = state.issuer.generate(&subject).map_err(|err| {
        // Infrastructure fault, not expected in normal operation.
        tracing::error!(error = %err, "token issuance failed");
        ApiError::internal("Failed to generate token")
    })?;

    Ok(Json(TokenResponse { token }))
}
