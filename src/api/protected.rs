// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::{auth::Auth, models::PrivateResponse};

/// Demo protected route.
///
/// Only reachable through the auth gate; the handler itself never sees an
/// unauthenticated request.
#[utoipa::path(
    get,
    path = "/v1/private",
    tag = "Protected",
    responses(
        (status = 200, description = "Caller is authenticated", body = PrivateResponse),
        (status = 401, description = "Missing, malformed, invalid or expired bearer token")
    )
)]
pub async fn private_route(Auth(identity): Auth) -> Json<PrivateResponse> {
    Json(PrivateResponse {
        message: "Hello from a private route".to_string(),
        subject: identity.subject,
    })
}
