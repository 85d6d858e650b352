// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the verified request identity.
//!
//! Use the `Auth` extractor in handlers behind the auth middleware:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(identity): Auth) -> impl IntoResponse {
//!     // identity.subject is the verified token subject
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};

use super::claims::RequestIdentity;
use super::error::AuthError;
use super::middleware;
use crate::state::AppState;

/// Extractor for the authenticated identity.
///
/// Prefers the [`RequestIdentity`] the middleware already bound into the
/// request extensions; when used on a route without the middleware it runs
/// the same header-parsing and verification steps itself, so both paths
/// enforce identical rules.
pub struct Auth(pub RequestIdentity);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<RequestIdentity>().cloned() {
            return Ok(Auth(identity));
        }

        let claims = middleware::authenticate(&parts.headers, &state.verifier)?;
        Ok(Auth(claims.into()))
    }
}
