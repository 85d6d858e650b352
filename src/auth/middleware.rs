// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! The gate runs before every protected handler. Per-request flow:
//!
//! 1. extract the `Authorization` header; missing → rejected
//! 2. split into scheme and credential on the first space; require exactly
//!    two parts with the literal scheme `Bearer`; otherwise rejected, before
//!    any decryption is attempted
//! 3. verify the credential with [`TokenVerifier`]
//! 4. on success, bind the subject into the request extensions as
//!    [`RequestIdentity`] and continue; on any failure, respond 401 and never
//!    run the handler
//!
//! Apply with `axum::middleware::from_fn_with_state(state, require_auth)` on
//! the protected router subtree.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::claims::{Claims, RequestIdentity};
use super::error::AuthError;
use super::token::TokenVerifier;
use crate::state::AppState;

/// Bearer scheme literal; matched case-sensitively.
const BEARER_SCHEME: &str = "Bearer";

/// Authentication middleware function.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &state.verifier) {
        Ok(claims) => {
            request.extensions_mut().insert(RequestIdentity::from(claims));
            next.run(request).await
        }
        Err(err) => {
            // The response body stays generic; the reason is log-only.
            tracing::debug!(reason = %err, "rejected unauthenticated request");
            err.into_response()
        }
    }
}

/// Run the gate's header-parsing and verification steps against a header map.
///
/// Shared by the middleware and the [`Auth`] extractor so both paths enforce
/// identical parsing rules.
///
/// [`Auth`]: super::Auth
pub(crate) fn authenticate(
    headers: &HeaderMap,
    verifier: &TokenVerifier,
) -> Result<Claims, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader)?;

    let (scheme, credential) = header
        .split_once(' ')
        .ok_or(AuthError::MalformedAuthHeader)?;

    // Exactly two parts: a lone "Bearer", a trailing space, or any further
    // space in the credential is malformed. Tokens never contain spaces.
    if scheme != BEARER_SCHEME || credential.is_empty() || credential.contains(' ') {
        return Err(AuthError::MalformedAuthHeader);
    }

    verifier.verify(credential)
}
