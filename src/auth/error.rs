// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Request-time failures all map to HTTP 401 with one generic body: the
//! specific reason would help an attacker probe token forgery, so it is kept
//! for server logs only. Issuance-time faults are infrastructure problems and
//! map to HTTP 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Generic body for every 401 rejection.
const GENERIC_UNAUTHORIZED: &str = "invalid or missing credentials";
/// Generic body for issuance-time faults.
const GENERIC_SERVER_FAULT: &str = "internal authentication error";

/// Authentication error type.
#[derive(Debug)]
pub enum AuthError {
    /// No Authorization header present.
    MissingAuthHeader,
    /// Authorization header is not exactly `Bearer <credential>`.
    MalformedAuthHeader,
    /// Token failed atomic decryption/authentication or did not deserialize.
    InvalidToken,
    /// Token expiration instant has been reached.
    TokenExpired,
    /// Issuance was asked to encode an empty subject.
    InvalidSubject,
    /// The underlying authenticated-encryption operation failed.
    EncryptionFailure(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::MalformedAuthHeader
            | AuthError::InvalidToken
            | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::InvalidSubject | AuthError::EncryptionFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message exposed to the caller. Deliberately uniform across all
    /// rejection reasons; see the module docs.
    fn public_message(&self) -> &'static str {
        match self.status_code() {
            StatusCode::UNAUTHORIZED => GENERIC_UNAUTHORIZED,
            _ => GENERIC_SERVER_FAULT,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingAuthHeader => write!(f, "Authorization header is required"),
            AuthError::MalformedAuthHeader => {
                write!(f, "Authorization header format must be 'Bearer <token>'")
            }
            AuthError::InvalidToken => write!(f, "Token failed authentication"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::InvalidSubject => write!(f, "Cannot issue a token for an empty subject"),
            AuthError::EncryptionFailure(msg) => write!(f, "Token encryption failed: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.public_message().to_string(),
        });
        (status, body).into_response()
    }
}
