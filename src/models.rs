// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request carrying the credential pair to check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: the freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Opaque PASETO v4.local token, valid for one hour.
    pub token: String,
}

/// Response from the demo protected route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrivateResponse {
    pub message: String,
    /// The verified token subject.
    pub subject: String,
}
