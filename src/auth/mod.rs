// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! This module provides stateless PASETO bearer-token authentication for the
//! Relational Auth API.
//!
//! ## Auth Flow
//!
//! 1. Client logs in with `POST /v1/login` (credential check)
//! 2. Server issues a PASETO v4.local token encrypted under the process-wide
//!    32-byte symmetric key
//! 3. Client sends `Authorization: Bearer <token>` on protected requests
//! 4. Server:
//!    - Decrypts and authenticates the token in one atomic operation
//!    - Checks expiry (tokens live for one hour)
//!    - Binds the `sub` claim to the request as [`RequestIdentity`]
//!
//! ## Security
//!
//! - The symmetric key is loaded once at startup and is immutable thereafter
//! - Tokens are authenticated-encrypted: tampering with any byte fails
//!   decryption atomically, never yielding partially-trusted claims
//! - Rejection responses carry one generic message; the specific reason is
//!   only visible in server logs
//! - No token store, no revocation: verification is pure and stateless

pub mod claims;
pub mod error;
pub mod extractor;
pub mod key;
pub mod middleware;
pub mod token;

pub use claims::{Claims, RequestIdentity};
pub use error::AuthError;
pub use extractor::Auth;
pub use key::{KeyError, SecretKey};
pub use middleware::require_auth;
pub use token::{TokenIssuer, TokenVerifier};
