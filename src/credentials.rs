// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential verification for the login endpoint.
//!
//! The auth core only defines the boundary contract: credentials in, subject
//! out. [`CredentialStore`] is the seam for a real user store; the shipped
//! [`StaticCredentials`] is a placeholder holding a single pair seeded from
//! the environment.

use std::env;

use crate::config::{SEED_PASSWORD_ENV, SEED_USERNAME_ENV};

/// Pluggable credential check consumed by the login endpoint.
///
/// Implementations return the canonical subject for a valid pair and `None`
/// otherwise. A returned subject must be non-empty; it becomes the `sub`
/// claim of the issued token.
pub trait CredentialStore: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Option<String>;
}

/// Single-pair placeholder credential store.
///
/// TODO: replace with a user-store backed implementation once one exists;
/// every deployment so far only needs the seeded demo pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read the seeded pair from `SEED_USERNAME`/`SEED_PASSWORD`.
    ///
    /// Returns `None` when either is unset, in which case login rejects every
    /// attempt.
    pub fn from_env() -> Option<Self> {
        let username = env::var(SEED_USERNAME_ENV).ok()?;
        let password = env::var(SEED_PASSWORD_ENV).ok()?;
        Some(Self::new(username, password))
    }
}

impl CredentialStore for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> Option<String> {
        // An empty username can never become a token subject.
        if username.is_empty() {
            return None;
        }

        (self.username == username && self.password == password).then(|| username.to_string())
    }
}
