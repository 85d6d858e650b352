// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{SecretKey, TokenIssuer, TokenVerifier};
use crate::credentials::CredentialStore;

/// Shared application state.
///
/// The secret key is injected once here and reaches the issuer and verifier
/// by `Arc` ownership; there is no global key and tests can substitute their
/// own. Everything inside is immutable after construction, so clones are
/// cheap and concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(key: SecretKey, credentials: Arc<dyn CredentialStore>) -> Self {
        let key = Arc::new(key);
        Self {
            issuer: TokenIssuer::new(Arc::clone(&key)),
            verifier: TokenVerifier::new(key),
            credentials,
        }
    }
}
