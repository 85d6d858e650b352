// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and the per-request identity they bind to.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The structured identity and expiry data carried inside a token.
///
/// Serialized as the PASETO registered JSON claims (`sub`, `iat`, `exp`) with
/// RFC 3339 timestamps; this is the plaintext that gets authenticated-encrypted
/// into the token payload.
///
/// Invariant: `expiration > issued_at`, enforced at construction by the fixed
/// positive token lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated identity, non-empty.
    #[serde(rename = "sub")]
    pub subject: String,

    /// When the token was issued.
    #[serde(rename = "iat")]
    pub issued_at: DateTime<Utc>,

    /// When the token stops being valid (exclusive instant).
    #[serde(rename = "exp")]
    pub expiration: DateTime<Utc>,

    /// Optional companion data travelling outside the encrypted payload,
    /// authenticated but not encrypted. Unused here; always empty.
    #[serde(skip)]
    pub footer: Option<String>,
}

impl Claims {
    /// Build claims for a fresh token: `iat = issued_at`, `exp = iat + lifetime`.
    pub(crate) fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            subject: subject.into(),
            issued_at,
            expiration: issued_at + lifetime,
            footer: None,
        }
    }

    /// Whether the token is expired at `now`.
    ///
    /// Expiration is exclusive: the token is valid up to and excluding its
    /// expiration instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiration
    }
}

/// Identity bound to a request after successful token verification.
///
/// Inserted into the request's extensions by the auth middleware and read by
/// the [`Auth`] extractor; scoped to the single request, never persisted.
///
/// [`Auth`]: super::Auth
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    /// The verified `sub` claim.
    pub subject: String,
}

impl From<Claims> for RequestIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.subject,
        }
    }
}
