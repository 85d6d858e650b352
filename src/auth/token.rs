// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and verification (PASETO v4.local).
//!
//! Both sides share the single [`SecretKey`] and hold no other state: issuing
//! a token is a pure computation, and verifying one is idempotent: the same
//! token yields the same result until its expiration instant passes.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rusty_paseto::core::{Key, Local, Paseto, PasetoNonce, Payload, V4};

use super::claims::Claims;
use super::error::AuthError;
use super::key::SecretKey;

/// Fixed token lifetime: one hour from issuance.
pub const TOKEN_TTL_SECS: i64 = 3_600;

/// Builds and encrypts a claims payload into an opaque token string.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    key: Arc<SecretKey>,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(key: Arc<SecretKey>) -> Self {
        Self {
            key,
            lifetime: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    /// Issue a token for an authenticated, non-empty subject.
    ///
    /// The claims carry `iat = now` and `exp = now + 1h`, an empty footer, and
    /// are authenticated-encrypted into a `v4.local.` token string.
    pub fn generate(&self, subject: &str) -> Result<String, AuthError> {
        self.generate_at(subject, Utc::now())
    }

    /// Issue a token with an injected clock. Test seam; `generate` is the
    /// production entry point.
    pub(crate) fn generate_at(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        if subject.is_empty() {
            // Upstream contract violation: the credential check must hand us
            // a non-empty identity.
            return Err(AuthError::InvalidSubject);
        }

        let claims = Claims::new(subject, now, self.lifetime);
        let payload = serde_json::to_string(&claims)
            .map_err(|err| AuthError::EncryptionFailure(err.to_string()))?;

        let nonce = Key::<32>::try_new_random()
            .map_err(|err| AuthError::EncryptionFailure(err.to_string()))?;
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        Paseto::<V4, Local>::default()
            .set_payload(Payload::from(payload.as_str()))
            .try_encrypt(&self.key.cipher_key(), &nonce)
            .map_err(|err| AuthError::EncryptionFailure(err.to_string()))
    }
}

/// Decrypts a token, authenticates its integrity, and checks expiry.
///
/// Holds no mutable state; safe to invoke concurrently without
/// synchronization.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    key: Arc<SecretKey>,
}

impl TokenVerifier {
    pub fn new(key: Arc<SecretKey>) -> Self {
        Self { key }
    }

    /// Verify a token and return its claims.
    ///
    /// Decryption and authentication happen in one atomic operation: a
    /// malformed string, a wrong version tag, a mismatched authentication tag
    /// or an undeserializable payload all surface as [`AuthError::InvalidToken`]
    /// without ever exposing untrusted plaintext. A token whose expiration
    /// instant has been reached fails with [`AuthError::TokenExpired`].
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify with an injected clock. Test seam; `verify` is the production
    /// entry point.
    pub(crate) fn verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, AuthError> {
        let payload = Paseto::<V4, Local>::try_decrypt(token, &self.key.cipher_key(), None, None)
            .map_err(|_| AuthError::InvalidToken)?;

        let claims: Claims =
            serde_json::from_str(&payload).map_err(|_| AuthError::InvalidToken)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Arc<SecretKey> {
        Arc::new(SecretKey::try_from(&b"0123456789abcdef0123456789abcdef"[..]).unwrap())
    }

    fn issuer_and_verifier() -> (TokenIssuer, TokenVerifier) {
        let key = test_key();
        (TokenIssuer::new(Arc::clone(&key)), TokenVerifier::new(key))
    }

    #[test]
    fn round_trip_preserves_subject_and_lifetime() {
        let (issuer, verifier) = issuer_and_verifier();

        let token = issuer.generate("alice").expect("issue token");
        assert!(token.starts_with("v4.local."));

        let claims = verifier.verify(&token).expect("verify token");
        assert_eq!(claims.subject, "alice");
        assert_eq!(
            claims.expiration - claims.issued_at,
            Duration::seconds(TOKEN_TTL_SECS)
        );
        assert!(claims.footer.is_none());
    }

    #[test]
    fn reverification_is_idempotent() {
        let (issuer, verifier) = issuer_and_verifier();
        let token = issuer.generate("alice").unwrap();

        let first = verifier.verify(&token).unwrap();
        let second = verifier.verify(&token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_subject_is_rejected() {
        let (issuer, _) = issuer_and_verifier();
        assert!(matches!(
            issuer.generate(""),
            Err(AuthError::InvalidSubject)
        ));
    }

    #[test]
    fn expired_token_fails_with_token_expired() {
        let (issuer, verifier) = issuer_and_verifier();

        let issued = Utc::now() - Duration::hours(2);
        let token = issuer.generate_at("alice", issued).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn expiration_boundary_is_exclusive() {
        let (issuer, verifier) = issuer_and_verifier();

        let issued = Utc::now();
        let expiration = issued + Duration::seconds(TOKEN_TTL_SECS);
        let token = issuer.generate_at("alice", issued).unwrap();

        // Strictly before the expiration instant: valid.
        let claims = verifier
            .verify_at(&token, expiration - Duration::seconds(1))
            .expect("token valid before expiration");
        assert_eq!(claims.subject, "alice");

        // At the expiration instant and beyond: expired.
        assert!(matches!(
            verifier.verify_at(&token, expiration),
            Err(AuthError::TokenExpired)
        ));
        assert!(matches!(
            verifier.verify_at(&token, expiration + Duration::seconds(1)),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn tampering_with_any_region_fails_authentication() {
        let (issuer, verifier) = issuer_and_verifier();
        let token = issuer.generate("alice").unwrap();

        // Corrupt one character in the version header, early payload, middle
        // (ciphertext) and tail (authentication tag) regions.
        let positions = [0, 3, 12, token.len() / 2, token.len() - 1];
        for &pos in &positions {
            let mut tampered: Vec<char> = token.chars().collect();
            tampered[pos] = if tampered[pos] == 'A' { 'B' } else { 'A' };
            let tampered: String = tampered.into_iter().collect();

            assert!(
                matches!(verifier.verify(&tampered), Err(AuthError::InvalidToken)),
                "byte {pos} flip must fail authentication"
            );
        }
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let (issuer, _) = issuer_and_verifier();
        let token = issuer.generate("alice").unwrap();

        let other_key =
            Arc::new(SecretKey::try_from(&b"ffffffffffffffffffffffffffffffff"[..]).unwrap());
        let other_verifier = TokenVerifier::new(other_key);

        assert!(matches!(
            other_verifier.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn malformed_tokens_fail_without_panicking() {
        let (_, verifier) = issuer_and_verifier();

        for garbage in [
            "",
            "not-a-token",
            "v4.local.",
            "v4.local.%%%%",
            "v2.local.AAAAAAAA",
            "v4.public.AAAAAAAA",
        ] {
            assert!(
                matches!(verifier.verify(garbage), Err(AuthError::InvalidToken)),
                "{garbage:?} must be rejected as invalid"
            );
        }
    }

    #[test]
    fn concurrent_verifications_agree() {
        let (issuer, verifier) = issuer_and_verifier();
        let token = issuer.generate("alice").unwrap();

        let expected = verifier.verify(&token).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let verifier = verifier.clone();
                let token = token.clone();
                std::thread::spawn(move || verifier.verify(&token).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
