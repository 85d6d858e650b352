// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The process-wide symmetric token key.
//!
//! Loaded once from the environment at startup; immutable thereafter. No
//! request can be safely served without it, so a missing or mis-sized key is
//! a fatal startup condition, never a recoverable runtime error.

use std::{env, fmt};

use rusty_paseto::core::{Key, Local, PasetoSymmetricKey, V4};

use crate::config::SECRET_KEY_ENV;

/// Required key length in bytes (PASETO v4.local symmetric key).
pub const SECRET_KEY_LEN: usize = 32;

/// Error raised when the key material cannot be loaded at startup.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The environment variable is not set.
    #[error("PASETO_SECRET_KEY environment variable is required")]
    Missing,
    /// The key material has the wrong length.
    #[error("PASETO_SECRET_KEY must be exactly 32 bytes, got {0}")]
    WrongLength(usize),
}

/// The symmetric key used for all token encryption and decryption.
///
/// Constructed once at startup and handed by `Arc` to [`TokenIssuer`] and
/// [`TokenVerifier`]; no other component reads it. The raw bytes are never
/// exposed outside this module.
///
/// [`TokenIssuer`]: super::TokenIssuer
/// [`TokenVerifier`]: super::TokenVerifier
#[derive(Clone)]
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Load the key from the `PASETO_SECRET_KEY` environment variable.
    ///
    /// Callers treat a failure here as fatal and exit the process.
    pub fn load() -> Result<Self, KeyError> {
        let raw = env::var(SECRET_KEY_ENV).map_err(|_| KeyError::Missing)?;
        Self::try_from(raw.as_bytes())
    }

    /// The key in the form the PASETO cipher expects.
    ///
    /// Crate-private: only the issuer and verifier may reach the key material.
    pub(crate) fn cipher_key(&self) -> PasetoSymmetricKey<V4, Local> {
        PasetoSymmetricKey::from(Key::from(&self.0))
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; SECRET_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| KeyError::WrongLength(bytes.len()))?;
        Ok(SecretKey(key))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material, even in debug output.
        f.write_str("SecretKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_exactly_32_bytes() {
        assert!(SecretKey::try_from(&[0u8; 32][..]).is_ok());
        assert!(matches!(
            SecretKey::try_from(&[0u8; 31][..]),
            Err(KeyError::WrongLength(31))
        ));
        assert!(matches!(
            SecretKey::try_from(&[0u8; 33][..]),
            Err(KeyError::WrongLength(33))
        ));
        assert!(matches!(
            SecretKey::try_from(&[][..]),
            Err(KeyError::WrongLength(0))
        ));
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = SecretKey::try_from(&[7u8; 32][..]).unwrap();
        assert_eq!(format!("{key:?}"), "SecretKey(..)");
    }

    // Single test for all env states: the variable is process-global, so the
    // missing/short/valid sequence must not run as separate parallel tests.
    #[test]
    fn load_requires_well_formed_env_key() {
        std::env::remove_var(SECRET_KEY_ENV);
        assert!(matches!(SecretKey::load(), Err(KeyError::Missing)));

        std::env::set_var(SECRET_KEY_ENV, "short");
        assert!(matches!(SecretKey::load(), Err(KeyError::WrongLength(5))));

        std::env::set_var(SECRET_KEY_ENV, "0123456789abcdef0123456789abcdef");
        assert!(SecretKey::load().is_ok());

        std::env::remove_var(SECRET_KEY_ENV);
    }
}
