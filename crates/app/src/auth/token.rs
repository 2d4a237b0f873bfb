//! API token generation and hashing.

use std::fmt::{self, Write as _};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// API token prefix.
pub const API_TOKEN_PREFIX: &str = "lr_";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

/// Raw bearer token. Shown once at issuance, never stored.
#[derive(Clone)]
pub struct ApiToken {
    value: String,
}

impl ApiToken {
    /// Generate a new token from the operating system RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        let mut value =
            String::with_capacity(API_TOKEN_PREFIX.len() + API_TOKEN_SECRET_HEX_CHARS);

        value.push_str(API_TOKEN_PREFIX);

        for byte in &bytes {
            _ = write!(value, "{byte:02x}");
        }

        bytes.zeroize();

        Self { value }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Digest stored in place of the token.
    #[must_use]
    pub fn hash(&self) -> String {
        hash_token(&self.value)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(**redacted**)")
    }
}

impl Drop for ApiToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Hex-encoded SHA-256 digest of a bearer token.
#[must_use]
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

/// Cheap shape check so obviously malformed bearer values never reach the store.
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    token.strip_prefix(API_TOKEN_PREFIX).is_some_and(|secret| {
        secret.len() == API_TOKEN_SECRET_HEX_CHARS
            && secret
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    })
}
