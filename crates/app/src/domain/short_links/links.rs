//! URL building, token generation and the public path rewrite.

use rand::{rngs::OsRng, seq::SliceRandom};

use crate::domain::recipes::records::RecipeUuid;

/// Length of every short link token.
pub const TOKEN_LENGTH: usize = 7;

/// Characters a token is drawn from.
pub const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest long URL the store accepts.
pub const LONG_URL_MAX_LENGTH: usize = 255;

/// Where short links point and how long URLs are spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkSettings {
    /// Scheme and host short URLs are served from, e.g. `https://larder.example`.
    pub public_base_url: String,
    /// Path prefix of the JSON API, e.g. `/api`. Stripped when resolving.
    pub api_prefix: String,
}

impl ShortLinkSettings {
    /// Trailing slashes are dropped from both parts. A non-empty prefix always gets a
    /// single leading slash so long URLs stay absolute paths.
    #[must_use]
    pub fn new(public_base_url: &str, api_prefix: &str) -> Self {
        let api_prefix = api_prefix.trim().trim_matches('/');

        Self {
            public_base_url: public_base_url.trim().trim_end_matches('/').to_string(),
            api_prefix: if api_prefix.is_empty() {
                String::new()
            } else {
                format!("/{api_prefix}")
            },
        }
    }

    /// Canonical long URL of a recipe: `{api_prefix}/recipes/{uuid}/`.
    #[must_use]
    pub fn recipe_long_url(&self, recipe: RecipeUuid) -> String {
        format!("{}/recipes/{recipe}/", self.api_prefix)
    }

    /// Public short URL for a token: `{public_base_url}/s/{token}`.
    #[must_use]
    pub fn short_url(&self, token: &str) -> String {
        format!("{}/s/{token}", self.public_base_url)
    }

    /// Rewrite a stored long URL into the path a browser should be sent to.
    #[must_use]
    pub fn public_path(&self, long_url: &str) -> String {
        if self.api_prefix.is_empty() {
            return long_url.to_string();
        }

        match long_url.strip_prefix(self.api_prefix.as_str()) {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => long_url.to_string(),
        }
    }
}

/// Draw a fresh token from the operating system RNG.
#[must_use]
pub fn generate_token() -> String {
    (0..TOKEN_LENGTH)
        .filter_map(|_| TOKEN_ALPHABET.choose(&mut OsRng))
        .map(|&b| char::from(b))
        .collect()
}

/// Only seven ASCII letters can ever have been issued.
#[must_use]
pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == TOKEN_LENGTH && token.bytes().all(|b| b.is_ascii_alphabetic())
}
