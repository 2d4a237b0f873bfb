//! Short Link Records

use jiff::Timestamp;

/// Stored mapping from token to long URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkRecord {
    pub token: String,
    pub long_url: String,
    pub created_at: Timestamp,
}

/// An issued short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub token: String,
    pub long_url: String,
    pub short_url: String,
}
