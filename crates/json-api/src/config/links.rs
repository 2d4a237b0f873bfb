//! Links Config

use clap::Args;

use larder_app::domain::short_links::ShortLinkSettings;

/// Public URL settings used to build and resolve short links.
#[derive(Debug, Args)]
pub struct LinksConfig {
    /// Scheme and host short links are served from
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:8698")]
    pub public_base_url: String,

    /// Path prefix the JSON API is mounted under
    #[arg(long, env = "API_PREFIX", default_value = "/api")]
    pub api_prefix: String,
}

impl LinksConfig {
    /// Settings handed to the short link service.
    #[must_use]
    pub fn short_link_settings(&self) -> ShortLinkSettings {
        ShortLinkSettings::new(&self.public_base_url, &self.api_prefix)
    }

    /// The API prefix as a router path, without surrounding slashes.
    #[must_use]
    pub fn api_mount_path(&self) -> &str {
        self.api_prefix.trim_matches('/')
    }
}
