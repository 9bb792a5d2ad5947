//! AWS connection configuration.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::env;

/// Connection settings for the Lex Models V2 client.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// AWS region
    pub region: Option<String>,
    /// Named credentials profile
    pub profile: Option<String>,
    /// Endpoint URL override
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Resolve connection settings from flag values, falling back to the
    /// environment when a flag was not given.
    pub fn resolve(
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        Self {
            region: region.or_else(|| env::var("AWS_REGION").ok()),
            profile: profile.or_else(|| env::var("AWS_PROFILE").ok()),
            endpoint_url: endpoint_url
                .or_else(|| env::var("AWS_ENDPOINT_URL_LEX_MODELS_V2").ok()),
        }
    }

    /// Load the shared AWS configuration with these settings applied.
    pub async fn load(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }
}
