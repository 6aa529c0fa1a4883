mod client;
mod error;
mod tikwm;
mod types;
mod validate;

pub use client::Resolver;
pub use error::{ResolveError, Result};
pub use types::{Author, ResolvedMedia};
pub use validate::is_supported_link;

use crate::config::ApiConfig;
use tikwm::TikwmResolver;
use tracing::{info, warn};

pub struct LinkResolver {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl LinkResolver {
    pub fn new(config: &ApiConfig) -> Self {
        info!("Link resolver initialized - using tikwm metadata API");

        let resolvers: Vec<Box<dyn Resolver>> = vec![Box::new(TikwmResolver::new(config))];

        Self { resolvers }
    }

    /// Advisory client-side check; resolution can still fail upstream.
    #[allow(dead_code)]
    pub fn is_supported_url(&self, url: &str) -> bool {
        self.resolvers.iter().any(|r| r.supports(url))
    }

    pub async fn resolve(&self, url: &str) -> Result<ResolvedMedia> {
        for resolver in &self.resolvers {
            if !resolver.supports(url) {
                continue;
            }

            info!("Resolving with {}: {}", resolver.name(), url);
            match resolver.resolve(url).await {
                Ok(media) => {
                    info!("Successfully resolved media id {}", media.id);
                    return Ok(media);
                }
                Err(e) => {
                    warn!("{} failed: {}", resolver.name(), e);
                    return Err(e);
                }
            }
        }

        Err(ResolveError::InvalidInput)
    }
}
