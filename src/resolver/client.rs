use super::{error::Result, types::ResolvedMedia};
use async_trait::async_trait;

#[async_trait]
pub trait Resolver: Send + Sync {
    /// Human-readable name of the resolution backend
    fn name(&self) -> &'static str;

    /// Whether this backend can attempt the given link
    fn supports(&self, url: &str) -> bool;

    /// Resolve the link into downloadable media URLs with a single request
    async fn resolve(&self, url: &str) -> Result<ResolvedMedia>;
}
