use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the body of a successful GET to `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
