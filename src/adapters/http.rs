use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Single-shot GET with the default client settings. No retry.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Response status: {}", response.status());
        let body = response.error_for_status()?.text().await?;

        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
