use std::time::Duration;

use reqwest::Client;
use sharkdeal_core::{Result, SharkDealError};

pub const API_BASE_URL: &str = "https://www.cheapshark.com/api/1.0";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CheapSharkClient {
    client: Client,
    base_url: String,
}

impl CheapSharkClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_base_url(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sharkdeal/", env!("CARGO_PKG_VERSION")))
            .timeout(request_timeout)
            .build()
            .map_err(|e| SharkDealError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
