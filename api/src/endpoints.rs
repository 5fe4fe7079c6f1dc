use std::time::Duration;

use sharkdeal_core::models::{Deal, StoreDirectory, MAX_DEALS};
use sharkdeal_core::{Result, SharkDealError};
use tracing::{debug, info, warn};

use crate::client::CheapSharkClient;
use crate::types::{DealItem, StoreItem};

/// Outcome of [`CheapSharkClient::fetch_deals`]. On failure `deals` is empty.
#[derive(Debug, Default)]
pub struct DealsFetch {
    pub deals: Vec<Deal>,
    pub error: Option<SharkDealError>,
}

impl CheapSharkClient {
    /// Deals priced at or below `upper_price`, first [`MAX_DEALS`] in server order
    pub async fn get_deals(&self, upper_price: f64) -> Result<Vec<Deal>> {
        let url = format!("{}/deals", self.base_url());

        let items: Vec<DealItem> = self
            .get_json(&url, &[("upperPrice", upper_price.to_string())])
            .await?;

        let total = items.len();
        let deals = items
            .into_iter()
            .take(MAX_DEALS)
            .map(Deal::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(total, kept = deals.len(), "fetched deals");
        Ok(deals)
    }

    /// Like [`get_deals`](Self::get_deals), but a failure becomes an empty list
    pub async fn fetch_deals(&self, upper_price: f64) -> DealsFetch {
        match self.get_deals(upper_price).await {
            Ok(deals) => {
                info!(count = deals.len(), upper_price, "deals refreshed");
                DealsFetch { deals, error: None }
            }
            Err(e) => {
                warn!(error = %e, upper_price, "error fetching deals");
                DealsFetch {
                    deals: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }

    pub async fn get_stores(&self) -> Result<StoreDirectory> {
        let url = format!("{}/stores", self.base_url());

        let items: Vec<StoreItem> = self.get_json(&url, &[]).await?;

        Ok(items
            .into_iter()
            .map(|store| (store.store_id.into(), store.store_name))
            .collect())
    }

    /// Store names, or an empty directory when the stores endpoint fails
    pub async fn fetch_store_directory(&self) -> StoreDirectory {
        match self.get_stores().await {
            Ok(stores) => {
                debug!(count = stores.len(), "fetched store directory");
                stores
            }
            Err(e) => {
                warn!(error = %e, "error fetching stores");
                StoreDirectory::new()
            }
        }
    }

    /// HEAD probe for a thumbnail. Any failure counts as unreachable.
    pub async fn is_reachable(&self, url: &str, timeout: Duration) -> bool {
        match self.client().head(url).timeout(timeout).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    debug!(url, status = %response.status(), "thumbnail not reachable");
                }
                ok
            }
            Err(e) => {
                debug!(url, error = %e, "thumbnail probe failed");
                false
            }
        }
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client()
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| SharkDealError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SharkDealError::Upstream(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SharkDealError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| SharkDealError::Upstream(e.to_string()))
    }
}
