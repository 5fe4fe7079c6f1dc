use chrono::NaiveDate;
use std::collections::HashMap;

/// Upper bound on the number of deals kept from one fetch
pub const MAX_DEALS: usize = 50;

/// Shown when a deal's store is missing from the directory
pub const UNKNOWN_STORE: &str = "Unknown Store";

const REDIRECT_URL: &str = "https://www.cheapshark.com/redirect";

/// Store identifier as used by CheapShark
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreId(pub String);

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StoreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Represents a game deal from CheapShark
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub title: String,
    pub sale_price: f64,
    pub normal_price: f64,
    pub store_id: StoreId,
    pub thumb: Option<String>,
    /// `None` when the score is unknown (absent or zero upstream)
    pub metacritic_score: Option<u8>,
    pub deal_id: Option<String>,
    pub savings: Option<f64>,
    pub release_date: Option<NaiveDate>,
}

impl Deal {
    pub fn new(title: impl Into<String>, sale_price: f64, normal_price: f64, store_id: impl Into<StoreId>) -> Self {
        Self {
            title: title.into(),
            sale_price,
            normal_price,
            store_id: store_id.into(),
            thumb: None,
            metacritic_score: None,
            deal_id: None,
            savings: None,
            release_date: None,
        }
    }

    /// Browser link for this deal, if CheapShark gave it an id
    pub fn url(&self) -> Option<String> {
        self.deal_id
            .as_ref()
            .map(|id| format!("{}?dealID={}", REDIRECT_URL, id))
    }

    /// Discount in whole percent, preferring the upstream figure
    pub fn discount(&self) -> u8 {
        let pct = match self.savings {
            Some(savings) => savings,
            None if self.normal_price > 0.0 => {
                (1.0 - self.sale_price / self.normal_price) * 100.0
            }
            None => 0.0,
        };
        pct.round().clamp(0.0, 100.0) as u8
    }
}

/// Lookup from store id to store name, rebuilt on every refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreDirectory {
    stores: HashMap<StoreId, String>,
}

impl StoreDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store name for `id`, or [`UNKNOWN_STORE`] when the id is not listed
    pub fn name_of(&self, id: &StoreId) -> &str {
        self.stores
            .get(id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_STORE)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl FromIterator<(StoreId, String)> for StoreDirectory {
    fn from_iter<I: IntoIterator<Item = (StoreId, String)>>(iter: I) -> Self {
        Self {
            stores: iter.into_iter().collect(),
        }
    }
}
