use serde::Deserialize;
use sharkdeal_core::models::{Deal, StoreId};
use sharkdeal_core::SharkDealError;

/// CheapShark sends most numbers as strings, but not always
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Int(u64),
    Text(String),
}

impl From<WireId> for StoreId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Int(n) => StoreId(n.to_string()),
            WireId::Text(s) => StoreId(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealItem {
    pub title: String,
    pub sale_price: Numeric,
    pub normal_price: Numeric,
    #[serde(rename = "storeID")]
    pub store_id: WireId,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub metacritic_score: Option<Numeric>,
    #[serde(default, rename = "dealID")]
    pub deal_id: Option<String>,
    #[serde(default)]
    pub savings: Option<Numeric>,
    /// Unix seconds, `0` when unknown
    #[serde(default)]
    pub release_date: Option<Numeric>,
}

#[derive(Debug, Deserialize)]
pub struct StoreItem {
    #[serde(rename = "storeID")]
    pub store_id: WireId,
    #[serde(rename = "storeName")]
    pub store_name: String,
}

impl TryFrom<DealItem> for Deal {
    type Error = SharkDealError;

    fn try_from(item: DealItem) -> Result<Self, Self::Error> {
        let price = |field: &str, value: &Numeric| {
            value.as_f64().ok_or_else(|| {
                SharkDealError::Upstream(format!(
                    "deal {:?} has invalid {}: {:?}",
                    item.title, field, value
                ))
            })
        };
        let sale_price = price("salePrice", &item.sale_price)?;
        let normal_price = price("normalPrice", &item.normal_price)?;

        // Scores that round to zero, or fall outside 1..=100, mean "no score"
        let metacritic_score = item
            .metacritic_score
            .as_ref()
            .and_then(Numeric::as_f64)
            .map(f64::round)
            .filter(|score| (1.0..=100.0).contains(score))
            .map(|score| score as u8);

        let release_date = item
            .release_date
            .as_ref()
            .and_then(Numeric::as_f64)
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| chrono::DateTime::from_timestamp(secs as i64, 0))
            .map(|dt| dt.date_naive());

        Ok(Self {
            sale_price,
            normal_price,
            store_id: item.store_id.into(),
            thumb: item.thumb.filter(|url| !url.trim().is_empty()),
            metacritic_score,
            deal_id: item.deal_id.filter(|id| !id.is_empty()),
            savings: item.savings.as_ref().and_then(Numeric::as_f64),
            release_date,
            title: item.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(json: &str) -> Deal {
        let item: DealItem = serde_json::from_str(json).unwrap();
        Deal::try_from(item).unwrap()
    }

    #[test]
    fn parses_cheapshark_string_fields() {
        let deal = parse(
            r#"{
                "internalName": "HALFLIFE3",
                "title": "Half-Life 3",
                "dealID": "X8sebHhbc1Ga0dTkgg59WgyM506af9oNZZJLU9uSrX8%3D",
                "storeID": "1",
                "gameID": "612",
                "salePrice": "9.99",
                "normalPrice": "19.99",
                "isOnSale": "1",
                "savings": "50.025013",
                "metacriticScore": "90",
                "releaseDate": 1400112000,
                "thumb": "http://x/y.png"
            }"#,
        );

        assert_eq!(deal.title, "Half-Life 3");
        assert_eq!(deal.sale_price, 9.99);
        assert_eq!(deal.normal_price, 19.99);
        assert_eq!(deal.store_id, StoreId::from("1"));
        assert_eq!(deal.metacritic_score, Some(90));
        assert_eq!(deal.thumb.as_deref(), Some("http://x/y.png"));
        assert_eq!(deal.discount(), 50);
        assert_eq!(deal.release_date, NaiveDate::from_ymd_opt(2014, 5, 15));
    }

    #[test]
    fn parses_numeric_fields() {
        let deal = parse(
            r#"{"title":"Half-Life 3","salePrice":9.99,"normalPrice":19.99,"storeID":1,"thumb":"http://x/y.png","metacriticScore":90}"#,
        );

        assert_eq!(deal.sale_price, 9.99);
        assert_eq!(deal.store_id, StoreId::from("1"));
        assert_eq!(deal.metacritic_score, Some(90));
        assert_eq!(deal.deal_id, None);
        assert_eq!(deal.release_date, None);
    }

    #[test]
    fn zero_or_missing_metacritic_is_unknown() {
        let zero = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1","metacriticScore":"0"}"#);
        let missing = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1"}"#);
        let null = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1","metacriticScore":null}"#);

        assert_eq!(zero.metacritic_score, None);
        assert_eq!(missing.metacritic_score, None);
        assert_eq!(null.metacritic_score, None);
    }

    #[test]
    fn metacritic_rounding_to_zero_is_unknown() {
        let tiny = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1","metacriticScore":0.4}"#);
        let over = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1","metacriticScore":"101"}"#);
        let fractional = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1","metacriticScore":"87.6"}"#);
        assert_eq!(tiny.metacritic_score, None);
        assert_eq!(over.metacritic_score, None);
        assert_eq!(fractional.metacritic_score, Some(88));
    }

    #[test]
    fn empty_thumb_is_absent() {
        let deal = parse(r#"{"title":"A","salePrice":"1","normalPrice":"2","storeID":"1","thumb":""}"#);
        assert_eq!(deal.thumb, None);
    }

    #[test]
    fn unparseable_price_is_upstream_error() {
        let item: DealItem = serde_json::from_str(
            r#"{"title":"A","salePrice":"free","normalPrice":"2","storeID":"1"}"#,
        )
        .unwrap();
        let err = Deal::try_from(item).unwrap_err();
        assert_eq!(err.kind(), sharkdeal_core::ErrorKind::Upstream);
    }

    #[test]
    fn store_ids_from_strings_and_ints_agree() {
        let a: StoreItem = serde_json::from_str(r#"{"storeID":"7","storeName":"GOG"}"#).unwrap();
        let b: StoreItem = serde_json::from_str(r#"{"storeID":7,"storeName":"GOG","isActive":1}"#).unwrap();
        assert_eq!(StoreId::from(a.store_id), StoreId::from(b.store_id));
    }
}
