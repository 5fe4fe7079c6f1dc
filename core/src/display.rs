//! Text for one rendered deal, independent of the widget toolkit.

use crate::models::{Deal, StoreDirectory};
use crate::thumbnail::Thumbnail;

pub const EMPTY_LIST_MESSAGE: &str = "No game deals yet.";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DealRow {
    pub title: String,
    pub sale_price: String,
    pub normal_price: String,
    pub metacritic: String,
    pub store_name: String,
    pub thumbnail: Thumbnail,
}

impl DealRow {
    pub fn new(deal: &Deal, stores: &StoreDirectory, thumbnail: Thumbnail) -> Self {
        Self {
            title: deal.title.clone(),
            sale_price: format_usd(deal.sale_price),
            normal_price: format_usd(deal.normal_price),
            metacritic: deal
                .metacritic_score
                .map(|score| score.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            store_name: stores.name_of(&deal.store_id).to_string(),
            thumbnail,
        }
    }

    pub fn price_line(&self) -> String {
        format!(
            "Sale Price: {} USD (Normal: {} USD)",
            self.sale_price, self.normal_price
        )
    }

    pub fn metacritic_line(&self) -> String {
        format!("Metacritic: {}", self.metacritic)
    }

    pub fn store_line(&self) -> String {
        format!("Store: {}", self.store_name)
    }
}

pub fn format_usd(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StoreId, UNKNOWN_STORE};

    fn half_life() -> Deal {
        let mut deal = Deal::new("Half-Life 3", 9.99, 19.99, "1");
        deal.metacritic_score = Some(90);
        deal
    }

    #[test]
    fn formats_known_store_and_score() {
        let stores: StoreDirectory = [(StoreId::from("1"), "Steam".to_string())]
            .into_iter()
            .collect();
        let row = DealRow::new(&half_life(), &stores, Thumbnail::Placeholder);

        assert_eq!(row.price_line(), "Sale Price: 9.99 USD (Normal: 19.99 USD)");
        assert_eq!(row.metacritic_line(), "Metacritic: 90");
        assert_eq!(row.store_line(), "Store: Steam");
    }

    #[test]
    fn unknown_score_and_store() {
        let mut deal = half_life();
        deal.metacritic_score = None;
        let row = DealRow::new(&deal, &StoreDirectory::new(), Thumbnail::Pending);

        assert_eq!(row.metacritic, NOT_AVAILABLE);
        assert_eq!(row.store_name, UNKNOWN_STORE);
    }

    #[test]
    fn every_row_is_unknown_store_without_directory() {
        let deals = vec![
            Deal::new("A", 1.0, 2.0, "1"),
            Deal::new("B", 1.0, 2.0, "2"),
            Deal::new("C", 1.0, 2.0, "3"),
        ];
        let stores = StoreDirectory::new();
        assert!(deals
            .iter()
            .map(|d| DealRow::new(d, &stores, Thumbnail::Placeholder))
            .all(|row| row.store_line() == "Store: Unknown Store"));
    }

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_usd(15.0), "15.00");
        assert_eq!(format_usd(0.5), "0.50");
    }
}
