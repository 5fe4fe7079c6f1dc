use std::sync::Arc;

use crate::filter::filter;
use crate::models::{Deal, StoreDirectory, MAX_DEALS};

/// Snapshot of what the deals list shows.
///
/// A `DealsView` is never edited in place. Fetches and keyword changes build a
/// new value from the old one, so `visible_deals` always derives from the
/// `all_deals` it was built with.
#[derive(Debug, Clone)]
pub struct DealsView {
    all_deals: Arc<[Deal]>,
    visible_deals: Vec<Deal>,
    search_keyword: String,
    stores: Arc<StoreDirectory>,
}

impl Default for DealsView {
    fn default() -> Self {
        Self::fresh(Vec::new(), StoreDirectory::new())
    }
}

impl DealsView {
    /// View over a freshly fetched list, truncated to [`MAX_DEALS`]
    pub fn fresh(mut deals: Vec<Deal>, stores: StoreDirectory) -> Self {
        deals.truncate(MAX_DEALS);
        Self {
            visible_deals: deals.clone(),
            all_deals: deals.into(),
            search_keyword: String::new(),
            stores: Arc::new(stores),
        }
    }

    /// Same deals, filtered by `keyword`
    pub fn with_keyword(&self, keyword: &str) -> Self {
        Self {
            all_deals: Arc::clone(&self.all_deals),
            visible_deals: filter(&self.all_deals, keyword),
            search_keyword: keyword.to_string(),
            stores: Arc::clone(&self.stores),
        }
    }

    pub fn all_deals(&self) -> &[Deal] {
        &self.all_deals
    }

    pub fn visible_deals(&self) -> &[Deal] {
        &self.visible_deals
    }

    pub fn search_keyword(&self) -> &str {
        &self.search_keyword
    }

    pub fn stores(&self) -> &StoreDirectory {
        &self.stores
    }

    pub fn is_empty(&self) -> bool {
        self.visible_deals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreId;

    fn half_life() -> Deal {
        let mut deal = Deal::new("Half-Life 3", 9.99, 19.99, "1");
        deal.thumb = Some("http://x/y.png".to_string());
        deal.metacritic_score = Some(90);
        deal
    }

    #[test]
    fn fresh_view_shows_everything() {
        let view = DealsView::fresh(vec![half_life()], StoreDirectory::new());
        assert_eq!(view.all_deals().len(), 1);
        assert_eq!(view.visible_deals(), view.all_deals());
        assert_eq!(view.search_keyword(), "");
    }

    #[test]
    fn fresh_view_caps_at_max_deals() {
        let deals: Vec<Deal> = (0..120)
            .map(|i| Deal::new(format!("Game {i}"), 1.0, 2.0, "1"))
            .collect();
        let view = DealsView::fresh(deals, StoreDirectory::new());
        assert_eq!(view.all_deals().len(), MAX_DEALS);
        assert_eq!(view.all_deals()[0].title, "Game 0");
        assert_eq!(view.all_deals()[MAX_DEALS - 1].title, "Game 49");
    }

    #[test]
    fn keyword_filters_without_touching_all_deals() {
        let view = DealsView::fresh(vec![half_life()], StoreDirectory::new());

        let half = view.with_keyword("half");
        assert_eq!(half.visible_deals(), &[half_life()]);

        let portal = view.with_keyword("portal");
        assert!(portal.visible_deals().is_empty());
        assert_eq!(portal.all_deals().len(), 1);
        assert_eq!(view.visible_deals().len(), 1);
    }

    #[test]
    fn keyword_keeps_original_case() {
        let view = DealsView::fresh(vec![half_life()], StoreDirectory::new()).with_keyword("HaLf");
        assert_eq!(view.search_keyword(), "HaLf");
        assert_eq!(view.visible_deals().len(), 1);
    }

    #[test]
    fn fresh_fetch_drops_previous_keyword() {
        let stores: StoreDirectory = [(StoreId::from("1"), "Steam".to_string())]
            .into_iter()
            .collect();
        let view = DealsView::fresh(vec![half_life()], stores).with_keyword("portal");
        assert!(view.is_empty());

        let next = DealsView::fresh(
            vec![
                Deal::new("Portal 2", 1.99, 9.99, "1"),
                Deal::new("Celeste", 4.99, 19.99, "1"),
            ],
            StoreDirectory::new(),
        );
        assert_eq!(next.visible_deals(), next.all_deals());
        assert_eq!(next.visible_deals().len(), 2);
        assert_eq!(next.search_keyword(), "");
        assert!(next.stores().is_empty());
    }
}
