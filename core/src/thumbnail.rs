use std::collections::{HashMap, HashSet};

use crate::models::Deal;

/// What the renderer should show in place of a deal's image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image(String),
    Placeholder,
    /// Reachability not known yet
    Pending,
}

/// Per-session record of which thumbnail URLs answered a probe.
///
/// Every URL is handed out for probing at most once; results stay valid for
/// the rest of the session.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    results: HashMap<String, bool>,
    in_flight: HashSet<String>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, deal: &Deal) -> Thumbnail {
        let Some(url) = deal.thumb.as_deref() else {
            return Thumbnail::Placeholder;
        };
        match self.results.get(url) {
            Some(true) => Thumbnail::Image(url.to_string()),
            Some(false) => Thumbnail::Placeholder,
            None => Thumbnail::Pending,
        }
    }

    /// URLs from `deals` that have never been probed, marked as in flight
    pub fn claim_unprobed<'a>(&mut self, deals: impl IntoIterator<Item = &'a Deal>) -> Vec<String> {
        let mut claimed = Vec::new();
        for url in deals.into_iter().filter_map(|d| d.thumb.as_deref()) {
            if self.results.contains_key(url) || self.in_flight.contains(url) {
                continue;
            }
            self.in_flight.insert(url.to_string());
            claimed.push(url.to_string());
        }
        claimed
    }

    pub fn record(&mut self, url: String, reachable: bool) {
        self.in_flight.remove(&url);
        self.results.insert(url, reachable);
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_thumb(title: &str, thumb: Option<&str>) -> Deal {
        let mut deal = Deal::new(title, 1.0, 2.0, "1");
        deal.thumb = thumb.map(str::to_string);
        deal
    }

    #[test]
    fn missing_url_is_placeholder() {
        let cache = ThumbnailCache::new();
        assert_eq!(cache.resolve(&with_thumb("a", None)), Thumbnail::Placeholder);
    }

    #[test]
    fn resolves_after_probe() {
        let mut cache = ThumbnailCache::new();
        let ok = with_thumb("ok", Some("http://img/ok.jpg"));
        let broken = with_thumb("broken", Some("http://img/404.jpg"));

        assert_eq!(cache.resolve(&ok), Thumbnail::Pending);

        let claimed = cache.claim_unprobed([&ok, &broken]);
        assert_eq!(claimed.len(), 2);
        assert_eq!(cache.pending(), 2);

        cache.record("http://img/ok.jpg".to_string(), true);
        cache.record("http://img/404.jpg".to_string(), false);

        assert_eq!(cache.resolve(&ok), Thumbnail::Image("http://img/ok.jpg".to_string()));
        assert_eq!(cache.resolve(&broken), Thumbnail::Placeholder);
        assert_eq!(cache.pending(), 0);
    }

    #[test]
    fn each_url_is_claimed_once() {
        let mut cache = ThumbnailCache::new();
        let a = with_thumb("a", Some("http://img/shared.jpg"));
        let b = with_thumb("b", Some("http://img/shared.jpg"));

        assert_eq!(cache.claim_unprobed([&a, &b]), vec!["http://img/shared.jpg".to_string()]);
        assert!(cache.claim_unprobed([&a]).is_empty());

        cache.record("http://img/shared.jpg".to_string(), true);
        assert!(cache.claim_unprobed([&a, &b]).is_empty());
    }
}
