//! Remote Collection Fetcher
//!
//! Loads one remote list into view state, keyed by whatever the view depends
//! on (board id, query text, nothing for the feed). A load happens in two
//! calls: `observe`/`begin` when the key changes, `resolve` when the
//! response arrives. Requests are never cancelled.

use std::fmt::Debug;

use crate::error::ApiResult;

/// Which responses may overwrite the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Whatever resolves last is shown, even if its key is outdated
    #[default]
    LastResolvedWins,
    /// Only the response to the newest request is applied
    DiscardStale,
}

/// What a failed read does to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFailurePolicy {
    /// Logged, never shown
    #[default]
    Silent,
    /// Logged and kept in `error()` for display
    Surface,
}

/// Read-side policy shared by every fetcher in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchPolicy {
    pub stale: StalePolicy,
    pub on_failure: ReadFailurePolicy,
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued; response dropped
    Stale,
    /// Request failed; collection untouched
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionFetcher<K, T> {
    name: &'static str,
    policy: FetchPolicy,
    key: Option<K>,
    issued: u64,
    pending: usize,
    items: Vec<T>,
    error: Option<String>,
}

impl<K, T> CollectionFetcher<K, T>
where
    K: Clone + PartialEq + Debug,
{
    pub fn new(name: &'static str, policy: FetchPolicy) -> Self {
        Self {
            name,
            policy,
            key: None,
            issued: 0,
            pending: 0,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Record the view's current key.
    ///
    /// Returns the request to issue when the key changed to a present value.
    /// An absent key issues nothing and leaves the collection as it is.
    pub fn observe(&mut self, key: Option<K>) -> Option<(Ticket, K)> {
        if self.key == key {
            return None;
        }
        self.key = key.clone();
        let key = key?;

        self.issued += 1;
        self.pending += 1;
        log::debug!("[{}] fetching for key {:?}", self.name, key);
        Some((Ticket(self.issued), key))
    }

    pub fn begin(&mut self, key: K) -> Option<(Ticket, K)> {
        self.observe(Some(key))
    }

    pub fn resolve(&mut self, ticket: Ticket, result: ApiResult<Vec<T>>) -> Resolution {
        self.pending = self.pending.saturating_sub(1);

        if self.policy.stale == StalePolicy::DiscardStale && ticket.0 != self.issued {
            log::debug!("[{}] dropping stale response {:?}", self.name, ticket);
            return Resolution::Stale;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                Resolution::Applied
            }
            Err(err) => {
                log::warn!("[{}] load failed: {}", self.name, err);
                if self.policy.on_failure == ReadFailurePolicy::Surface {
                    self.error = Some(err.to_string());
                }
                Resolution::Failed
            }
        }
    }

    /// Append a locally created entity without reloading
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, PinClient};
    use crate::error::ApiError;
    use crate::models::Pin;
    use crate::testing::MockTransport;
    use serde_json::json;
    use std::rc::Rc;

    fn pins(ids: &[u64]) -> Vec<Pin> {
        ids.iter()
            .map(|&id| Pin {
                pin_id: id,
                title: format!("Pin {}", id),
                image_filename: format!("{}.jpg", id),
                image_url: None,
                board_id: None,
                board_name: None,
                description: None,
                username: None,
            })
            .collect()
    }

    fn ids(fetcher: &CollectionFetcher<u64, Pin>) -> Vec<u64> {
        fetcher.items().iter().map(|p| p.pin_id).collect()
    }

    #[test]
    fn test_one_request_per_key_change() {
        let mut fetcher: CollectionFetcher<u64, Pin> =
            CollectionFetcher::new("board", FetchPolicy::default());

        let mut issued = Vec::new();
        for key in [None, Some(1), Some(1), Some(2), Some(2), Some(1)] {
            if let Some((_, key)) = fetcher.observe(key) {
                issued.push(key);
            }
        }

        assert_eq!(issued, vec![1, 2, 1]);
    }

    #[test]
    fn test_success_replaces_collection_in_server_order() {
        let mut fetcher = CollectionFetcher::new("board", FetchPolicy::default());
        let (ticket, _) = fetcher.begin(1).unwrap();
        assert!(fetcher.is_loading());

        assert_eq!(fetcher.resolve(ticket, Ok(pins(&[9, 3, 5]))), Resolution::Applied);
        assert_eq!(ids(&fetcher), vec![9, 3, 5]);
        assert!(!fetcher.is_loading());

        let (ticket, _) = fetcher.begin(2).unwrap();
        fetcher.resolve(ticket, Ok(pins(&[4])));
        assert_eq!(ids(&fetcher), vec![4]);
    }

    #[test]
    fn test_failure_leaves_collection_unchanged() {
        let mut fetcher = CollectionFetcher::new("board", FetchPolicy::default());

        let (first, _) = fetcher.begin(1).unwrap();
        assert_eq!(
            fetcher.resolve(first, Err(ApiError::Network("down".to_string()))),
            Resolution::Failed
        );
        assert!(fetcher.items().is_empty());

        let (second, _) = fetcher.begin(2).unwrap();
        fetcher.resolve(second, Ok(pins(&[1, 2])));
        let (third, _) = fetcher.begin(3).unwrap();
        fetcher.resolve(third, Err(ApiError::Status { status: 500, error: None }));

        assert_eq!(ids(&fetcher), vec![1, 2]);
        assert_eq!(fetcher.error(), None);
    }

    #[test]
    fn test_surface_policy_keeps_error_until_next_success() {
        let policy = FetchPolicy {
            on_failure: ReadFailurePolicy::Surface,
            ..FetchPolicy::default()
        };
        let mut fetcher: CollectionFetcher<u64, Pin> = CollectionFetcher::new("feed", policy);

        let (ticket, _) = fetcher.begin(1).unwrap();
        fetcher.resolve(ticket, Err(ApiError::Status { status: 502, error: None }));
        assert_eq!(fetcher.error(), Some("HTTP 502"));

        let (ticket, _) = fetcher.begin(2).unwrap();
        fetcher.resolve(ticket, Ok(pins(&[7])));
        assert_eq!(fetcher.error(), None);
    }

    #[test]
    fn test_last_resolved_wins_can_show_stale_key() {
        let mut fetcher = CollectionFetcher::new("search", FetchPolicy::default());

        let (a, _) = fetcher.begin(1).unwrap();
        let (b, _) = fetcher.begin(2).unwrap();

        fetcher.resolve(b, Ok(pins(&[20])));
        assert_eq!(fetcher.resolve(a, Ok(pins(&[10]))), Resolution::Applied);

        assert_eq!(fetcher.key, Some(2));
        assert_eq!(ids(&fetcher), vec![10]);
    }

    #[test]
    fn test_discard_stale_keeps_newest() {
        let policy = FetchPolicy {
            stale: StalePolicy::DiscardStale,
            ..FetchPolicy::default()
        };
        let mut fetcher = CollectionFetcher::new("search", policy);

        let (a, _) = fetcher.begin(1).unwrap();
        let (b, _) = fetcher.begin(2).unwrap();

        fetcher.resolve(b, Ok(pins(&[20])));
        assert_eq!(fetcher.resolve(a, Ok(pins(&[10]))), Resolution::Stale);

        assert_eq!(ids(&fetcher), vec![20]);
        assert!(!fetcher.is_loading());
    }

    #[test]
    fn test_absent_key_issues_nothing() {
        let mut fetcher: CollectionFetcher<String, Pin> =
            CollectionFetcher::new("search", FetchPolicy::default());

        assert_eq!(fetcher.observe(None), None);
        assert!(fetcher.items().is_empty());

        let (ticket, key) = fetcher.begin("cats".to_string()).unwrap();
        assert_eq!(key, "cats");
        fetcher.resolve(ticket, Ok(pins(&[1])));

        // Clearing the query keeps the last results on screen
        assert_eq!(fetcher.observe(None), None);
        assert_eq!(fetcher.items().len(), 1);
    }

    #[test]
    fn test_push_appends_locally() {
        let mut fetcher: CollectionFetcher<(), Pin> =
            CollectionFetcher::new("boards", FetchPolicy::default());
        let (ticket, _) = fetcher.begin(()).unwrap();
        fetcher.resolve(ticket, Ok(pins(&[1])));

        fetcher.push(pins(&[2]).remove(0));

        assert_eq!(fetcher.items().len(), 2);
        assert_eq!(fetcher.items()[1].pin_id, 2);
        assert_eq!(fetcher.begin(()), None);
    }

    #[tokio::test]
    async fn test_search_query_triggers_exactly_one_fetch() {
        let mock = Rc::new(MockTransport::new());
        mock.respond(Method::Get, "/search?q=cats", Ok(json!([{"pin_id": 1, "title": "Tabby"}])));
        let client = PinClient::new(mock.clone());

        let path = crate::search::search_path("cats");
        let query_string = path.split_once('?').map(|(_, qs)| qs).unwrap_or("");
        let mut fetcher = CollectionFetcher::new("search", FetchPolicy::default());

        // The results view re-renders a few times with the same location
        for _ in 0..3 {
            let query = crate::search::query_from_search(query_string);
            if let Some((ticket, q)) = fetcher.observe(query) {
                let result = client.search(&q).await;
                fetcher.resolve(ticket, result);
            }
        }

        assert_eq!(mock.calls(), vec!["GET /search?q=cats"]);
        assert_eq!(fetcher.items()[0].title, "Tabby");
    }

    #[tokio::test]
    async fn test_rejected_read_does_not_touch_rendered_feed() {
        let mock = Rc::new(MockTransport::new());
        mock.respond(Method::Get, "/feed", Ok(json!([{"pin_id": 1}, {"pin_id": 2}])));
        mock.respond(Method::Get, "/feed", Err(ApiError::Network("reset".to_string())));
        let client = PinClient::new(mock.clone());
        let mut fetcher = CollectionFetcher::new("feed", FetchPolicy::default());

        for generation in 0..2u32 {
            if let Some((ticket, _)) = fetcher.begin(generation) {
                let result = client.feed().await;
                fetcher.resolve(ticket, result);
            }
        }

        assert_eq!(fetcher.items().len(), 2);
        assert_eq!(mock.calls().len(), 2);
    }
}
