// Cached, staleness-aware access to the paginated tag list

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::api_types::TagPageResponse;
use crate::config::query;

/// Cache key: one server page of one committed filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub filter: String,
    pub page: u32,
}

#[derive(Debug)]
struct CacheEntry {
    page: TagPageResponse,
    fetched_at: Instant,
    invalidated: bool,
}

/// Handle for one in-flight list request.
///
/// Tickets order responses: a response is only displayed when its ticket
/// still matches the current key and no later response already landed, so
/// a slow request for since-abandoned parameters can never overwrite
/// fresher data.
#[derive(Debug)]
pub struct RequestTicket {
    seq: u64,
    key: QueryKey,
}

impl RequestTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

/// Client-side cache over the server's tag pages.
///
/// Mirrors the admin panel's fetch discipline: cached data keeps showing
/// while a newer page loads, entries stay fresh for a fixed window, and a
/// successful create invalidates everything.
#[derive(Debug)]
pub struct TagListQuery {
    cache: HashMap<QueryKey, CacheEntry>,
    displayed: Option<TagPageResponse>,
    current_key: Option<QueryKey>,
    next_seq: u64,
    last_displayed_seq: u64,
    stale_after: Duration,
}

impl Default for TagListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl TagListQuery {
    pub fn new() -> Self {
        Self::with_stale_after(Duration::from_secs(query::STALE_AFTER_SECS))
    }

    pub fn with_stale_after(stale_after: Duration) -> Self {
        TagListQuery {
            cache: HashMap::new(),
            displayed: None,
            current_key: None,
            next_seq: 0,
            last_displayed_seq: 0,
            stale_after,
        }
    }

    /// Make `(filter, page)` the current view.
    ///
    /// Any cached page for the key becomes the displayed page immediately,
    /// even when stale; a missing key leaves the previous page visible so
    /// the table never flashes empty. Returns a ticket when a network
    /// fetch is needed (missing, stale, or invalidated entry).
    pub fn begin(&mut self, filter: &str, page: u32) -> Option<RequestTicket> {
        let key = QueryKey {
            filter: filter.to_string(),
            page,
        };
        self.current_key = Some(key.clone());

        let needs_fetch = match self.cache.get(&key) {
            Some(entry) => {
                self.displayed = Some(entry.page.clone());
                !Self::is_fresh(entry, self.stale_after)
            }
            None => true,
        };

        if needs_fetch {
            self.next_seq += 1;
            Some(RequestTicket {
                seq: self.next_seq,
                key,
            })
        } else {
            None
        }
    }

    /// Record a completed fetch.
    ///
    /// The response always lands in the cache under the ticket's key; it
    /// becomes the displayed page only when the ticket is not out of date.
    /// Returns whether the response was displayed.
    pub fn apply(&mut self, ticket: RequestTicket, page: TagPageResponse) -> bool {
        self.cache.insert(
            ticket.key.clone(),
            CacheEntry {
                page: page.clone(),
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );

        let still_current = self.current_key.as_ref() == Some(&ticket.key);
        let newest = ticket.seq > self.last_displayed_seq;
        if still_current && newest {
            self.last_displayed_seq = ticket.seq;
            self.displayed = Some(page);
            true
        } else {
            false
        }
    }

    /// Mark every cached page stale. Cached data stays displayable; the
    /// next `begin` for any key triggers a refetch.
    pub fn invalidate_all(&mut self) {
        for entry in self.cache.values_mut() {
            entry.invalidated = true;
        }
    }

    pub fn displayed(&self) -> Option<&TagPageResponse> {
        self.displayed.as_ref()
    }

    pub fn current_key(&self) -> Option<&QueryKey> {
        self.current_key.as_ref()
    }

    fn is_fresh(entry: &CacheEntry, stale_after: Duration) -> bool {
        !entry.invalidated && entry.fetched_at.elapsed() < stale_after
    }
}
