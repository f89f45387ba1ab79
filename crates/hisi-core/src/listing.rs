// ── Paginated, filtered lists ──
//
// `ListQuery` is the canonical list request. `ListController` owns one in a
// background task: every query change re-fetches, search edits wait for a
// quiet period first, and mutations re-fetch on success. Snapshots are
// published through a `watch` channel for renderers.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};
use tokio::sync::{Notify, watch};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

use hisi_api::Page;

use crate::error::CoreError;
use crate::fetch::{FetchStatus, Scope};

/// Quiet period before a search edit triggers a fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_PER_PAGE: u32 = 20;

// ── Query ────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filter, sort and page state for one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub filters: BTreeMap<String, String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl ListQuery {
    pub const SEARCH: &'static str = "search";

    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            filters: BTreeMap::new(),
            sort_by: None,
            sort_order: SortOrder::default(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.set_filter(key, value);
        self
    }

    pub fn with_sort(mut self, sort_by: &str, order: SortOrder) -> Self {
        self.set_sort(sort_by, order);
        self
    }

    /// Set or clear a filter. Blank values and `all` clear it. Any change
    /// returns to page 1. Returns whether the query changed.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        let changed = if value.is_empty() || value.eq_ignore_ascii_case("all") {
            self.filters.remove(key).is_some()
        } else if self.filters.get(key).map(String::as_str) == Some(value) {
            false
        } else {
            self.filters.insert(key.to_owned(), value.to_owned());
            true
        };
        if changed {
            self.page = 1;
        }
        changed
    }

    pub fn set_sort(&mut self, sort_by: &str, order: SortOrder) -> bool {
        let sort_by = (!sort_by.trim().is_empty()).then(|| sort_by.trim().to_owned());
        if self.sort_by == sort_by && self.sort_order == order {
            return false;
        }
        self.sort_by = sort_by;
        self.sort_order = order;
        self.page = 1;
        true
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn search(&self) -> Option<&str> {
        self.filter(Self::SEARCH)
    }

    /// Query-string pairs in the canonical parameter names.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_owned(), self.page.to_string()),
            ("per_page".to_owned(), self.per_page.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            params.push(("sort_by".to_owned(), sort_by.clone()));
            params.push(("sort_order".to_owned(), self.sort_order.to_string()));
        }
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        params
    }

    /// True when `next` differs from `self` only in its search text (and
    /// the page reset that comes with it).
    pub fn is_search_edit_of(&self, next: &ListQuery) -> bool {
        if self.search() == next.search() {
            return false;
        }
        let strip = |q: &ListQuery| {
            let mut q = q.clone();
            q.filters.remove(Self::SEARCH);
            q
        };
        let (prev, mut next) = (strip(self), strip(next));
        if next.page == 1 {
            next.page = prev.page;
        }
        prev == next
    }
}

// ── Pagination ───────────────────────────────────────────────────────

/// Page position derived from the server's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    /// `ceil(total / per_page)`, never less than 1.
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let pages = total.div_ceil(u64::from(per_page)).max(1);
        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages: u32::try_from(pages).unwrap_or(u32::MAX),
        }
    }

    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self::new(page.page, page.per_page, page.total)
    }

    /// "Previous" is enabled.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// "Next" is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

// ── Controller ───────────────────────────────────────────────────────

/// What a renderer sees of a list view.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub query: ListQuery,
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl<T> ListSnapshot<T> {
    fn initial(query: ListQuery) -> Self {
        Self {
            pagination: Pagination::new(query.page, query.per_page, 0),
            query,
            items: Vec::new(),
            status: FetchStatus::Idle,
            error: None,
        }
    }
}

type ListFetcher<T> =
    Arc<dyn Fn(ListQuery) -> BoxFuture<'static, Result<Page<T>, CoreError>> + Send + Sync>;

/// Drives one list view. Dropping the controller stops its task.
pub struct ListController<T> {
    query: watch::Sender<ListQuery>,
    snapshot: watch::Receiver<ListSnapshot<T>>,
    refresh: Arc<Notify>,
    _scope: Scope,
}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    /// Spawn the controller; the first fetch starts immediately.
    pub fn spawn<F, Fut>(initial: ListQuery, fetch: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>, CoreError>> + Send + 'static,
    {
        Self::spawn_with_debounce(initial, SEARCH_DEBOUNCE, fetch)
    }

    pub fn spawn_with_debounce<F, Fut>(initial: ListQuery, debounce: Duration, fetch: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>, CoreError>> + Send + 'static,
    {
        let fetcher: ListFetcher<T> = Arc::new(move |q| Box::pin(fetch(q)));
        let (query_tx, query_rx) = watch::channel(initial.clone());
        let (snapshot_tx, snapshot_rx) = watch::channel(ListSnapshot::initial(initial));
        let refresh = Arc::new(Notify::new());

        let scope = Scope::new();
        scope.spawn(drive(
            query_rx,
            snapshot_tx,
            fetcher,
            Arc::clone(&refresh),
            debounce,
        ));

        Self {
            query: query_tx,
            snapshot: snapshot_rx,
            refresh,
            _scope: scope,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot<T>> {
        self.snapshot.clone()
    }

    pub fn snapshot(&self) -> ListSnapshot<T> {
        self.snapshot.borrow().clone()
    }

    /// Every published snapshot, starting with the current one.
    pub fn stream(&self) -> WatchStream<ListSnapshot<T>> {
        WatchStream::new(self.snapshot.clone())
    }

    pub fn query(&self) -> ListQuery {
        self.query.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut ListQuery) -> bool) -> bool {
        self.query.send_if_modified(f)
    }

    /// Returns whether the requested page changed.
    pub fn set_page(&self, page: u32) -> bool {
        let page = page.max(1);
        self.update(|q| {
            let changed = q.page != page;
            q.page = page;
            changed
        })
    }

    /// Advance one page unless already on the last. Steps from the requested
    /// page, so presses made while a page is loading all count. Returns
    /// whether the requested page moved.
    pub fn next_page(&self) -> bool {
        let total_pages = self.snapshot.borrow().pagination.total_pages;
        self.update(|q| {
            if q.page >= total_pages {
                return false;
            }
            q.page += 1;
            true
        })
    }

    pub fn prev_page(&self) -> bool {
        self.update(|q| {
            if q.page <= 1 {
                return false;
            }
            q.page -= 1;
            true
        })
    }

    pub fn set_filter(&self, key: &str, value: &str) {
        self.update(|q| q.set_filter(key, value));
    }

    pub fn set_search(&self, text: &str) {
        self.set_filter(ListQuery::SEARCH, text);
    }

    pub fn set_sort(&self, sort_by: &str, order: SortOrder) {
        self.update(|q| q.set_sort(sort_by, order));
    }

    pub fn set_per_page(&self, per_page: u32) {
        let per_page = per_page.max(1);
        self.update(|q| {
            if q.per_page == per_page {
                return false;
            }
            q.per_page = per_page;
            q.page = 1;
            true
        });
    }

    /// Re-fetch with the current query.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Run a mutation. Success re-fetches the list; failure leaves the list
    /// untouched and hands the error back for an alert.
    pub async fn mutate<R, E, Fut>(&self, mutation: Fut) -> Result<R, CoreError>
    where
        Fut: Future<Output = Result<R, E>>,
        CoreError: From<E>,
    {
        match mutation.await {
            Ok(value) => {
                self.refresh();
                Ok(value)
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "mutation failed");
                Err(err)
            }
        }
    }
}

async fn drive<T: Clone + Send + Sync + 'static>(
    mut query_rx: watch::Receiver<ListQuery>,
    snapshot_tx: watch::Sender<ListSnapshot<T>>,
    fetcher: ListFetcher<T>,
    refresh: Arc<Notify>,
    debounce: Duration,
) {
    let mut last_requested: Option<ListQuery> = None;

    loop {
        let mut query = query_rx.borrow_and_update().clone();

        // Debounce: hold search edits until the text stops changing.
        if let Some(prev) = &last_requested {
            if prev.is_search_edit_of(&query) {
                loop {
                    tokio::select! {
                        () = tokio::time::sleep(debounce) => break,
                        changed = query_rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                            query = query_rx.borrow_and_update().clone();
                            if !prev.is_search_edit_of(&query) {
                                break;
                            }
                        }
                    }
                }
            }
        }

        last_requested = Some(query.clone());
        snapshot_tx.send_modify(|s| {
            s.query = query.clone();
            s.status = FetchStatus::Loading;
            s.error = None;
        });
        debug!(page = query.page, filters = ?query.filters, "fetching list");

        // A query change while in flight drops the stale request.
        let result = tokio::select! {
            result = fetcher(query.clone()) => result,
            changed = query_rx.changed() => {
                if changed.is_err() {
                    return;
                }
                debug!("list query changed in flight, discarding response");
                query_rx.mark_changed();
                continue;
            }
        };

        match result {
            Ok(page) => {
                let pagination = Pagination::from_page(&page);
                snapshot_tx.send_modify(|s| {
                    s.items = page.items;
                    s.pagination = pagination;
                    s.status = FetchStatus::Success;
                    s.error = None;
                });
            }
            Err(e) => {
                warn!(error = %e, "list fetch failed");
                snapshot_tx.send_modify(|s| {
                    s.items.clear();
                    s.pagination = Pagination::new(query.page, query.per_page, 0);
                    s.status = FetchStatus::Error;
                    s.error = Some(e.to_string());
                });
            }
        }

        tokio::select! {
            changed = query_rx.changed() => {
                if changed.is_err() {
                    return;
                }
                query_rx.mark_changed();
            }
            () = refresh.notified() => {}
        }
    }
}
