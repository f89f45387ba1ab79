// ── Fetch-with-fallback ──
//
// Wraps a network call so a view always ends up with something to render:
// live data when the call succeeds, the view's built-in dataset when it
// fails (or, per the view's `EmptyPolicy`, when it succeeds with nothing).
// `FetchCell` adds observable status, request generations and the mount
// guard so a response never lands in a view that has moved on.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use hisi_api::Page;

use crate::model::{AboutContent, DashboardMetrics, ReviewStats};

// ── Status ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// Observable outcome of the latest request for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub status: FetchStatus,
    pub data: Option<T>,
    pub error_message: Option<String>,
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> FetchResult<T> {
    pub fn idle() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error_message: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Enter `Loading` from any state. Previous data stays visible.
    fn begin(&mut self) {
        self.status = FetchStatus::Loading;
        self.error_message = None;
    }
}

// ── Fallback policy ──────────────────────────────────────────────────

/// What a view does with a successful but empty response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Treat empty like a failure and render the built-in dataset.
    UseFallback,
    /// Render the empty result as-is.
    KeepEmpty,
}

/// Where rendered data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

/// Data ready for rendering plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loaded<T> {
    pub data: T,
    pub source: DataSource,
    /// The failure that caused a fallback, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Loaded<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
            error: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded {
            data: f(self.data),
            source: self.source,
            error: self.error,
        }
    }
}

/// Emptiness as a view sees it.
pub trait ViewData {
    fn is_empty_view(&self) -> bool;
}

impl<T> ViewData for Vec<T> {
    fn is_empty_view(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ViewData for Option<T> {
    fn is_empty_view(&self) -> bool {
        self.is_none()
    }
}

impl<T> ViewData for Page<T> {
    fn is_empty_view(&self) -> bool {
        self.items.is_empty()
    }
}

impl ViewData for AboutContent {
    fn is_empty_view(&self) -> bool {
        self.title.trim().is_empty()
    }
}

impl ViewData for DashboardMetrics {
    fn is_empty_view(&self) -> bool {
        false
    }
}

impl ViewData for ReviewStats {
    fn is_empty_view(&self) -> bool {
        self.total_reviews == 0
    }
}

/// Run `request`, map a success through `transform`, and substitute
/// `fallback()` on any error. Empty successes follow `policy`.
pub async fn fetch_with_fallback<R, E, T, Fut>(
    view: &'static str,
    request: Fut,
    transform: impl FnOnce(R) -> T,
    fallback: impl FnOnce() -> T,
    policy: EmptyPolicy,
) -> Loaded<T>
where
    Fut: Future<Output = Result<R, E>>,
    E: Display,
    T: ViewData,
{
    debug!(view, "fetching");
    match request.await {
        Ok(raw) => {
            let data = transform(raw);
            if data.is_empty_view() && policy == EmptyPolicy::UseFallback {
                debug!(view, "empty response, using built-in content");
                Loaded {
                    data: fallback(),
                    source: DataSource::Fallback,
                    error: None,
                }
            } else {
                Loaded::live(data)
            }
        }
        Err(e) => {
            warn!(view, error = %e, "fetch failed, using built-in content");
            Loaded {
                data: fallback(),
                source: DataSource::Fallback,
                error: Some(e.to_string()),
            }
        }
    }
}

// ── Request generations ──────────────────────────────────────────────

/// Monotonic request counter; only the newest ticket may publish.
#[derive(Debug, Clone, Default)]
pub struct Generations(Arc<AtomicU64>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generations {
    pub fn issue(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

// ── Mount scope ──────────────────────────────────────────────────────

/// Cheap handle to a view's lifetime.
#[derive(Debug, Clone)]
pub struct Mount {
    token: CancellationToken,
}

impl Mount {
    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Resolves once the owning [`Scope`] is dropped.
    pub async fn unmounted(&self) {
        self.token.cancelled().await;
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

/// Owns a view's lifetime. Everything spawned through it, and every
/// [`Mount`] handed out, is released when the scope drops.
#[derive(Debug)]
pub struct Scope {
    mount: Mount,
    _guard: DropGuard,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        let token = CancellationToken::new();
        Self {
            mount: Mount {
                token: token.clone(),
            },
            _guard: token.drop_guard(),
        }
    }

    pub fn mount(&self) -> Mount {
        self.mount.clone()
    }

    /// Spawn a task that stops when the scope is dropped.
    pub fn spawn<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.mount.token();
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = task => {}
            }
        })
    }
}

// ── Observable cell ──────────────────────────────────────────────────

/// What happened to a response handed to [`FetchCell::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request was issued before this one finished.
    Superseded,
    /// The view was torn down before the response arrived.
    Unmounted,
}

/// A view's data slot, observable through a `watch` channel.
#[derive(Debug)]
pub struct FetchCell<T> {
    tx: watch::Sender<FetchResult<T>>,
    generations: Generations,
}

impl<T: Clone + Send + Sync + 'static> Default for FetchCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> FetchCell<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FetchResult::idle());
        Self {
            tx,
            generations: Generations::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchResult<T>> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> FetchResult<T> {
        self.tx.borrow().clone()
    }

    /// Run `request` and publish its result, unless a newer request was
    /// issued meanwhile or `mount` ended.
    pub async fn load<Fut, E>(&self, mount: &Mount, request: Fut) -> Outcome
    where
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let ticket = self.generations.issue();
        self.tx.send_modify(FetchResult::begin);

        let result = tokio::select! {
            biased;
            () = mount.unmounted() => return Outcome::Unmounted,
            result = request => result,
        };

        if !mount.is_mounted() {
            return Outcome::Unmounted;
        }
        if !self.generations.is_current(ticket) {
            debug!("discarding superseded response");
            return Outcome::Superseded;
        }

        match result {
            Ok(data) => {
                self.tx.send_replace(FetchResult {
                    status: FetchStatus::Success,
                    data: Some(data),
                    error_message: None,
                });
            }
            Err(e) => {
                warn!(error = %e, "fetch failed");
                self.tx.send_modify(|r| {
                    r.status = FetchStatus::Error;
                    r.error_message = Some(e.to_string());
                });
            }
        }
        Outcome::Applied
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn failure_yields_fallback() {
        let loaded = fetch_with_fallback(
            "products",
            async { Err::<Vec<u32>, _>("connection refused") },
            |v| v,
            || vec![1, 2, 3],
            EmptyPolicy::KeepEmpty,
        )
        .await;
        assert_eq!(loaded.data, vec![1, 2, 3]);
        assert!(loaded.is_fallback());
        assert_eq!(loaded.error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn empty_success_follows_policy() {
        let fallback = fetch_with_fallback(
            "collections",
            async { Ok::<_, String>(Vec::<u32>::new()) },
            |v| v,
            || vec![7],
            EmptyPolicy::UseFallback,
        )
        .await;
        assert_eq!(fallback.data, vec![7]);
        assert!(fallback.is_fallback());
        assert!(fallback.error.is_none());

        let kept = fetch_with_fallback(
            "blog",
            async { Ok::<_, String>(Vec::<u32>::new()) },
            |v| v,
            || vec![7],
            EmptyPolicy::KeepEmpty,
        )
        .await;
        assert!(kept.data.is_empty());
        assert_eq!(kept.source, DataSource::Live);
    }

    #[tokio::test]
    async fn success_is_transformed() {
        let loaded = fetch_with_fallback(
            "hero",
            async { Ok::<_, String>(vec!["a", "b"]) },
            |v| v.into_iter().map(str::to_uppercase).collect::<Vec<_>>(),
            Vec::new,
            EmptyPolicy::UseFallback,
        )
        .await;
        assert_eq!(loaded.data, vec!["A", "B"]);
        assert_eq!(loaded.source, DataSource::Live);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let generations = Generations::default();
        let first = generations.issue();
        let second = generations.issue();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_response_is_discarded() {
        let scope = Scope::new();
        let mount = scope.mount();
        let cell = FetchCell::<&'static str>::new();

        let slow = cell.load(&mount, async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok::<_, String>("stale")
        });
        let fast = cell.load(&mount, async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, String>("fresh")
        });
        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(slow, Outcome::Superseded);
        assert_eq!(fast, Outcome::Applied);
        assert_eq!(cell.snapshot().data, Some("fresh"));
    }

    #[tokio::test(start_paused = true)]
    async fn response_after_unmount_is_dropped() {
        let scope = Scope::new();
        let mount = scope.mount();
        let cell = FetchCell::<u32>::new();

        let load = cell.load(&mount, async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok::<_, String>(42)
        });
        let teardown = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            drop(scope);
        };
        let (outcome, ()) = tokio::join!(load, teardown);

        assert_eq!(outcome, Outcome::Unmounted);
        assert!(!mount.is_mounted());
        let snapshot = cell.snapshot();
        assert_eq!(snapshot.data, None);
        assert!(snapshot.is_loading());
    }

    #[tokio::test]
    async fn error_keeps_previous_data() {
        let scope = Scope::new();
        let mount = scope.mount();
        let cell = FetchCell::<u32>::new();
        let mut rx = cell.subscribe();

        cell.load(&mount, async { Ok::<_, String>(1) }).await;
        cell.load(&mount, async { Err::<u32, _>("boom".to_string()) })
            .await;

        let latest = rx.borrow_and_update().clone();
        assert_eq!(latest.status, FetchStatus::Error);
        assert_eq!(latest.data, Some(1));
        assert_eq!(latest.error_message.as_deref(), Some("boom"));
    }

    #[tokio::test(start_paused = true)]
    async fn scoped_task_stops_on_drop() {
        let scope = Scope::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<()>();
        scope.spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        assert!(rx.recv().await.is_some());
        drop(scope);
        assert!(rx.recv().await.is_none());
    }
}
