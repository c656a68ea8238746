//! The live search session behind the storefront header search box.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::search::{ProductFilter, DEFAULT_MIN_CHARS};
use storefront_core::{ImageConfig, NavigationRequest, RouteState, StorefrontConfig};
use tokio::sync::watch;

use crate::debounce::Debouncer;
use crate::error::SearchResult;
use crate::listener::{ClickListeners, ClickSubscription, ContainerId};
use crate::panel::PanelState;
use crate::render::ResultRow;
use crate::source::CatalogSource;

static NEXT_CONTAINER: AtomicU64 = AtomicU64::new(1);

/// Query parameter carrying the submitted term.
pub const SEARCH_QUERY_PARAM: &str = "search";

/// Settings for one search box.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSearchConfig {
    /// Quiet period after the last keystroke.
    pub debounce: Duration,
    /// Shortest term that is searched for, in characters.
    pub min_chars: usize,
    /// Route a submitted search navigates to.
    pub results_path: String,
    /// Image host used for result thumbnails.
    pub images: ImageConfig,
}

impl Default for LiveSearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            min_chars: DEFAULT_MIN_CHARS,
            results_path: "/shop".to_string(),
            images: ImageConfig::default(),
        }
    }
}

impl From<&StorefrontConfig> for LiveSearchConfig {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            debounce: config.search.debounce(),
            min_chars: config.search.min_chars,
            results_path: config.search.results_path.clone(),
            images: config.images.clone(),
        }
    }
}

/// Published state of the results list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSnapshot {
    /// Term the results were computed for. Empty after a clear.
    pub term: String,
    /// Matching products in catalog order.
    pub results: Vec<Product>,
    /// Number of filter computations that have been published.
    pub computations: u64,
}

/// A mounted search box.
///
/// Typing schedules a debounced filter over the catalog; results are
/// published through a watch channel (see [`LiveSearch::subscribe`]). The
/// session holds one body click subscription and at most one pending
/// computation, both released when it is dropped.
pub struct LiveSearch {
    id: ContainerId,
    config: LiveSearchConfig,
    filter: ProductFilter,
    term: String,
    route: RouteState,
    catalog: Arc<Vec<Product>>,
    panel: Arc<Mutex<PanelState>>,
    results: Arc<watch::Sender<SearchSnapshot>>,
    debouncer: Debouncer,
    _click: ClickSubscription,
}

impl std::fmt::Debug for LiveSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSearch")
            .field("id", &self.id)
            .field("term", &self.term)
            .field("route", &self.route)
            .field("catalog", &self.catalog.len())
            .field("pending", &self.debouncer.is_pending())
            .finish()
    }
}

fn lock(panel: &Mutex<PanelState>) -> MutexGuard<'_, PanelState> {
    panel.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LiveSearch {
    /// Mount a search box on the page at `route`.
    pub fn mount(config: LiveSearchConfig, listeners: &ClickListeners, route: RouteState) -> Self {
        let id = ContainerId(NEXT_CONTAINER.fetch_add(1, Ordering::Relaxed));
        let panel = Arc::new(Mutex::new(PanelState::default()));

        let click = {
            let panel = Arc::clone(&panel);
            listeners.subscribe(move |event| lock(&panel).on_body_click(event, id))
        };

        let (results, _) = watch::channel(SearchSnapshot::default());

        tracing::debug!(container = id.0, pathname = %route.pathname, "live search mounted");

        Self {
            id,
            filter: ProductFilter::new(config.min_chars),
            debouncer: Debouncer::new(config.debounce),
            config,
            term: String::new(),
            route,
            catalog: Arc::new(Vec::new()),
            panel,
            results: Arc::new(results),
            _click: click,
        }
    }

    pub fn container_id(&self) -> ContainerId {
        self.id
    }

    pub fn config(&self) -> &LiveSearchConfig {
        &self.config
    }

    /// Current contents of the input.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn route(&self) -> &RouteState {
        &self.route
    }

    /// Number of products the session searches over.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Replace the catalog. A searchable term is filtered again.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.catalog = Arc::new(products);
        if self.filter.is_searchable(&self.term) {
            self.schedule_filter();
        }
    }

    /// Fetch the catalog from `source`.
    ///
    /// On failure the previous catalog stays in place and the error is
    /// returned for the caller to surface.
    pub async fn load_catalog(&mut self, source: &dyn CatalogSource) -> SearchResult<usize> {
        match source.fetch().await.into_products() {
            Ok(products) => {
                let count = products.len();
                self.set_catalog(products);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(
                    container = self.id.0,
                    error = %e,
                    kept = self.catalog.len(),
                    "catalog unavailable, keeping previous products"
                );
                Err(e)
            }
        }
    }

    /// Handle an input change.
    ///
    /// Short terms clear the results at once. Longer terms are filtered after
    /// the debounce window, restarting the window on every call.
    pub fn on_input(&mut self, term: impl Into<String>) {
        self.term = term.into();

        if self.filter.is_searchable(&self.term) {
            self.schedule_filter();
        } else {
            self.clear_results();
        }
    }

    fn schedule_filter(&mut self) {
        let term = self.term.clone();
        let catalog = Arc::clone(&self.catalog);
        let filter = self.filter;
        let results = Arc::clone(&self.results);
        let container = self.id.0;

        tracing::debug!(container, term = %term, delay_ms = self.debouncer.delay().as_millis() as u64, "search scheduled");

        self.debouncer.schedule(move |ticket| async move {
            let matches = filter.apply(&catalog, &term);
            let count = matches.len();

            // The ticket is checked under the channel lock so a clear that
            // cancelled this run cannot be overwritten.
            let published = results.send_if_modified(|snapshot| {
                if !ticket.is_current() {
                    return false;
                }
                snapshot.term = term;
                snapshot.results = matches;
                snapshot.computations += 1;
                true
            });

            if published {
                tracing::info!(container, results = count, "search results updated");
            }
        });
    }

    fn clear_results(&mut self) {
        if self.debouncer.cancel() {
            tracing::debug!(container = self.id.0, "pending search cancelled");
        }

        self.results.send_if_modified(|snapshot| {
            if snapshot.term.is_empty() && snapshot.results.is_empty() {
                return false;
            }
            snapshot.term.clear();
            snapshot.results.clear();
            true
        });
    }

    /// Subscribe to published results.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.results.subscribe()
    }

    /// Latest published results.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.results.borrow().clone()
    }

    /// Latest matching products.
    pub fn results(&self) -> Vec<Product> {
        self.results.borrow().results.clone()
    }

    /// Render-ready rows for the latest results.
    pub fn rows(&self) -> Vec<ResultRow> {
        let snapshot = self.results.borrow();
        snapshot
            .results
            .iter()
            .map(|product| ResultRow::from_product(product, &snapshot.term, &self.config.images))
            .collect()
    }

    /// True while a computation is waiting out the debounce window.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait for the pending computation, if any, and return the results.
    pub async fn settled(&self) -> SearchSnapshot {
        let mut updates = self.results.subscribe();
        while self.debouncer.is_pending() {
            // A run may publish just before it reports finished, so wake up
            // at least once per window to look again.
            let _ = tokio::time::timeout(self.debouncer.delay(), updates.changed()).await;
        }
        self.snapshot()
    }

    pub fn panel(&self) -> PanelState {
        *lock(&self.panel)
    }

    /// Handle a click on the search input.
    pub fn on_input_click(&self) {
        lock(&self.panel).toggle_open();
    }

    /// Handle navigation to `next`.
    ///
    /// A new slug means a new page context: the term and results are cleared
    /// and any pending computation is cancelled. Any route change collapses
    /// the results list.
    pub fn on_route_change(&mut self, next: RouteState) {
        let change = self.route.diff(&next);
        self.route = next;

        if change.is_unchanged() {
            return;
        }

        if change.slug_changed {
            self.term.clear();
            self.clear_results();
        }
        lock(&self.panel).collapse_results();

        tracing::debug!(
            container = self.id.0,
            pathname = %self.route.pathname,
            slug_changed = change.slug_changed,
            "route changed"
        );
    }

    /// Navigation requested by submitting the form.
    pub fn submit(&self) -> NavigationRequest {
        NavigationRequest::new(self.config.results_path.clone())
            .with_query(SEARCH_QUERY_PARAM, self.term.clone())
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        self.debouncer.cancel();
        tracing::debug!(container = self.id.0, "live search unmounted");
    }
}
