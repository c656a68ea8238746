//! Live search session behavior with a paused clock.

use std::time::Duration;

use storefront_commerce::catalog::{CatalogPayload, Product};
use storefront_core::{ImageConfig, RouteState};
use storefront_search::{
    ClickEvent, ClickListeners, FetchState, LiveSearch, LiveSearchConfig, SearchError,
    StaticCatalog,
};
use tokio::time::{sleep, Instant};

const CATALOG: &str = r#"{"data": [
    {"id": 1, "name": "Red Runner", "image": "red.png", "status": 0,
     "variation": [{"price": 100, "offers": [{"price": 80, "discount": 20}]}]},
    {"id": 2, "name": "Blue Runner", "image": "blue.png", "status": 1,
     "variation": [{"price": 90, "offers": []}]},
    {"id": 3, "name": "Trail RUNNING Shoe", "image": "trail.png", "status": null,
     "variation": {"price": "120"}},
    {"id": 4, "name": "Wool Socks", "image": "socks.png", "status": false,
     "variation": [{"price": 15}]}
]}"#;

fn catalog() -> Vec<Product> {
    CatalogPayload::from_json(CATALOG).unwrap().data
}

fn config() -> LiveSearchConfig {
    LiveSearchConfig {
        images: ImageConfig {
            base_url: "https://img.test".to_string(),
        },
        ..Default::default()
    }
}

fn product_route() -> RouteState {
    RouteState::new("/product/default/[slug]").with_slug("red-runner")
}

fn mount(listeners: &ClickListeners) -> LiveSearch {
    let mut search = LiveSearch::mount(config(), listeners, product_route());
    search.set_catalog(catalog());
    search
}

fn names(search: &LiveSearch) -> Vec<String> {
    search.results().into_iter().map(|p| p.name).collect()
}

struct FailingCatalog;

#[async_trait::async_trait]
impl storefront_search::CatalogSource for FailingCatalog {
    async fn fetch(&self) -> FetchState {
        FetchState::failed("503 Service Unavailable")
    }
}

#[tokio::test(start_paused = true)]
async fn test_short_terms_yield_nothing() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    for term in ["", "r", "ru", "Ru", "éé"] {
        search.on_input(term);
        assert!(!search.is_pending(), "{term:?}");
        sleep(Duration::from_millis(100)).await;
        assert!(search.results().is_empty(), "{term:?}");
    }
    assert_eq!(search.snapshot().computations, 0);
}

#[tokio::test(start_paused = true)]
async fn test_shortening_term_clears_at_once() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    search.on_input("run");
    sleep(Duration::from_millis(60)).await;
    assert_eq!(names(&search), ["Red Runner", "Trail RUNNING Shoe"]);

    search.on_input("ru");
    assert!(search.results().is_empty());
    assert_eq!(search.snapshot().term, "");
}

#[tokio::test(start_paused = true)]
async fn test_burst_runs_once_with_final_term() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);
    let mut updates = search.subscribe();
    let start = Instant::now();

    search.on_input("red");
    sleep(Duration::from_millis(10)).await;
    search.on_input("wool");
    sleep(Duration::from_millis(20)).await;
    search.on_input("trail");

    sleep(Duration::from_millis(40)).await;
    assert_eq!(search.snapshot().computations, 0);
    assert!(search.is_pending());

    updates.changed().await.unwrap();
    let elapsed = start.elapsed();
    assert!(
        elapsed >= Duration::from_millis(80) && elapsed < Duration::from_millis(85),
        "{elapsed:?}"
    );

    sleep(Duration::from_millis(200)).await;
    let snapshot = search.snapshot();
    assert_eq!(snapshot.computations, 1);
    assert_eq!(snapshot.term, "trail");
    assert_eq!(names(&search), ["Trail RUNNING Shoe"]);
}

#[tokio::test(start_paused = true)]
async fn test_settled_waits_for_pending_run() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    let idle = search.settled().await;
    assert_eq!(idle.computations, 0);

    search.on_input("wool");
    let snapshot = search.settled().await;
    assert_eq!(snapshot.term, "wool");
    assert_eq!(snapshot.results.len(), 1);
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_spaced_keystrokes_each_compute() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    search.on_input("red");
    sleep(Duration::from_millis(60)).await;
    search.on_input("redd");
    sleep(Duration::from_millis(60)).await;

    let snapshot = search.snapshot();
    assert_eq!(snapshot.computations, 2);
    assert!(snapshot.results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_inactive_products_never_match() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    search.on_input("BLUE");
    sleep(Duration::from_millis(60)).await;
    assert_eq!(search.snapshot().computations, 1);
    assert!(search.results().is_empty());

    search.on_input("runner");
    sleep(Duration::from_millis(60)).await;
    assert_eq!(names(&search), ["Red Runner"]);
}

#[tokio::test(start_paused = true)]
async fn test_new_catalog_is_filtered_again() {
    let listeners = ClickListeners::new();
    let mut search = LiveSearch::mount(config(), &listeners, product_route());

    search.on_input("socks");
    sleep(Duration::from_millis(60)).await;
    assert!(search.results().is_empty());

    search.set_catalog(catalog());
    sleep(Duration::from_millis(60)).await;
    assert_eq!(names(&search), ["Wool Socks"]);
}

#[tokio::test(start_paused = true)]
async fn test_slug_change_resets_search() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    search.on_input("run");
    sleep(Duration::from_millis(60)).await;
    assert!(!search.results().is_empty());

    search.on_input("runn");
    assert!(search.is_pending());
    search.on_route_change(RouteState::new("/product/default/[slug]").with_slug("wool-socks"));

    assert_eq!(search.term(), "");
    assert!(search.results().is_empty());
    assert!(!search.is_pending());

    sleep(Duration::from_millis(100)).await;
    assert!(search.results().is_empty());
    assert_eq!(search.snapshot().computations, 1);
}

#[tokio::test(start_paused = true)]
async fn test_pathname_change_collapses_panel() {
    let listeners = ClickListeners::new();
    let mut search = LiveSearch::mount(config(), &listeners, RouteState::new("/"));
    search.set_catalog(catalog());

    search.on_input("run");
    sleep(Duration::from_millis(60)).await;
    listeners.dispatch(&ClickEvent::inside(search.container_id()));
    assert!(search.panel().showing_results);

    search.on_route_change(RouteState::new("/shop"));
    assert!(!search.panel().showing_results);
    assert_eq!(search.term(), "run");

    let before = search.panel();
    search.on_route_change(RouteState::new("/shop"));
    assert_eq!(search.panel(), before);
}

#[tokio::test]
async fn test_clicks() {
    let listeners = ClickListeners::new();
    let search = LiveSearch::mount(config(), &listeners, RouteState::new("/"));
    let other = LiveSearch::mount(config(), &listeners, RouteState::new("/"));

    search.on_input_click();
    assert!(search.panel().open);

    listeners.dispatch(&ClickEvent::inside(search.container_id()));
    assert!(search.panel().showing_results);
    assert!(search.panel().open);
    assert!(!other.panel().showing_results);

    listeners.dispatch(&ClickEvent::inside(search.container_id()));
    assert!(search.panel().showing_results);

    listeners.dispatch(&ClickEvent::outside());
    assert!(!search.panel().showing_results);
    assert!(!search.panel().open);
}

#[tokio::test(start_paused = true)]
async fn test_listeners_released_on_drop() {
    let listeners = ClickListeners::new();

    for _ in 0..5 {
        let mut search = mount(&listeners);
        search.on_input("runner");
        assert_eq!(listeners.len(), 1);
    }
    assert!(listeners.is_empty());

    let search = mount(&listeners);
    let updates = search.subscribe();
    drop(search);
    assert!(listeners.is_empty());
    assert!(updates.has_changed().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_rows() {
    let listeners = ClickListeners::new();
    let mut search = mount(&listeners);

    search.on_input("red run");
    sleep(Duration::from_millis(60)).await;

    let rows = search.rows();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.href, "/product/default/1");
    assert_eq!(row.image_url, "https://img.test/products/red.png");
    assert_eq!(row.name.as_str(), "<strong>Red Run</strong>ner");

    let html = row.to_html();
    assert!(html.contains(r#"<del class="old-price">AED 100.00</del><ins class="new-price">AED 80.00</ins>"#));
}

#[tokio::test]
async fn test_failed_fetch_keeps_catalog() {
    let listeners = ClickListeners::new();
    let mut search = LiveSearch::mount(config(), &listeners, RouteState::new("/"));

    let loaded = search.load_catalog(&StaticCatalog::new(catalog())).await.unwrap();
    assert_eq!(loaded, 4);

    let err = search.load_catalog(&FailingCatalog).await.unwrap_err();
    assert!(matches!(err, SearchError::Fetch(_)));
    assert_eq!(search.catalog_len(), 4);
}

#[tokio::test]
async fn test_submit_requests_shop_navigation() {
    let listeners = ClickListeners::new();
    let mut search = LiveSearch::mount(config(), &listeners, RouteState::new("/"));
    search.on_input("trail & road");

    assert_eq!(search.submit().to_url(), "/shop?search=trail+%26+road");
}
