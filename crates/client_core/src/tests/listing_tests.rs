use super::*;
use std::sync::Mutex;

use async_trait::async_trait;
use shared::domain::{
    ApiInfo, Department, DepartmentDetail, DepartmentId, ProductId,
};

fn product(id: i64, name: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category: "Tops".to_string(),
        brand: None,
        retail_price: Some(10.0),
        cost: None,
        department: None,
        sku: None,
        distribution_center_id: None,
        department_id: None,
        department_name: Some("Women".to_string()),
    }
}

fn page_of(count: usize, total_count: u64, page: Option<u32>) -> ProductPage {
    ProductPage {
        products: (0..count as i64).map(|i| product(i, "Item")).collect(),
        total_count,
        page,
        page_size: Some(PAGE_SIZE),
        search_term: None,
    }
}

#[test]
fn total_pages_rounds_up_and_never_drops_below_one() {
    let mut state = ListingState::new();
    for (total_count, expected) in [(0, 1), (1, 1), (12, 1), (13, 2), (25, 3), (36, 3)] {
        let fetch = state.load_initial();
        state.fold_success(&fetch, page_of(1, total_count, Some(1)));
        assert_eq!(state.total_pages(), expected, "total_count={total_count}");
    }
}

#[test]
fn navigation_flags_at_page_boundaries() {
    // 25 products over 12 per page -> 3 pages.
    let mut state = ListingState::new();
    let fetch = state.load_initial();
    state.fold_success(&fetch, page_of(12, 25, Some(1)));
    assert_eq!(state.total_pages(), 3);
    assert!(!state.can_go_previous());
    assert!(state.can_go_next());

    let fetch = state.change_page(3);
    state.fold_success(&fetch, page_of(1, 25, Some(3)));
    assert!(state.can_go_previous());
    assert!(!state.can_go_next());
}

#[test]
fn blank_search_terms_degenerate_to_initial_load() {
    for raw in ["", "   ", "\t\n"] {
        let mut state = ListingState::new();
        let fetch = state.submit_search("boots");
        state.fold_success(&fetch, page_of(2, 2, Some(1)));

        let fetch = state.submit_search(raw);
        assert_eq!(fetch.query, ListingQuery::Browse, "raw={raw:?}");
        assert_eq!(fetch.page, 1);
        assert_eq!(state.mode(), ListingMode::Browse);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.page(), 1);
    }
}

#[test]
fn submit_search_trims_and_enters_search_mode() {
    let mut state = ListingState::new();
    let fetch = state.submit_search("  shirt ");
    assert_eq!(fetch.query, ListingQuery::Search("shirt".to_string()));
    assert_eq!(fetch.page, 1);
    assert_eq!(state.mode(), ListingMode::Search);
    assert_eq!(state.search_term(), "shirt");

    state.fold_success(&fetch, page_of(3, 3, Some(1)));
    assert_eq!(state.items().len(), 3);
    assert_eq!(state.total_count(), 3);
    assert_eq!(state.status(), ListingStatus::Ready);
}

#[test]
fn clear_search_always_resets_to_browse_page_one() {
    let mut state = ListingState::new();
    let fetch = state.submit_search("shoes");
    state.fold_success(&fetch, page_of(12, 30, Some(1)));
    let fetch = state.change_page(2);
    state.fold_success(&fetch, page_of(12, 30, Some(2)));

    let fetch = state.clear_search();
    assert_eq!(fetch.query, ListingQuery::Browse);
    assert_eq!(fetch.page, 1);
    assert_eq!(state.mode(), ListingMode::Browse);
    assert_eq!(state.search_term(), "");
    assert_eq!(state.page(), 1);
    assert_eq!(state.status(), ListingStatus::Loading);
}

#[test]
fn change_page_reissues_the_current_modes_query() {
    let mut state = ListingState::new();
    let fetch = state.submit_search("shoes");
    state.fold_success(&fetch, page_of(12, 30, Some(1)));

    let fetch = state.change_page(2);
    assert_eq!(fetch.query, ListingQuery::Search("shoes".to_string()));
    assert_eq!(fetch.page, 2);
    // page only advances once the fetch resolves
    assert_eq!(state.page(), 1);

    state.fold_success(&fetch, page_of(12, 30, Some(2)));
    assert_eq!(state.page(), 2);
}

#[test]
fn fold_prefers_api_echoed_page_and_falls_back_to_target() {
    let mut state = ListingState::new();
    let fetch = state.load_initial();
    state.fold_success(&fetch, page_of(12, 40, Some(1)));

    let fetch = state.change_page(2);
    state.fold_success(&fetch, page_of(12, 40, Some(3)));
    assert_eq!(state.page(), 3);

    let fetch = state.change_page(2);
    state.fold_success(&fetch, page_of(12, 40, None));
    assert_eq!(state.page(), 2);
}

#[test]
fn stale_fold_is_discarded_in_favor_of_latest_fetch() {
    let mut state = ListingState::new();
    let first = state.submit_search("shirt");
    let second = state.submit_search("shoes");

    // the older response resolves last but must not win
    assert!(state.fold_success(&second, page_of(2, 2, Some(1))));
    assert!(!state.fold_success(&first, page_of(9, 9, Some(1))));

    assert_eq!(state.search_term(), "shoes");
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.total_count(), 2);
    assert_eq!(state.status(), ListingStatus::Ready);
}

#[test]
fn tickets_issued_before_a_remount_never_fold_into_the_relisted_state() {
    // Re-entering the products view re-runs load_initial on the same
    // instance, so the sequence counter keeps growing monotonically and
    // tickets still in flight from before the re-entry stay outranked.
    let mut state = ListingState::new();
    let fetch = state.submit_search("shirt");
    state.fold_success(&fetch, page_of(3, 3, Some(1)));
    let in_flight = state.change_page(2);

    let remount = state.load_initial();
    assert!(remount.seq > in_flight.seq);

    assert!(state.fold_success(&remount, page_of(12, 40, Some(1))));
    assert!(!state.fold_success(&in_flight, page_of(1, 1, Some(2))));

    assert_eq!(state.mode(), ListingMode::Browse);
    assert_eq!(state.page(), 1);
    assert_eq!(state.total_count(), 40);
    assert_eq!(state.items().len(), 12);
}

#[test]
fn stale_failure_cannot_mask_a_newer_success() {
    let mut state = ListingState::new();
    let first = state.load_initial();
    let second = state.change_page(1);

    assert!(state.fold_success(&second, page_of(5, 5, Some(1))));
    assert!(!state.fold_failure(&first, "Failed to fetch products"));
    assert_eq!(state.status(), ListingStatus::Ready);
    assert_eq!(state.error_message(), None);
}

#[test]
fn failure_keeps_previous_items_and_surfaces_message() {
    let mut state = ListingState::new();
    let fetch = state.load_initial();
    state.fold_success(&fetch, page_of(4, 4, Some(1)));

    let fetch = state.change_page(1);
    assert!(state.fold_failure(&fetch, "Failed to fetch products: connection failed"));
    assert_eq!(state.status(), ListingStatus::Error);
    assert_eq!(
        state.error_message(),
        Some("Failed to fetch products: connection failed")
    );
    assert_eq!(state.items().len(), 4);
}

#[test]
fn repeated_initial_loads_are_idempotent_over_a_fixed_dataset() {
    let mut state = ListingState::new();
    let fetch = state.load_initial();
    state.fold_success(&fetch, page_of(7, 7, Some(1)));
    let (first_items, first_total) = (state.items().to_vec(), state.total_count());

    let fetch = state.load_initial();
    state.fold_success(&fetch, page_of(7, 7, Some(1)));
    assert_eq!(state.items(), first_items.as_slice());
    assert_eq!(state.total_count(), first_total);
}

#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl CatalogApi for RecordingApi {
    async fn list_products(&self, page: u32, page_size: u32) -> Result<ProductPage, ClientError> {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("list page={page} page_size={page_size}"));
        Ok(page_of(0, 0, Some(page)))
    }

    async fn search_products(
        &self,
        term: &str,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, ClientError> {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("search term={term} page={page} page_size={page_size}"));
        Ok(page_of(0, 0, Some(page)))
    }

    async fn product_by_id(&self, _id: ProductId) -> Result<Product, ClientError> {
        Err(ClientError::NotFound { what: "Product" })
    }

    async fn departments(&self) -> Result<Vec<Department>, ClientError> {
        Ok(Vec::new())
    }

    async fn department_by_id(
        &self,
        _id: DepartmentId,
    ) -> Result<DepartmentDetail, ClientError> {
        Err(ClientError::NotFound { what: "Department" })
    }

    async fn api_info(&self) -> Result<ApiInfo, ClientError> {
        Err(ClientError::Network {
            message: "Failed to fetch API information: connection failed".to_string(),
        })
    }
}

#[tokio::test]
async fn fetch_listing_routes_browse_and_search_tickets_to_their_endpoints() {
    let api = RecordingApi::default();
    let mut state = ListingState::new();

    let fetch = state.load_initial();
    fetch_listing(&api, &fetch).await.expect("browse fetch");

    let fetch = state.submit_search("shoes");
    fetch_listing(&api, &fetch).await.expect("search fetch");

    let fetch = state.change_page(2);
    fetch_listing(&api, &fetch).await.expect("paged search fetch");

    let calls = api.calls.lock().expect("lock");
    assert_eq!(
        *calls,
        [
            "list page=1 page_size=12",
            "search term=shoes page=1 page_size=12",
            "search term=shoes page=2 page_size=12",
        ]
    );
}
