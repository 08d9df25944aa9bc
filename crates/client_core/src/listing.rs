use shared::domain::{Product, ProductPage};

use crate::{error::ClientError, CatalogApi};

/// Fixed page size for every listing and search call.
pub const PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    Browse,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Ready,
    Error,
}

/// Which endpoint a listing fetch must hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingQuery {
    Browse,
    Search(String),
}

/// Ticket for one in-flight listing call. The sequence number is compared
/// against the latest issued one on fold, so a stale response can never
/// overwrite the result of a newer transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFetch {
    pub seq: u64,
    pub page: u32,
    pub query: ListingQuery,
}

/// Paged/searched product listing state. Each user intent maps to one
/// transition method returning the [`ListingFetch`] to execute; the caller
/// folds the outcome back with [`ListingState::fold_success`] or
/// [`ListingState::fold_failure`].
#[derive(Debug, Clone)]
pub struct ListingState {
    mode: ListingMode,
    search_term: String,
    page: u32,
    total_count: u64,
    items: Vec<Product>,
    status: ListingStatus,
    error_message: Option<String>,
    seq: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            mode: ListingMode::Browse,
            search_term: String::new(),
            page: 1,
            total_count: 0,
            items: Vec::new(),
            status: ListingStatus::Loading,
            error_message: None,
            seq: 0,
        }
    }

    pub fn mode(&self) -> ListingMode {
        self.mode
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn status(&self) -> ListingStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(PAGE_SIZE));
        pages.max(1) as u32
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// First load after mount: browse mode, page 1.
    pub fn load_initial(&mut self) -> ListingFetch {
        self.mode = ListingMode::Browse;
        self.search_term.clear();
        self.page = 1;
        self.begin(ListingQuery::Browse, 1)
    }

    /// Submits a keyword search. The raw term is trimmed; an empty result
    /// degenerates to [`ListingState::load_initial`] instead of issuing an
    /// empty search call.
    pub fn submit_search(&mut self, raw_term: &str) -> ListingFetch {
        let term = raw_term.trim();
        if term.is_empty() {
            return self.load_initial();
        }
        self.mode = ListingMode::Search;
        self.search_term = term.to_string();
        self.page = 1;
        self.begin(ListingQuery::Search(term.to_string()), 1)
    }

    /// Unconditionally drops the search term and returns to browse mode.
    pub fn clear_search(&mut self) -> ListingFetch {
        self.load_initial()
    }

    /// Re-issues the current mode's call for `target`. Callers must keep
    /// `target` inside `1..=total_pages()`; the view disables the buttons
    /// that would leave it, and no clamping happens here. `page` advances
    /// only once the fetch succeeds.
    pub fn change_page(&mut self, target: u32) -> ListingFetch {
        let query = match self.mode {
            ListingMode::Browse => ListingQuery::Browse,
            ListingMode::Search => ListingQuery::Search(self.search_term.clone()),
        };
        self.begin(query, target)
    }

    fn begin(&mut self, query: ListingQuery, page: u32) -> ListingFetch {
        self.status = ListingStatus::Loading;
        self.error_message = None;
        self.seq += 1;
        ListingFetch {
            seq: self.seq,
            page,
            query,
        }
    }

    /// Applies a successful response. Returns false (and leaves the state
    /// untouched) when a newer fetch has been issued since `fetch`.
    pub fn fold_success(&mut self, fetch: &ListingFetch, page: ProductPage) -> bool {
        if fetch.seq != self.seq {
            return false;
        }
        self.page = page.page.unwrap_or(fetch.page);
        self.total_count = page.total_count;
        self.items = page.products;
        self.status = ListingStatus::Ready;
        self.error_message = None;
        true
    }

    /// Applies a failed response, keeping the previously displayed items.
    pub fn fold_failure(&mut self, fetch: &ListingFetch, message: impl Into<String>) -> bool {
        if fetch.seq != self.seq {
            return false;
        }
        self.status = ListingStatus::Error;
        self.error_message = Some(message.into());
        true
    }

    pub fn fold(&mut self, fetch: &ListingFetch, result: Result<ProductPage, ClientError>) -> bool {
        match result {
            Ok(page) => self.fold_success(fetch, page),
            Err(err) => self.fold_failure(fetch, err.to_string()),
        }
    }
}

/// Executes a listing fetch against the endpoint its query names: browse
/// tickets hit the list endpoint, search tickets the search endpoint.
pub async fn fetch_listing<A>(api: &A, fetch: &ListingFetch) -> Result<ProductPage, ClientError>
where
    A: CatalogApi + ?Sized,
{
    match &fetch.query {
        ListingQuery::Browse => api.list_products(fetch.page, PAGE_SIZE).await,
        ListingQuery::Search(term) => api.search_products(term, fetch.page, PAGE_SIZE).await,
    }
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
