//! Events flowing from the backend worker to the UI thread. Fetch outcomes
//! carry enough context (listing ticket, requested id) for the UI to apply
//! the stale-response guard before folding.

use client_core::{ClientError, ListingFetch};
use shared::domain::{Department, DepartmentDetail, DepartmentId, Product, ProductId, ProductPage};

pub enum UiEvent {
    ListingLoaded {
        fetch: ListingFetch,
        result: Result<ProductPage, ClientError>,
    },
    ProductLoaded {
        id: ProductId,
        result: Result<Product, ClientError>,
    },
    DepartmentsLoaded {
        result: Result<Vec<Department>, ClientError>,
    },
    DepartmentLoaded {
        id: DepartmentId,
        result: Result<DepartmentDetail, ClientError>,
    },
}
