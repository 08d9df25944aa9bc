//! Backend commands queued from UI to backend worker.

use client_core::ListingFetch;
use shared::domain::{DepartmentId, ProductId};

pub enum BackendCommand {
    /// Execute a listing fetch ticket (browse or search, with page).
    FetchListing(ListingFetch),
    FetchProduct(ProductId),
    FetchDepartments,
    FetchDepartment(DepartmentId),
}
