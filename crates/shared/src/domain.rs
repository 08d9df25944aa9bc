use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ProductId);
id_newtype!(DepartmentId);
id_newtype!(DistributionCenterId);

/// Shown whenever a product record carries no usable department field.
pub const DEPARTMENT_PLACEHOLDER: &str = "Department not available";

/// One product record as the catalog API returns it. The list and detail
/// endpoints share this shape; list rendering simply ignores the
/// detail-only fields (`cost`, `sku`, distribution center, department id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub retail_price: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    /// Legacy free-text department; superseded by `department_name`.
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub distribution_center_id: Option<DistributionCenterId>,
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub department_name: Option<String>,
}

impl Product {
    /// Resolves the department label: `department_name`, then the legacy
    /// `department` field, then a fixed placeholder.
    pub fn department_display(&self) -> &str {
        self.department_name
            .as_deref()
            .or(self.department.as_deref())
            .unwrap_or(DEPARTMENT_PLACEHOLDER)
    }

    pub fn price_display(&self) -> String {
        format_amount(self.retail_price, "Price not available")
    }

    pub fn cost_display(&self) -> String {
        format_amount(self.cost, "Cost not available")
    }
}

fn format_amount(amount: Option<f64>, missing: &str) -> String {
    match amount {
        Some(value) => format!("${value:.2}"),
        None => missing.to_string(),
    }
}

/// One page of listing or search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_count: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub product_count: u64,
}

/// Department record plus its full product list, as returned by the
/// department-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDetail {
    pub id: DepartmentId,
    pub name: String,
    pub product_count: u64,
    pub products: Vec<Product>,
}

/// Service banner from the API root endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
