use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::DEFAULT_BASE_URL, fetch_listing, CatalogApi, CatalogClient, ClientConfig,
    ListingState, ListingStatus,
};
use shared::domain::{DepartmentId, Product, ProductId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Browse an e-commerce product catalog from the terminal")]
struct Cli {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products, optionally filtered by a search term.
    Products {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one product in full.
    Product { id: i64 },
    /// List all departments with their product counts.
    Departments,
    /// Show one department and the products in it.
    Department { id: i64 },
    /// Print the API service banner.
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let client = CatalogClient::new(ClientConfig::new(cli.server_url)?)?;

    match cli.command {
        Command::Products { page, search } => run_listing(&client, page, search).await,
        Command::Product { id } => {
            let product = client.product_by_id(ProductId(id)).await?;
            print_product_detail(&product);
            Ok(())
        }
        Command::Departments => {
            let departments = client.departments().await?;
            for department in departments {
                println!(
                    "#{:<6} {} ({} products)",
                    department.id.0, department.name, department.product_count
                );
            }
            Ok(())
        }
        Command::Department { id } => {
            let detail = client.department_by_id(DepartmentId(id)).await?;
            println!("{} ({} products)", detail.name, detail.product_count);
            println!();
            for product in &detail.products {
                print!("{}", product_line(product));
            }
            Ok(())
        }
        Command::Info => {
            let info = client.api_info().await?;
            println!("{}", info.message);
            if let Some(version) = info.version {
                println!("version {version}");
            }
            if let Some(description) = info.description {
                println!("{description}");
            }
            Ok(())
        }
    }
}

/// Drives the same listing state machine the GUI uses: one transition, one
/// fetch, one fold.
async fn run_listing(client: &CatalogClient, page: u32, search: Option<String>) -> Result<()> {
    let mut state = ListingState::new();
    let mut fetch = match &search {
        Some(term) => state.submit_search(term),
        None => state.load_initial(),
    };
    if page > 1 {
        fetch = state.change_page(page);
    }

    let result = fetch_listing(client, &fetch).await;
    state.fold(&fetch, result);

    if state.status() == ListingStatus::Error {
        bail!(
            "{}",
            state.error_message().unwrap_or("Failed to fetch products")
        );
    }

    print!("{}", listing_report(&state));
    Ok(())
}

/// Renders the listing body: search banner, product lines, and the page
/// footer. An empty page of a non-empty result set (an out-of-range
/// `--page`) still reports the page position instead of claiming the
/// catalog is empty.
fn listing_report(state: &ListingState) -> String {
    let mut out = String::new();
    if !state.search_term().is_empty() {
        out.push_str(&format!(
            "Found {} products matching \"{}\"\n\n",
            state.total_count(),
            state.search_term()
        ));
    }

    let footer = format!(
        "Page {} of {} ({} total products)\n",
        state.page(),
        state.total_pages(),
        state.total_count()
    );

    if state.items().is_empty() {
        if state.total_count() == 0 {
            if state.search_term().is_empty() {
                out.push_str("No products available.\n");
            } else {
                out.push_str("No products found matching your search.\n");
            }
        } else {
            out.push_str("No products on this page; the requested page is out of range.\n");
            out.push_str(&footer);
        }
        return out;
    }

    for product in state.items() {
        out.push_str(&product_line(product));
    }
    out.push('\n');
    out.push_str(&footer);
    out
}

fn product_line(product: &Product) -> String {
    let brand = product.brand.as_deref().unwrap_or("-");
    format!(
        "#{:<6} {:<40} {:<16} {:<16} {:<24} {}\n",
        product.id.0,
        product.name,
        product.category,
        brand,
        product.department_display(),
        product.price_display()
    )
}

fn print_product_detail(product: &Product) {
    println!("{}", product.name);
    println!("Category: {}", product.category);
    if let Some(brand) = &product.brand {
        println!("Brand: {brand}");
    }
    println!("Department: {}", product.department_display());
    println!("Price: {}", product.price_display());
    if let Some(sku) = &product.sku {
        println!("SKU: {sku}");
    }
    if product.cost.is_some() {
        println!("Cost: {}", product.cost_display());
    }
    if let Some(center) = product.distribution_center_id {
        println!("Distribution Center ID: {}", center.0);
    }
    if let Some(department_id) = product.department_id {
        println!("Department ID: {}", department_id.0);
    }
}
