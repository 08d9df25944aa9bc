//! Main egui application: routes, per-view state, event folding, rendering.

use client_core::{FetchView, ListingMode, ListingState, ListingStatus};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::{Department, DepartmentDetail, DepartmentId, Product, ProductId};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{events::UiEvent, orchestration::dispatch_backend_command},
};

const CARDS_PER_ROW: usize = 3;
const CARD_WIDTH: f32 = 230.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Products,
    ProductDetail(ProductId),
    Departments,
    Department(DepartmentId),
}

pub struct CatalogGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    route: Route,
    listing: ListingState,
    search_input: String,
    detail: FetchView<Product>,
    detail_id: Option<ProductId>,
    departments: FetchView<Vec<Department>>,
    department_page: FetchView<DepartmentDetail>,
    department_id: Option<DepartmentId>,
    status_line: String,
}

impl CatalogGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            route: Route::Products,
            listing: ListingState::new(),
            search_input: String::new(),
            detail: FetchView::Loading,
            detail_id: None,
            departments: FetchView::Loading,
            department_page: FetchView::Loading,
            department_id: None,
            status_line: String::new(),
        };
        let fetch = app.listing.load_initial();
        app.dispatch(BackendCommand::FetchListing(fetch));
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status_line);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ListingLoaded { fetch, result } => {
                    if !self.listing.fold(&fetch, result) {
                        tracing::debug!(seq = fetch.seq, "discarding stale listing response");
                    }
                }
                UiEvent::ProductLoaded { id, result } => {
                    if self.detail_id == Some(id) {
                        self.detail = FetchView::fold(result);
                    }
                }
                UiEvent::DepartmentsLoaded { result } => {
                    self.departments = FetchView::fold(result);
                }
                UiEvent::DepartmentLoaded { id, result } => {
                    if self.department_id == Some(id) {
                        self.department_page =
                            FetchView::fold_with_message(result, "Error loading department");
                    }
                }
            }
        }
    }

    // Navigation. Each route entry refetches, mirroring fetch-on-mount.
    // The listing instance lives for the whole app so its sequence counter
    // keeps outranking fetch tasks still in flight from before a re-entry;
    // re-entering the products view resets it through load_initial instead
    // of constructing a fresh instance.

    fn open_products(&mut self) {
        self.route = Route::Products;
        self.search_input.clear();
        let fetch = self.listing.load_initial();
        self.dispatch(BackendCommand::FetchListing(fetch));
    }

    fn open_product(&mut self, id: ProductId) {
        self.route = Route::ProductDetail(id);
        self.detail = FetchView::Loading;
        self.detail_id = Some(id);
        self.dispatch(BackendCommand::FetchProduct(id));
    }

    fn open_departments(&mut self) {
        self.route = Route::Departments;
        self.departments = FetchView::Loading;
        self.dispatch(BackendCommand::FetchDepartments);
    }

    fn open_department(&mut self, id: DepartmentId) {
        self.route = Route::Department(id);
        self.department_page = FetchView::Loading;
        self.department_id = Some(id);
        self.dispatch(BackendCommand::FetchDepartment(id));
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Catalog Browser");
                ui.separator();
                let on_products = !matches!(self.route, Route::Departments | Route::Department(_));
                if ui.selectable_label(on_products, "Products").clicked()
                    && self.route != Route::Products
                {
                    self.open_products();
                }
                if ui.selectable_label(!on_products, "Departments").clicked()
                    && self.route != Route::Departments
                {
                    self.open_departments();
                }
            });
        });
    }

    fn show_status_line(&mut self, ctx: &egui::Context) {
        if self.status_line.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::YELLOW, &self.status_line);
                if ui.small_button("Dismiss").clicked() {
                    self.status_line.clear();
                }
            });
        });
    }

    fn show_products(&mut self, ui: &mut egui::Ui) {
        ui.heading("Products");
        ui.add_space(8.0);

        let mut submitted = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Search products by name, category, or brand...")
                    .desired_width(320.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if ui.button("Search").clicked() {
                submitted = true;
            }
            if self.listing.mode() == ListingMode::Search && ui.button("Clear Search").clicked() {
                self.search_input.clear();
                let fetch = self.listing.clear_search();
                self.dispatch(BackendCommand::FetchListing(fetch));
            }
        });
        if submitted {
            let term = self.search_input.clone();
            let fetch = self.listing.submit_search(&term);
            self.dispatch(BackendCommand::FetchListing(fetch));
        }
        ui.add_space(8.0);

        match self.listing.status() {
            ListingStatus::Loading => {
                ui.label("Loading products...");
                return;
            }
            ListingStatus::Error => {
                let message = self.listing.error_message().unwrap_or("unknown error");
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {message}"));
                return;
            }
            ListingStatus::Ready => {}
        }

        if self.listing.mode() == ListingMode::Search {
            ui.label(format!(
                "Found {} products matching \"{}\"",
                self.listing.total_count(),
                self.listing.search_term()
            ));
            ui.add_space(4.0);
        }

        if self.listing.items().is_empty() {
            if self.listing.mode() == ListingMode::Search {
                ui.label("No products found matching your search.");
            } else {
                ui.label("No products available.");
            }
            return;
        }

        let mut open: Option<ProductId> = None;
        for row in self.listing.items().chunks(CARDS_PER_ROW) {
            ui.horizontal(|ui| {
                for product in row {
                    if product_card(ui, product) {
                        open = Some(product.id);
                    }
                }
            });
        }
        if let Some(id) = open {
            self.open_product(id);
            return;
        }

        ui.add_space(8.0);
        self.show_pagination(ui);
    }

    fn show_pagination(&mut self, ui: &mut egui::Ui) {
        if self.listing.total_pages() <= 1 {
            return;
        }
        let previous = self.listing.page().saturating_sub(1);
        let next = self.listing.page() + 1;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.listing.can_go_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                let fetch = self.listing.change_page(previous);
                self.dispatch(BackendCommand::FetchListing(fetch));
            }
            ui.label(format!(
                "Page {} of {} ({} total products)",
                self.listing.page(),
                self.listing.total_pages(),
                self.listing.total_count()
            ));
            if ui
                .add_enabled(self.listing.can_go_next(), egui::Button::new("Next"))
                .clicked()
            {
                let fetch = self.listing.change_page(next);
                self.dispatch(BackendCommand::FetchListing(fetch));
            }
        });
    }

    fn show_product_detail(&mut self, ui: &mut egui::Ui) {
        if ui.link("← Back to Products").clicked() {
            self.open_products();
            return;
        }
        ui.add_space(8.0);

        match &self.detail {
            FetchView::Loading => {
                ui.label("Loading product details...");
            }
            FetchView::Error(message) => {
                ui.heading("Error");
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
            FetchView::Ready(product) => {
                ui.heading(&product.name);
                ui.add_space(4.0);
                ui.label(format!("Category: {}", product.category));
                if let Some(brand) = &product.brand {
                    ui.label(format!("Brand: {brand}"));
                }
                ui.label(format!("Department: {}", product.department_display()));
                ui.label(format!("Price: {}", product.price_display()));
                if let Some(sku) = &product.sku {
                    ui.label(format!("SKU: {sku}"));
                }
                if product.cost.is_some() {
                    ui.label(format!("Cost: {}", product.cost_display()));
                }
                if let Some(center) = product.distribution_center_id {
                    ui.label(format!("Distribution Center ID: {}", center.0));
                }
                if let Some(department_id) = product.department_id {
                    ui.label(format!("Department ID: {}", department_id.0));
                }
            }
        }
    }

    fn show_departments(&mut self, ui: &mut egui::Ui) {
        ui.heading("Departments");
        ui.add_space(8.0);

        let mut open: Option<DepartmentId> = None;
        match &self.departments {
            FetchView::Loading => {
                ui.label("Loading departments...");
            }
            FetchView::Error(message) => {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {message}"));
            }
            FetchView::Ready(departments) => {
                for department in departments {
                    if department_card(ui, department) {
                        open = Some(department.id);
                    }
                }
            }
        }
        if let Some(id) = open {
            self.open_department(id);
        }
    }

    fn show_department_page(&mut self, ui: &mut egui::Ui) {
        if ui.link("← Back to Departments").clicked() {
            self.open_departments();
            return;
        }
        ui.add_space(8.0);

        let mut open: Option<ProductId> = None;
        match &self.department_page {
            FetchView::Loading => {
                ui.label("Loading department...");
            }
            FetchView::Error(message) => {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {message}"));
            }
            FetchView::Ready(detail) => {
                ui.heading(&detail.name);
                ui.label(format!("{} products", detail.product_count));
                ui.add_space(8.0);
                for row in detail.products.chunks(CARDS_PER_ROW) {
                    ui.horizontal(|ui| {
                        for product in row {
                            if product_card(ui, product) {
                                open = Some(product.id);
                            }
                        }
                    });
                }
            }
        }
        if let Some(id) = open {
            self.open_product(id);
        }
    }
}

fn product_card(ui: &mut egui::Ui, product: &Product) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            if ui
                .link(egui::RichText::new(&product.name).strong())
                .clicked()
            {
                clicked = true;
            }
            ui.label(&product.category);
            if let Some(brand) = &product.brand {
                ui.label(format!("Brand: {brand}"));
            }
            ui.label(format!("Department: {}", product.department_display()));
            ui.label(egui::RichText::new(product.price_display()).strong());
        });
    });
    clicked
}

fn department_card(ui: &mut egui::Ui, department: &Department) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            if ui
                .link(egui::RichText::new(&department.name).strong())
                .clicked()
            {
                clicked = true;
            }
            ui.label(format!("{} products", department.product_count));
        });
    });
    clicked
}

impl eframe::App for CatalogGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_header(ctx);
        self.show_status_line(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.route {
                Route::Products => self.show_products(ui),
                Route::ProductDetail(_) => self.show_product_detail(ui),
                Route::Departments => self.show_departments(ui),
                Route::Department(_) => self.show_department_page(ui),
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
