//! Runtime bridge between UI command queue and backend event intake. A
//! dedicated thread owns a tokio runtime; each command becomes one spawned
//! fetch task, so overlapping user actions produce overlapping calls and the
//! UI-side sequence guard decides which result is displayed.

use std::{sync::Arc, thread, time::Duration};

use client_core::{fetch_listing, CatalogApi, CatalogClient, ClientConfig};
use crossbeam_channel::{Receiver, Sender};

use crate::{
    backend_bridge::commands::BackendCommand, config::Settings, controller::events::UiEvent,
};

pub fn launch(
    settings: Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    repaint: egui::Context,
) {
    let spawned = thread::Builder::new()
        .name("catalog-backend".to_string())
        .spawn(move || run_worker(settings, cmd_rx, ui_tx, repaint));
    if let Err(err) = spawned {
        tracing::error!(%err, "failed to spawn backend worker thread");
    }
}

fn run_worker(
    settings: Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    repaint: egui::Context,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to build backend runtime");
            return;
        }
    };

    let client = ClientConfig::new(settings.server_url)
        .map(|config| config.with_timeout(Duration::from_millis(settings.request_timeout_ms)))
        .and_then(CatalogClient::new);
    let client = match client {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!(%err, "failed to build catalog client");
            return;
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        let client = Arc::clone(&client);
        let ui_tx = ui_tx.clone();
        let repaint = repaint.clone();
        runtime.spawn(async move {
            let event = handle_command(client.as_ref(), cmd).await;
            if ui_tx.send(event).is_ok() {
                repaint.request_repaint();
            }
        });
    }
    tracing::debug!("ui command channel closed; backend worker exiting");
}

async fn handle_command(client: &CatalogClient, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::FetchListing(fetch) => {
            let result = fetch_listing(client, &fetch).await;
            UiEvent::ListingLoaded { fetch, result }
        }
        BackendCommand::FetchProduct(id) => UiEvent::ProductLoaded {
            id,
            result: client.product_by_id(id).await,
        },
        BackendCommand::FetchDepartments => UiEvent::DepartmentsLoaded {
            result: client.departments().await,
        },
        BackendCommand::FetchDepartment(id) => UiEvent::DepartmentLoaded {
            id,
            result: client.department_by_id(id).await,
        },
    }
}
