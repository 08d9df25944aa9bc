mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::app::CatalogGuiApp,
};

#[derive(Parser, Debug)]
#[command(about = "Desktop browser for an e-commerce product catalog")]
struct Args {
    /// Catalog API root; overrides catalog.toml when set.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = config::load_settings(args.server_url);
    tracing::info!(server_url = %settings.server_url, "starting catalog browser");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Catalog Browser",
        native_options,
        Box::new(move |cc| {
            backend_bridge::runtime::launch(
                settings.clone(),
                cmd_rx,
                ui_tx,
                cc.egui_ctx.clone(),
            );
            Ok(Box::new(CatalogGuiApp::new(cmd_tx, ui_rx)))
        }),
    )
    .map_err(|err| anyhow!("failed to start gui: {err}"))
}
