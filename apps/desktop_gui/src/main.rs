mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_config;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{ParamsEditorApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Backend base URL; overrides params_editor.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let config = load_config().with_api_url(args.api_url);
    tracing::info!(api_url = %config.api_url, "starting params editor");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let startup = StartupConfig {
        api_url: config.api_url.clone(),
    };
    backend_bridge::runtime::launch(cmd_rx, ui_tx, config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Params Editor")
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Params Editor",
        options,
        Box::new(|_cc| Ok(Box::new(ParamsEditorApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
}
