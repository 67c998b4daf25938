mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::EffectCommand;
use crate::config::{CliArgs, StartupConfig};
use crate::controller::events::UiEvent;
use crate::ui::{InviteBuddyApp, PersistedSettings, SETTINGS_STORAGE_KEY};

const APP_NAME: &str = "InviteBuddy";

fn init_tracing(startup: &StartupConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        startup
            .log_filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let startup = StartupConfig::load(&args)?;
    init_tracing(&startup);
    for warning in &startup.warnings {
        tracing::warn!("config: {warning}");
    }

    let (cmd_tx, cmd_rx) = bounded::<EffectCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            backend_bridge::runtime::launch(cmd_rx, ui_tx, cc.egui_ctx.clone());
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedSettings>(&text).ok())
            });
            Ok(Box::new(InviteBuddyApp::new(
                cmd_tx, ui_rx, persisted, startup,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run {APP_NAME}: {err}"))
}
