//! Worker thread owning the tokio runtime on which the timer effects run.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use invite_core::{EffectEvent, EventEffects, SystemClock};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend_bridge::commands::EffectCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<EffectCommand>, ui_tx: Sender<UiEvent>, repaint: egui::Context) {
    let startup_tx = ui_tx.clone();
    let spawned = thread::Builder::new()
        .name("invitebuddy-effects".to_string())
        .spawn(move || run_worker(cmd_rx, ui_tx, repaint));

    if let Err(err) = spawned {
        tracing::error!("failed to spawn effects worker thread: {err}");
        let _ = startup_tx.try_send(UiEvent::Error(UiError::from_message(
            UiErrorContext::WorkerStartup,
            format!("effects worker startup failure: could not spawn thread: {err}"),
        )));
    }
}

fn run_worker(cmd_rx: Receiver<EffectCommand>, ui_tx: Sender<UiEvent>, repaint: egui::Context) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            report_startup_failure(&ui_tx, &repaint, format!("failed to build runtime: {err}"));
            return;
        }
    };

    let (effect_tx, effect_rx) = tokio::sync::mpsc::unbounded_channel();
    let forward_tx = ui_tx.clone();
    let forward_repaint = repaint.clone();
    let forwarder = thread::Builder::new()
        .name("invitebuddy-effects-forward".to_string())
        .spawn(move || forward_effects(effect_rx, forward_tx, forward_repaint));
    if let Err(err) = forwarder {
        report_startup_failure(&ui_tx, &repaint, format!("could not spawn forwarder: {err}"));
        return;
    }

    let mut effects =
        EventEffects::new(runtime.handle().clone(), Arc::new(SystemClock), effect_tx);
    let _ = ui_tx.try_send(UiEvent::Info("Effects worker ready".to_string()));
    tracing::info!("effects worker ready");

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            EffectCommand::WatchEventDate { date } => {
                tracing::debug!(date = %date, "effects: watch event date");
                effects.watch_date(&date);
            }
        }
    }
    tracing::info!("effects worker stopping");
}

/// Effect events carry dashboard state, so they wait for room in the UI
/// queue instead of being dropped.
fn forward_effects(
    mut effect_rx: UnboundedReceiver<EffectEvent>,
    ui_tx: Sender<UiEvent>,
    repaint: egui::Context,
) {
    while let Some(event) = effect_rx.blocking_recv() {
        if ui_tx.send(UiEvent::Effect(event)).is_err() {
            tracing::debug!("ui gone; effect forwarding stops");
            return;
        }
        repaint.request_repaint();
    }
}

fn report_startup_failure(ui_tx: &Sender<UiEvent>, repaint: &egui::Context, detail: String) {
    tracing::error!("effects worker startup failure: {detail}");
    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
        UiErrorContext::WorkerStartup,
        format!("effects worker startup failure: {detail}"),
    )));
    repaint.request_repaint();
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
