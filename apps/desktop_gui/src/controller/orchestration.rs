//! Command orchestration helpers from UI actions to the effects worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::EffectCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_effect_command(
    cmd_tx: &Sender<EffectCommand>,
    cmd: EffectCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->effects command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "effects command queue full");
            Err(UiError::from_message(
                UiErrorContext::EffectDispatch,
                "Effects command queue is full; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "effects worker gone");
            Err(UiError::from_message(
                UiErrorContext::EffectDispatch,
                "Effects worker disconnected (possible startup/runtime failure); countdown paused",
            ))
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
