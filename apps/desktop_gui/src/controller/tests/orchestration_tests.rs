use super::*;
use crate::controller::events::UiErrorCategory;
use crossbeam_channel::bounded;

fn watch(date: &str) -> EffectCommand {
    EffectCommand::WatchEventDate {
        date: date.to_string(),
    }
}

#[test]
fn queues_command_when_room() {
    let (tx, rx) = bounded(1);
    dispatch_effect_command(&tx, watch("01-01-2027")).expect("queued");
    assert!(matches!(
        rx.try_recv(),
        Ok(EffectCommand::WatchEventDate { date }) if date == "01-01-2027"
    ));
}

#[test]
fn full_queue_reports_queue_error() {
    let (tx, _rx) = bounded(1);
    dispatch_effect_command(&tx, watch("a")).expect("first fits");
    let err = dispatch_effect_command(&tx, watch("b")).expect_err("queue full");
    assert_eq!(err.category(), UiErrorCategory::Queue);
}

#[test]
fn dropped_worker_reports_disconnect() {
    let (tx, rx) = bounded(1);
    drop(rx);
    let err = dispatch_effect_command(&tx, watch("a")).expect_err("worker gone");
    assert!(err.disables_effects());
}
