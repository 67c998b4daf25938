use std::time::{Duration, Instant};

use super::*;
use crossbeam_channel::bounded;
use invite_core::countdown::format_event_date;
use invite_core::{Clock, CountdownPhase};

fn today() -> String {
    format_event_date(SystemClock.now().date())
}

fn collect_until(
    ui_rx: &Receiver<UiEvent>,
    done: impl Fn(&EffectEvent) -> bool,
) -> Vec<EffectEvent> {
    let deadline = Instant::now() + Duration::from_secs(15);
    let mut seen = Vec::new();
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match ui_rx.recv_timeout(left) {
            Ok(UiEvent::Effect(event)) => {
                let finished = done(&event);
                seen.push(event);
                if finished {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
    seen
}

#[test]
fn full_ui_queue_delays_effects_instead_of_dropping_them() {
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(1);
    launch(cmd_rx, ui_tx, egui::Context::default());

    let date = today();
    cmd_tx
        .send(EffectCommand::WatchEventDate { date: date.clone() })
        .expect("worker alive");
    // leave the single slot occupied while the worker produces several events
    std::thread::sleep(Duration::from_millis(300));

    let seen = collect_until(&ui_rx, |event| {
        matches!(event, EffectEvent::Celebration { active: false, .. })
    });
    assert_eq!(
        seen,
        vec![
            EffectEvent::Countdown {
                date: date.clone(),
                phase: CountdownPhase::EventDay
            },
            EffectEvent::Celebration {
                date: date.clone(),
                active: true
            },
            EffectEvent::Celebration {
                date,
                active: false
            },
        ]
    );
}
