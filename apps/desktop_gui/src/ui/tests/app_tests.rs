use super::*;
use crossbeam_channel::bounded;
use invite_core::{CountdownPhase, EffectEvent};

fn app_with(
    persisted: Option<PersistedSettings>,
    startup: StartupConfig,
) -> (InviteBuddyApp, Receiver<EffectCommand>, Sender<UiEvent>) {
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let app = InviteBuddyApp::new(cmd_tx, ui_rx, persisted, startup);
    (app, cmd_rx, ui_tx)
}

#[test]
fn remembered_theme_wins_over_config_default() {
    let persisted = PersistedSettings {
        theme: Some(ThemeChoice::Dark),
    };
    let (app, _cmd_rx, _ui_tx) = app_with(Some(persisted), StartupConfig::default());
    assert_eq!(app.theme, ThemeChoice::Dark);
}

#[test]
fn theme_flag_beats_remembered_theme() {
    let persisted = PersistedSettings {
        theme: Some(ThemeChoice::Dark),
    };
    let startup = StartupConfig {
        theme: ThemeChoice::Light,
        theme_forced: true,
        ..StartupConfig::default()
    };
    let (app, _cmd_rx, _ui_tx) = app_with(Some(persisted), startup);
    assert_eq!(app.theme, ThemeChoice::Light);
}

#[test]
fn configured_date_starts_watching_at_launch() {
    let startup = StartupConfig {
        event_date: " 01-01-2027 ".to_string(),
        ..StartupConfig::default()
    };
    let (app, cmd_rx, _ui_tx) = app_with(None, startup);
    assert_eq!(
        cmd_rx.try_recv().expect("watch command"),
        EffectCommand::WatchEventDate {
            date: "01-01-2027".to_string()
        }
    );
    assert_eq!(app.screen.dashboard().event_date(), "01-01-2027");
}

#[test]
fn blank_date_sends_nothing() {
    let (_app, cmd_rx, _ui_tx) = app_with(None, StartupConfig::default());
    assert!(cmd_rx.try_recv().is_err());
}

#[test]
fn effect_events_reach_the_dashboard() {
    let startup = StartupConfig {
        event_date: "01-01-2027".to_string(),
        ..StartupConfig::default()
    };
    let (mut app, _cmd_rx, ui_tx) = app_with(None, startup);
    ui_tx
        .try_send(UiEvent::Effect(EffectEvent::Countdown {
            date: "01-01-2027".to_string(),
            phase: CountdownPhase::EventDay,
        }))
        .expect("queue has room");
    ui_tx
        .try_send(UiEvent::Effect(EffectEvent::Celebration {
            date: "01-01-2027".to_string(),
            active: true,
        }))
        .expect("queue has room");

    app.process_ui_events();
    assert_eq!(
        app.screen.dashboard().countdown(),
        Some(CountdownPhase::EventDay)
    );
    assert!(app.screen.dashboard().is_celebrating());
}

#[test]
fn missing_worker_surfaces_banner() {
    let (cmd_tx, cmd_rx) = bounded(1);
    let (_ui_tx, ui_rx) = bounded(1);
    drop(cmd_rx);
    let startup = StartupConfig {
        event_date: "01-01-2027".to_string(),
        ..StartupConfig::default()
    };
    let app = InviteBuddyApp::new(cmd_tx, ui_rx, None, startup);
    let banner = app.status_banner.expect("dispatch failure reported");
    assert!(banner.disables_effects());
}
