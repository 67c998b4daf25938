use super::*;
use crate::ui::theme::ThemeMode;

fn run_dialog(events: Vec<egui::Event>) -> Option<FormAction> {
    let ctx = egui::Context::default();
    let palette = Palette::for_mode(ThemeMode::Light);
    let mut draft = InviteeDraft::blank("+91");
    let errors = FieldErrors::default();
    let mut action = None;
    let input = egui::RawInput {
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        action = show_add_dialog(ctx, &palette, &mut draft, &errors, false);
    });
    action
}

#[test]
fn dialog_stays_open_without_input() {
    assert_eq!(run_dialog(Vec::new()), None);
}

#[test]
fn escape_dismisses_add_dialog() {
    let escape = egui::Event::Key {
        key: egui::Key::Escape,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    };
    assert_eq!(run_dialog(vec![escape]), Some(FormAction::Cancel));
}
