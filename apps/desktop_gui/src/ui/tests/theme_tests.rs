use super::*;
use invite_core::confetti::PALETTE_SIZE;

#[test]
fn system_choice_follows_reported_theme() {
    assert_eq!(
        ThemeMode::resolve(ThemeChoice::System, Some(egui::Theme::Dark)),
        ThemeMode::Dark
    );
    assert_eq!(
        ThemeMode::resolve(ThemeChoice::System, None),
        ThemeMode::Light
    );
    assert_eq!(
        ThemeMode::resolve(ThemeChoice::Light, Some(egui::Theme::Dark)),
        ThemeMode::Light
    );
}

#[test]
fn toggle_flips_and_pins_choice() {
    let mode = ThemeMode::Light.toggled();
    assert_eq!(mode, ThemeMode::Dark);
    assert_eq!(mode.as_choice(), ThemeChoice::Dark);
}

#[test]
fn status_pills_differ_between_modes() {
    let light = Palette::for_mode(ThemeMode::Light);
    let dark = Palette::for_mode(ThemeMode::Dark);
    assert_eq!(
        light.status_color(RsvpStatus::Accepted),
        Color32::from_rgb(0x00, 0x9D, 0x0C)
    );
    assert_eq!(
        dark.status_color(RsvpStatus::Rejected),
        Color32::from_rgb(0xFF, 0x5D, 0x52)
    );
    assert_eq!(
        light.urgency_color(Urgency::EventDay),
        dark.urgency_color(Urgency::EventDay)
    );
}

#[test]
fn every_confetti_index_has_a_color() {
    let palette = Palette::for_mode(ThemeMode::Dark);
    let colors: Vec<Color32> = (0..PALETTE_SIZE)
        .map(|index| palette.confetti_color(index))
        .collect();
    assert_eq!(colors[3], Color32::from_rgb(0xFF, 0xC1, 0x07));
    assert_eq!(colors[6], Color32::from_rgb(0x21, 0x96, 0xF3));
}
