//! Small reusable widgets shared by the panels.

use eframe::egui::{self, Color32, RichText};
use invite_core::confetti::ConfettiPiece;
use shared::domain::RsvpStatus;

use crate::ui::theme::Palette;

pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::NONE
        .fill(palette.surface)
        .stroke(egui::Stroke::new(1.0, palette.outline))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::symmetric(14, 12))
}

/// Colored status label; clicking it opens the status selector.
pub fn status_pill(
    ui: &mut egui::Ui,
    palette: &Palette,
    status: RsvpStatus,
    id_salt: impl std::hash::Hash,
) -> Option<RsvpStatus> {
    let color = palette.status_color(status);
    let mut picked = None;
    let label = RichText::new(status.label().to_lowercase())
        .color(Color32::WHITE)
        .strong();
    egui::Frame::NONE
        .fill(color)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            egui::ComboBox::from_id_salt(id_salt)
                .selected_text(label)
                .width(90.0)
                .show_ui(ui, |ui| {
                    for option in RsvpStatus::ALL {
                        let text = RichText::new(option.label()).color(palette.status_color(option));
                        if ui.selectable_label(option == status, text).clicked() && option != status {
                            picked = Some(option);
                        }
                    }
                });
        });
    picked
}

pub fn stat_item(
    ui: &mut egui::Ui,
    palette: &Palette,
    icon: &str,
    count: String,
    label: &str,
    highlight: Option<Color32>,
) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(16.0));
            ui.label(
                RichText::new(count)
                    .size(18.0)
                    .strong()
                    .color(highlight.unwrap_or(palette.text)),
            );
        });
        ui.label(RichText::new(label).small().color(palette.text_secondary));
    });
}

pub fn field_error(ui: &mut egui::Ui, palette: &Palette, error: Option<&str>) {
    if let Some(message) = error {
        ui.label(RichText::new(message).small().color(palette.error));
    }
}

pub fn primary_button(palette: &Palette, text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).color(Color32::WHITE).strong())
        .fill(palette.primary)
        .corner_radius(egui::CornerRadius::same(10))
        .min_size(egui::vec2(88.0, 32.0))
}

pub fn cancel_button(palette: &Palette) -> egui::Button<'static> {
    egui::Button::new(RichText::new("Cancel").color(palette.cancel))
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, palette.cancel))
        .corner_radius(egui::CornerRadius::same(10))
        .min_size(egui::vec2(88.0, 32.0))
}

/// Paints confetti rectangles clipped to `rect`; each piece rotates about its
/// own top-left corner.
pub fn paint_confetti(
    painter: &egui::Painter,
    rect: egui::Rect,
    palette: &Palette,
    pieces: &[ConfettiPiece],
) {
    let painter = painter.with_clip_rect(rect);
    for piece in pieces {
        let origin = rect.min + egui::vec2(piece.x, piece.y);
        let rotation = egui::emath::Rot2::from_angle(piece.rotation_degrees.to_radians());
        let corners = [
            egui::vec2(0.0, 0.0),
            egui::vec2(piece.width, 0.0),
            egui::vec2(piece.width, piece.height),
            egui::vec2(0.0, piece.height),
        ]
        .map(|corner| origin + rotation * corner);
        painter.add(egui::Shape::convex_polygon(
            corners.to_vec(),
            palette.confetti_color(piece.color_index),
            egui::Stroke::NONE,
        ));
    }
}
