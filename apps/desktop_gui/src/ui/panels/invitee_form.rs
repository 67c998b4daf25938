//! Add/edit invitee fields. The same field block backs the add dialog and the
//! inline editor.

use eframe::egui::{self, RichText};
use invite_core::form::InviteeDraft;
use invite_core::FieldErrors;
use shared::domain::{Category, COUNTRY_CODES, MAX_EXTRAS};

use crate::ui::theme::Palette;
use crate::ui::widgets::{cancel_button, field_error, primary_button};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Cancel,
}

pub fn draft_fields(
    ui: &mut egui::Ui,
    palette: &Palette,
    draft: &mut InviteeDraft,
    errors: &FieldErrors,
    id_salt: &str,
) {
    ui.label(RichText::new("Name *").color(palette.text_secondary));
    let mut name = draft.name().to_string();
    if ui
        .add(egui::TextEdit::singleline(&mut name).desired_width(f32::INFINITY))
        .changed()
    {
        draft.set_name(&name);
    }
    field_error(ui, palette, errors.name);

    ui.add_space(6.0);
    ui.label(RichText::new("Phone *").color(palette.text_secondary));
    ui.horizontal(|ui| {
        let mut code = draft.country_code().to_string();
        egui::ComboBox::from_id_salt((id_salt, "country_code"))
            .selected_text(code.clone())
            .width(72.0)
            .height(240.0)
            .show_ui(ui, |ui| {
                for option in COUNTRY_CODES {
                    ui.selectable_value(&mut code, option.to_string(), *option);
                }
            });
        if code != draft.country_code() {
            draft.set_country_code(&code);
        }

        let mut mobile = draft.mobile().to_string();
        if ui
            .add(
                egui::TextEdit::singleline(&mut mobile)
                    .hint_text("10 digits")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            draft.set_mobile(&mobile);
        }
    });
    field_error(ui, palette, errors.mobile);

    ui.add_space(6.0);
    ui.label(RichText::new("Email (Optional)").color(palette.text_secondary));
    let mut email = draft.email().to_string();
    if ui
        .add(egui::TextEdit::singleline(&mut email).desired_width(f32::INFINITY))
        .changed()
    {
        draft.set_email(&email);
    }
    field_error(ui, palette, errors.email);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("Category *").color(palette.text_secondary));
            let mut category = draft.category();
            let selected = category.map_or("Select", Category::label);
            egui::ComboBox::from_id_salt((id_salt, "category"))
                .selected_text(selected)
                .width(140.0)
                .show_ui(ui, |ui| {
                    for option in Category::ALL {
                        ui.selectable_value(&mut category, Some(option), option.label());
                    }
                });
            if category != draft.category() {
                draft.set_category(category);
            }
            field_error(ui, palette, errors.category);
        });

        ui.vertical(|ui| {
            ui.label(RichText::new("Extras").color(palette.text_secondary));
            let mut extras = draft.extras().to_string();
            if ui
                .add(egui::TextEdit::singleline(&mut extras).desired_width(60.0))
                .changed()
            {
                draft.set_extras(&extras);
            }
            ui.label(
                RichText::new(format!("Max {MAX_EXTRAS} extras"))
                    .small()
                    .color(palette.muted),
            );
        });
    });
}

fn action_row(ui: &mut egui::Ui, palette: &Palette, confirm: &str, enabled: bool) -> Option<FormAction> {
    let mut action = None;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add_enabled(enabled, primary_button(palette, confirm))
            .clicked()
        {
            action = Some(FormAction::Submit);
        }
        if ui.add(cancel_button(palette)).clicked() {
            action = Some(FormAction::Cancel);
        }
    });
    action
}

/// Modal-style add dialog; returns the button the user pressed this frame.
/// The title-bar close button and Escape both count as Cancel.
pub fn show_add_dialog(
    ctx: &egui::Context,
    palette: &Palette,
    draft: &mut InviteeDraft,
    errors: &FieldErrors,
    can_submit: bool,
) -> Option<FormAction> {
    let mut action = None;
    let mut open = true;
    egui::Window::new(RichText::new("Add Invitee").strong())
        .id(egui::Id::new("add_invitee_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .default_width(360.0)
        .frame(
            egui::Frame::NONE
                .fill(palette.surface)
                .stroke(egui::Stroke::new(1.0, palette.outline))
                .corner_radius(egui::CornerRadius::same(18))
                .inner_margin(egui::Margin::symmetric(18, 16)),
        )
        .show(ctx, |ui| {
            draft_fields(ui, palette, draft, errors, "add");
            ui.add_space(12.0);
            action = action_row(ui, palette, "Invite", can_submit);
        });

    let escape = ctx.input(|input| input.key_pressed(egui::Key::Escape));
    if action.is_none() && (!open || escape) {
        action = Some(FormAction::Cancel);
    }
    action
}

/// Inline editor drawn in place of a list row.
pub fn show_inline_editor(
    ui: &mut egui::Ui,
    palette: &Palette,
    draft: &mut InviteeDraft,
    errors: &FieldErrors,
    can_submit: bool,
    id_salt: &str,
) -> Option<FormAction> {
    let mut action = None;
    egui::Frame::NONE
        .fill(palette.surface_variant)
        .stroke(egui::Stroke::new(1.5, palette.primary))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.label(RichText::new("Edit Invitee").strong().size(16.0));
            ui.add_space(6.0);
            draft_fields(ui, palette, draft, errors, id_salt);
            ui.add_space(10.0);
            action = action_row(ui, palette, "Save", can_submit);
        });
    action
}

#[cfg(test)]
#[path = "tests/invitee_form_tests.rs"]
mod tests;
