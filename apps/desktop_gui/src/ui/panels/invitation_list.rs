use std::collections::HashSet;

use eframe::egui::{self, RichText};
use invite_core::InvitationScreen;
use shared::domain::{InvitationId, InvitationRecord};
use shared::protocol::ListIntent;

use crate::ui::panels::invitee_form::{show_inline_editor, FormAction};
use crate::ui::theme::Palette;
use crate::ui::widgets::{card_frame, status_pill};

pub const EMPTY_LIST_TEXT: &str = "No invitations yet 📭\nPress the button to invite 📬";

#[derive(Debug, Default)]
pub struct ListOutcome {
    pub intents: Vec<ListIntent>,
    pub editor: Option<FormAction>,
}

/// Rows in store order; the row being edited is replaced by the editor.
pub fn show(
    ui: &mut egui::Ui,
    palette: &Palette,
    screen: &mut InvitationScreen,
    expanded: &mut HashSet<InvitationId>,
) -> ListOutcome {
    let mut outcome = ListOutcome::default();

    if screen.records().is_empty() {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(EMPTY_LIST_TEXT)
                    .size(16.0)
                    .color(palette.text_secondary),
            );
        });
        return outcome;
    }

    let records = screen.records().to_vec();
    let editing = screen.editing_id();
    for record in &records {
        if editing == Some(record.id) {
            if let Some(editor) = screen.edit_form_mut() {
                let errors = editor.visible_errors();
                let can_submit = editor.can_submit();
                let salt = format!("edit_{}", record.id);
                outcome.editor =
                    show_inline_editor(ui, palette, editor.draft_mut(), &errors, can_submit, &salt);
            }
        } else {
            let is_expanded = expanded.contains(&record.id);
            let (intent, toggle) = invitation_row(ui, palette, record, is_expanded);
            outcome.intents.extend(intent);
            if toggle {
                if is_expanded {
                    expanded.remove(&record.id);
                } else {
                    expanded.insert(record.id);
                }
            }
        }
        ui.add_space(8.0);
    }
    outcome
}

fn invitation_row(
    ui: &mut egui::Ui,
    palette: &Palette,
    record: &InvitationRecord,
    expanded: bool,
) -> (Option<ListIntent>, bool) {
    let mut intent = None;
    let mut toggle = false;

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&record.name).strong().size(16.0));
                ui.label(
                    RichText::new(format!("{} • +{}", record.category, record.extras))
                        .color(palette.muted),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.menu_button(RichText::new("⋮").size(18.0), |ui| {
                    if ui.button("Edit").clicked() {
                        intent = Some(ListIntent::BeginEdit { id: record.id });
                        ui.close();
                    }
                    if ui
                        .button(RichText::new("Delete").color(palette.error))
                        .clicked()
                    {
                        intent = Some(ListIntent::Delete { id: record.id });
                        ui.close();
                    }
                });
                if let Some(status) =
                    status_pill(ui, palette, record.status, ("status", record.id.0))
                {
                    intent = Some(ListIntent::ChangeStatus {
                        id: record.id,
                        status,
                    });
                }
            });
        });

        let toggle_text = if expanded { "Hide details" } else { "More details" };
        if ui
            .link(RichText::new(toggle_text).small().color(palette.primary))
            .clicked()
        {
            toggle = true;
        }
        if expanded {
            let email = RichText::new(format!("Email: {}", record.email));
            ui.label(if record.has_email() {
                email.color(palette.text_secondary)
            } else {
                email.italics().color(palette.muted)
            });
            ui.label(
                RichText::new(format!("Mobile: {}", record.mobile)).color(palette.text_secondary),
            );
        }
    });

    (intent, toggle)
}
