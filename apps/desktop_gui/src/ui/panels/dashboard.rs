use std::time::Instant;

use eframe::egui::{self, RichText};
use invite_core::confetti::{pulse_scale, ConfettiField, PARTICLE_COUNT};
use invite_core::countdown::{
    classify_event_date, format_event_date, DateEntry, EVENT_DATE_FORMAT,
};
use invite_core::dashboard::DashboardState;
use invite_core::{Clock, CountdownPhase, SystemClock, Urgency};
use shared::protocol::RsvpSummary;

use crate::ui::theme::Palette;
use crate::ui::widgets::{card_frame, paint_confetti, stat_item};

pub const EVENT_DAY_TEXT: &str = "🎉 It's Event Day!";
const CONFETTI_HEIGHT: f32 = 120.0;

/// Widget-side state the dashboard keeps between frames.
pub struct DashboardPanelState {
    date_input: String,
    confetti: Option<(ConfettiField, Instant)>,
    pulse_origin: Instant,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DashboardOutcome {
    pub event_name: Option<String>,
    pub event_date: Option<String>,
}

impl DashboardPanelState {
    pub fn new(initial_date: &str) -> Self {
        Self {
            date_input: initial_date.to_string(),
            confetti: None,
            pulse_origin: Instant::now(),
        }
    }

    /// True while something on the card animates every frame.
    pub fn is_animating(&self, dashboard: &DashboardState) -> bool {
        dashboard.is_celebrating()
            || dashboard
                .countdown()
                .is_some_and(|phase| phase.urgency() == Urgency::LastHour)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        palette: &Palette,
        dashboard: &DashboardState,
        summary: RsvpSummary,
    ) -> DashboardOutcome {
        let mut outcome = DashboardOutcome::default();

        egui::Frame::NONE
            .fill(palette.card)
            .corner_radius(egui::CornerRadius::same(20))
            .inner_margin(egui::Margin::symmetric(16, 14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let mut name = dashboard.event_name().to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut name)
                            .hint_text("Event Name")
                            .font(egui::TextStyle::Heading)
                            .horizontal_align(egui::Align::Center)
                            .frame(false)
                            .desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        outcome.event_name = Some(name);
                    }

                    outcome.event_date = self.date_row(ui, palette, dashboard);
                    ui.add_space(6.0);
                    self.countdown(ui, palette, dashboard);
                });
            });

        ui.add_space(10.0);
        card_frame(palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let extras_color = (summary.total_extras > 0).then_some(palette.extras_highlight);
            let items = [
                ("🟢", summary.accepted.to_string(), "Accepted", None),
                ("🟡", summary.pending.to_string(), "Pending", None),
                ("🔴", summary.rejected.to_string(), "Rejected", None),
                ("➕", summary.total_extras.to_string(), "Extras", extras_color),
                ("👤", summary.total.to_string(), "Invited", None),
            ];
            ui.columns(items.len(), |columns| {
                for (column, (icon, count, label, highlight)) in columns.iter_mut().zip(items) {
                    stat_item(column, palette, icon, count, label, highlight);
                }
            });
        });

        outcome
    }

    fn date_row(
        &mut self,
        ui: &mut egui::Ui,
        palette: &Palette,
        dashboard: &DashboardState,
    ) -> Option<String> {
        let today = SystemClock.now().date();
        let entry = classify_event_date(&self.date_input, today);
        let refused = matches!(entry, DateEntry::Past(_));
        let mut changed = None;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.date_input)
                    .hint_text("Event Date (dd-mm-yyyy)")
                    .desired_width(150.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
            let set_clicked = ui
                .add_enabled(!refused, egui::Button::new("Set date"))
                .clicked();
            if (submitted || set_clicked) && !refused {
                changed = Some(self.date_input.trim().to_string());
            }
            if !dashboard.event_date().is_empty() && ui.button("Clear").clicked() {
                self.date_input.clear();
                changed = Some(String::new());
            }
        });
        let hint = match entry {
            DateEntry::Unparseable => Some(format!(
                "Use the {} format, e.g. {}",
                display_format(),
                format_event_date(today)
            )),
            DateEntry::Past(_) => Some("Pick today or a later date".to_string()),
            DateEntry::Blank | DateEntry::Selectable(_) => None,
        };
        if let Some(hint) = hint {
            ui.label(RichText::new(hint).small().color(palette.muted));
        }
        changed
    }

    fn countdown(&mut self, ui: &mut egui::Ui, palette: &Palette, dashboard: &DashboardState) {
        match dashboard.countdown() {
            None => {
                self.confetti = None;
            }
            Some(CountdownPhase::EventDay) => {
                let color = palette.urgency_color(Urgency::EventDay);
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), CONFETTI_HEIGHT),
                    egui::Sense::hover(),
                );
                if dashboard.is_celebrating() {
                    let (field, started) = self.confetti.get_or_insert_with(|| {
                        (
                            ConfettiField::generate(&mut rand::thread_rng(), PARTICLE_COUNT),
                            Instant::now(),
                        )
                    });
                    let pieces = field.pieces(started.elapsed(), rect.width(), rect.height());
                    paint_confetti(ui.painter(), rect, palette, &pieces);
                } else {
                    self.confetti = None;
                }
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    EVENT_DAY_TEXT,
                    egui::FontId::proportional(22.0),
                    color,
                );
            }
            Some(CountdownPhase::Counting(remaining)) => {
                self.confetti = None;
                let urgency = remaining.urgency();
                let alpha = if palette.mode.is_dark() { 0.5 } else { 0.6 };
                let color = palette.urgency_color(urgency).gamma_multiply(alpha);
                let scale = if urgency == Urgency::LastHour {
                    pulse_scale(self.pulse_origin.elapsed())
                } else {
                    1.0
                };
                ui.label(
                    RichText::new(remaining.label())
                        .size(16.0 * scale)
                        .strong()
                        .color(color),
                );
            }
        }
    }
}

fn display_format() -> String {
    EVENT_DATE_FORMAT
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
}
