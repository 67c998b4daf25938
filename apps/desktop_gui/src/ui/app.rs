use std::{collections::HashSet, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, RichText};
use invite_core::ids::ClockIdSource;
use invite_core::{FormError, InvitationScreen};
use serde::{Deserialize, Serialize};
use shared::domain::InvitationId;
use shared::protocol::ListIntent;

use crate::backend_bridge::commands::EffectCommand;
use crate::config::{StartupConfig, ThemeChoice};
use crate::controller::events::{category_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_effect_command;
use crate::ui::panels::dashboard::DashboardPanelState;
use crate::ui::panels::invitation_list;
use crate::ui::panels::invitee_form::{show_add_dialog, FormAction};
use crate::ui::theme::{Palette, ThemeMode};

pub const SETTINGS_STORAGE_KEY: &str = "invitebuddy.settings";
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_REPAINT: Duration = Duration::from_millis(500);

/// The only state that survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub theme: Option<ThemeChoice>,
}

pub struct InviteBuddyApp {
    cmd_tx: Sender<EffectCommand>,
    ui_rx: Receiver<UiEvent>,
    screen: InvitationScreen,
    theme: ThemeChoice,
    applied_theme: Option<ThemeMode>,
    dashboard_ui: DashboardPanelState,
    expanded_rows: HashSet<InvitationId>,
    status: String,
    status_banner: Option<UiError>,
}

impl InviteBuddyApp {
    pub fn new(
        cmd_tx: Sender<EffectCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted: Option<PersistedSettings>,
        startup: StartupConfig,
    ) -> Self {
        let theme = if startup.theme_forced {
            startup.theme
        } else {
            persisted
                .and_then(|settings| settings.theme)
                .unwrap_or(startup.theme)
        };

        let mut screen =
            InvitationScreen::new(Box::new(ClockIdSource), &startup.default_country_code);
        screen.dashboard_mut().set_event_name(&startup.event_name);

        let mut app = Self {
            cmd_tx,
            ui_rx,
            screen,
            theme,
            applied_theme: None,
            dashboard_ui: DashboardPanelState::new(startup.event_date.trim()),
            expanded_rows: HashSet::new(),
            status: "Starting".to_string(),
            status_banner: None,
        };
        app.change_event_date(&startup.event_date);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::Effect(effect) => self.screen.dashboard_mut().apply_effect(&effect),
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    if err.disables_effects() {
                        self.status = "Countdown unavailable".to_string();
                    }
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn change_event_date(&mut self, date: &str) {
        if !self.screen.dashboard_mut().set_event_date(date) {
            return;
        }
        let cmd = EffectCommand::WatchEventDate {
            date: date.trim().to_string(),
        };
        if let Err(err) = dispatch_effect_command(&self.cmd_tx, cmd) {
            self.status_banner = Some(err);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context, palette: &Palette) {
        if self.applied_theme == Some(palette.mode) {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = palette.visuals();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(palette.mode);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context, palette: &Palette) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::NONE
                    .fill(palette.surface)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("InviteBuddy")
                            .size(22.0)
                            .strong()
                            .color(palette.primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = if palette.mode.is_dark() { "🌙" } else { "☀" };
                        if ui
                            .add(egui::Button::new(RichText::new(icon).size(18.0)).frame(false))
                            .on_hover_text("Toggle light/dark theme")
                            .clicked()
                        {
                            self.theme = palette.mode.toggled().as_choice();
                            tracing::info!(theme = %self.theme, "theme toggled");
                        }
                    });
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context, palette: &Palette) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::NONE
                    .fill(palette.surface)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                let banner = self.status_banner.clone();
                ui.horizontal(|ui| match banner {
                    Some(err) => {
                        ui.label(
                            RichText::new(format!(
                                "{}: {}",
                                category_label(err.category()),
                                err.message()
                            ))
                            .color(palette.error),
                        );
                        if ui.small_button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    }
                    None => {
                        ui.label(RichText::new(&self.status).small().color(palette.muted));
                    }
                });
            });
    }

    fn show_main(&mut self, ctx: &egui::Context, palette: &Palette) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(palette.background)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let summary = self.screen.summary();
                        let outcome = self.dashboard_ui.show(
                            ui,
                            palette,
                            self.screen.dashboard(),
                            summary,
                        );
                        if let Some(name) = outcome.event_name {
                            self.screen.dashboard_mut().set_event_name(&name);
                        }
                        if let Some(date) = outcome.event_date {
                            self.change_event_date(&date);
                        }

                        ui.add_space(14.0);
                        let list = invitation_list::show(
                            ui,
                            palette,
                            &mut self.screen,
                            &mut self.expanded_rows,
                        );
                        for intent in list.intents {
                            if let ListIntent::Delete { id } = intent {
                                self.expanded_rows.remove(&id);
                            }
                            self.screen.dispatch(intent);
                        }
                        match list.editor {
                            Some(FormAction::Submit) => {
                                if let Err(err) = self.screen.save_edit() {
                                    self.report_form_error(err);
                                }
                            }
                            Some(FormAction::Cancel) => self.screen.cancel_edit(),
                            None => {}
                        }
                        // room for the floating button
                        ui.add_space(72.0);
                    });
            });
    }

    fn show_add_button(&mut self, ctx: &egui::Context, palette: &Palette) {
        egui::Area::new(egui::Id::new("add_invitee_fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -40.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    RichText::new("➕").size(24.0).color(egui::Color32::WHITE),
                )
                .fill(palette.primary)
                .corner_radius(egui::CornerRadius::same(28))
                .min_size(egui::vec2(56.0, 56.0));
                if ui
                    .add_enabled(!self.screen.add_form().is_open(), button)
                    .on_hover_text("Invite someone")
                    .clicked()
                {
                    self.screen.open_add_form();
                }
            });
    }

    fn show_add_form(&mut self, ctx: &egui::Context, palette: &Palette) {
        let form = self.screen.add_form_mut();
        let errors = form.visible_errors();
        let can_submit = form.can_submit();
        let Some(draft) = form.draft_mut() else {
            return;
        };
        match show_add_dialog(ctx, palette, draft, &errors, can_submit) {
            Some(FormAction::Submit) => match self.screen.submit_add_form() {
                Ok(_) => self.status = "Invitation added".to_string(),
                Err(err) => self.report_form_error(err),
            },
            Some(FormAction::Cancel) => self.screen.cancel_add_form(),
            None => {}
        }
    }

    fn report_form_error(&mut self, err: FormError) {
        match err {
            // The dialog already shows the field errors inline.
            FormError::Invalid(errors) => {
                tracing::debug!(fields = %errors.summary(), "form submit rejected");
            }
            FormError::Closed => {
                self.status_banner = Some(UiError::from_message(
                    UiErrorContext::SaveInvitee,
                    err.to_string(),
                ));
            }
        }
    }
}

impl eframe::App for InviteBuddyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mode = ThemeMode::resolve(self.theme, ctx.input(|input| input.raw.system_theme));
        let palette = Palette::for_mode(mode);
        self.apply_theme_if_needed(ctx, &palette);

        self.show_top_bar(ctx, &palette);
        self.show_status_bar(ctx, &palette);
        self.show_main(ctx, &palette);
        self.show_add_button(ctx, &palette);
        self.show_add_form(ctx, &palette);

        if self.dashboard_ui.is_animating(self.screen.dashboard()) {
            ctx.request_repaint_after(ANIMATION_FRAME);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            theme: Some(self.theme),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
