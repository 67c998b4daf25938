//! Light/dark palettes. Resolved once per frame and passed to every panel.

use eframe::egui::{self, Color32};
use invite_core::Urgency;
use shared::domain::RsvpStatus;

use crate::config::ThemeChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn resolve(choice: ThemeChoice, system: Option<egui::Theme>) -> Self {
        match choice {
            ThemeChoice::Light => Self::Light,
            ThemeChoice::Dark => Self::Dark,
            ThemeChoice::System => match system {
                Some(egui::Theme::Dark) => Self::Dark,
                _ => Self::Light,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_choice(self) -> ThemeChoice {
        match self {
            Self::Light => ThemeChoice::Light,
            Self::Dark => ThemeChoice::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Color32,
    pub surface: Color32,
    pub surface_variant: Color32,
    pub card: Color32,
    pub primary: Color32,
    pub primary_soft: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub outline: Color32,
    pub muted: Color32,
    pub error: Color32,
    pub cancel: Color32,
    pub extras_highlight: Color32,
    accepted: Color32,
    pending: Color32,
    rejected: Color32,
    last_day: Color32,
}

const EVENT_DAY: Color32 = hex(0x4CAF50);
const LAST_HOUR: Color32 = hex(0xE53935);
const CONFETTI_EXTRAS: [Color32; 4] = [hex(0xFFC107), hex(0xE91E63), hex(0x4CAF50), hex(0x2196F3)];

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                background: hex(0xFFFFFF),
                surface: hex(0xF9F7F5),
                surface_variant: hex(0xF2E6DA),
                card: hex(0xF0C397),
                primary: hex(0xFF7A00),
                primary_soft: hex(0xFACB9D),
                text: hex(0x1C1C1C),
                text_secondary: hex(0x5E5E5E),
                outline: hex(0xDDC3A5),
                muted: hex(0x85858A),
                error: hex(0xE53935),
                cancel: hex(0xEA1414),
                extras_highlight: hex(0x389B3D),
                accepted: hex(0x009D0C),
                pending: hex(0xF5A000),
                rejected: hex(0xFF2D1E),
                last_day: hex(0xFF3C00),
            },
            ThemeMode::Dark => Self {
                mode,
                background: hex(0x000000),
                surface: hex(0x121212),
                surface_variant: hex(0x2A2A2A),
                card: hex(0xD26004),
                primary: hex(0xF89029),
                primary_soft: hex(0xEF801F),
                text: hex(0xEDEDED),
                text_secondary: hex(0xEFEAEA),
                outline: hex(0x6B4A2D),
                muted: hex(0x85858A),
                error: hex(0xE53935),
                cancel: hex(0xF65555),
                extras_highlight: hex(0x389B3D),
                accepted: hex(0x5CBE60),
                pending: hex(0xE8A120),
                rejected: hex(0xFF5D52),
                last_day: hex(0x621E09),
            },
        }
    }

    pub fn status_color(&self, status: RsvpStatus) -> Color32 {
        match status {
            RsvpStatus::Accepted => self.accepted,
            RsvpStatus::Pending => self.pending,
            RsvpStatus::Rejected => self.rejected,
        }
    }

    /// Countdown text color; the normal bucket uses the regular text color.
    pub fn urgency_color(&self, urgency: Urgency) -> Color32 {
        match urgency {
            Urgency::EventDay => EVENT_DAY,
            Urgency::LastHour => LAST_HOUR,
            Urgency::LastDay => self.last_day,
            Urgency::Normal => self.text,
        }
    }

    pub fn confetti_color(&self, index: usize) -> Color32 {
        match index {
            0 => self.primary,
            1 => self.primary_soft,
            2 => self.outline,
            n => CONFETTI_EXTRAS[(n - 3) % CONFETTI_EXTRAS.len()],
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.mode.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface_variant;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.primary;
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.6);
        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.85);
        visuals.window_stroke = egui::Stroke::new(1.0, self.outline);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.outline);
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, self.outline);
        visuals.window_corner_radius = egui::CornerRadius::same(14);
        visuals.menu_corner_radius = egui::CornerRadius::same(10);
        visuals
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
