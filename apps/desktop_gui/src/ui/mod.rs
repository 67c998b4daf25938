//! UI layer: app shell, panels, widgets, and theme palettes.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{InviteBuddyApp, PersistedSettings, SETTINGS_STORAGE_KEY};
