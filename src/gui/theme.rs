//! Color constants and style application for the dashboard GUI.

use eframe::egui::{self, Color32, Stroke};

use crate::domain::CampaignStatus;

use super::app::DashboardApp;

/// Window background.
pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 20, 26);
/// Card and panel background.
pub const BG_CARD: Color32 = Color32::from_rgb(26, 30, 38);
/// Hovered and selected background.
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(38, 45, 58);

/// Primary text.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 234, 240);
/// Labels and captions.
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 158, 170);

/// Status badges.
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(16, 185, 129);
pub const STATUS_PAUSED: Color32 = Color32::from_rgb(245, 158, 11);
pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(107, 114, 128);

/// Error text.
pub const ACCENT_RED: Color32 = Color32::from_rgb(220, 38, 38);

/// Badge color for a campaign status. Unrecognized statuses share the
/// neutral completed gray.
pub fn status_color(status: CampaignStatus) -> Color32 {
    match status {
        CampaignStatus::Active => STATUS_ACTIVE,
        CampaignStatus::Paused => STATUS_PAUSED,
        CampaignStatus::Completed | CampaignStatus::Unknown => STATUS_COMPLETED,
    }
}

impl DashboardApp {
    /// Apply the dark theme to the egui context.
    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_CARD;
        style.visuals.extreme_bg_color = BG_CARD;
        style.visuals.widgets.noninteractive.bg_fill = BG_CARD;
        style.visuals.widgets.inactive.bg_fill = BG_CARD;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        style.visuals.override_text_color = Some(TEXT_PRIMARY);
        ctx.set_style(style);
    }
}
