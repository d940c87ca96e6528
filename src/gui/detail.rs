//! Campaign detail modal.

use eframe::egui::{self, RichText};

use super::app::DashboardApp;
use super::cards::{detail_row, status_badge};
use super::state::Event;
use super::{format, theme};

impl DashboardApp {
    /// Render the detail modal. The window only exists once a selected
    /// campaign does; a failed first open (no fallback available) never
    /// shows a window at all.
    pub(super) fn render_detail_modal(&mut self, ctx: &egui::Context) {
        let Some(campaign) = self.state.selected_campaign.clone() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Campaign Details")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                if self.state.modal_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(16.0);
                        ui.add(egui::Spinner::new().size(24.0));
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new("Loading campaign details...").color(theme::TEXT_DIM),
                        );
                        ui.add_space(16.0);
                    });
                    return;
                }

                detail_row(ui, "Campaign Name", &campaign.name);
                detail_row(ui, "Campaign ID", &campaign.id);
                detail_row(ui, "Brand ID", &campaign.brand_id);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Status:").color(theme::TEXT_DIM));
                    status_badge(ui, campaign.status);
                });
                detail_row(ui, "Total Budget", &format::currency(campaign.budget));
                detail_row(ui, "Daily Budget", &format::currency(campaign.daily_budget));
                detail_row(ui, "Platforms", &campaign.platforms.join(", "));
                detail_row(ui, "Created Date", &format::date(&campaign.created_at));

                ui.add_space(8.0);
                match &self.state.campaign_insights {
                    Some(insights) => {
                        ui.label(
                            RichText::new("Performance Metrics")
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.add_space(4.0);
                        metric_row(ui, "Impressions", insights.impressions, format::count);
                        metric_row(ui, "Clicks", insights.clicks, format::count);
                        metric_row(ui, "Conversions", insights.conversions, format::count);
                        metric_row(ui, "Spend", insights.spend, format::currency);
                        metric_row(ui, "CTR", insights.ctr, format::percent);
                        metric_row(ui, "CPC", insights.cpc, format::currency);
                        metric_row(
                            ui,
                            "Conversion Rate",
                            insights.conversion_rate,
                            format::percent,
                        );
                    }
                    None => {
                        ui.label(
                            RichText::new("Performance metrics unavailable")
                                .strong()
                                .color(theme::TEXT_DIM),
                        );
                    }
                }
            });

        if !open {
            self.dispatch(Event::ModalClosed);
        }
    }
}

/// One metric line; missing or zero values render as "No data".
fn metric_row(ui: &mut egui::Ui, label: &str, value: Option<f64>, fmt: fn(f64) -> String) {
    let text = match value {
        Some(v) if v != 0.0 => fmt(v),
        _ => "No data".to_string(),
    };
    detail_row(ui, label, &text);
}
