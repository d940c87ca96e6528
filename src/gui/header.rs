//! Header panel: title and the aggregate stats row.

use eframe::egui::{self, RichText};

use super::app::DashboardApp;
use super::{format, theme};

impl DashboardApp {
    pub(super) fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(theme::BG_CARD).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.heading(RichText::new("Mixo Ads - Campaign Dashboard").color(theme::TEXT_PRIMARY));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let insights = self.state.insights.as_ref();
                    stat(ui, "Total Campaigns", self.state.campaigns.len().to_string());
                    stat(
                        ui,
                        "Total Impressions",
                        insights.map_or_else(|| "-".to_string(), |i| format::count(i.total_impressions)),
                    );
                    stat(
                        ui,
                        "Total Clicks",
                        insights.map_or_else(|| "-".to_string(), |i| format::count(i.total_clicks)),
                    );
                    stat(
                        ui,
                        "Total Spend",
                        insights.map_or_else(|| "-".to_string(), |i| format::currency(i.total_spend)),
                    );
                    stat(
                        ui,
                        "Average CTR",
                        insights.map_or_else(|| "-".to_string(), |i| format::percent(i.average_ctr)),
                    );
                });
            });
    }
}

/// One labelled value in the stats row.
fn stat(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(theme::TEXT_DIM));
        ui.label(
            RichText::new(value)
                .strong()
                .size(18.0)
                .color(theme::TEXT_PRIMARY),
        );
    });
    ui.add_space(24.0);
}
