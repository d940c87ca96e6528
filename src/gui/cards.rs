//! Campaign card grid.

use eframe::egui::{self, RichText};

use crate::domain::{Campaign, CampaignStatus};

use super::app::DashboardApp;
use super::state::Event;
use super::{format, theme};

impl DashboardApp {
    pub(super) fn render_campaign_grid(&mut self, ui: &mut egui::Ui) {
        let mut open_detail: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let filtered: Vec<&Campaign> = self.state.filtered_campaigns().collect();
                if filtered.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("No campaigns found for the selected filter.")
                                .color(theme::TEXT_DIM),
                        );
                    });
                    return;
                }

                for campaign in filtered {
                    if campaign_card(ui, campaign).double_clicked() {
                        open_detail = Some(campaign.id.clone());
                    }
                    ui.add_space(8.0);
                }
            });

        if let Some(id) = open_detail {
            self.dispatch(Event::DetailRequested(id));
        }
    }
}

/// Render one campaign card and return its interact response.
fn campaign_card(ui: &mut egui::Ui, campaign: &Campaign) -> egui::Response {
    let response = egui::Frame::new()
        .fill(theme::BG_CARD)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&campaign.name)
                        .strong()
                        .size(16.0)
                        .color(theme::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    status_badge(ui, campaign.status);
                });
            });
            ui.add_space(6.0);
            detail_row(ui, "Budget", &format::currency(campaign.budget));
            detail_row(ui, "Daily Budget", &format::currency(campaign.daily_budget));
            detail_row(ui, "Platforms", &campaign.platforms.join(", "));
            detail_row(ui, "Created", &format::date(&campaign.created_at));
            detail_row(ui, "Brand ID", &campaign.brand_id);
        })
        .response;

    response.interact(egui::Sense::click())
}

/// Colored pill showing the campaign status.
pub(super) fn status_badge(ui: &mut egui::Ui, status: CampaignStatus) {
    egui::Frame::new()
        .fill(theme::status_color(status))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                RichText::new(status.as_str())
                    .small()
                    .strong()
                    .color(egui::Color32::WHITE),
            );
        });
}

/// One `label: value` line, shared by the cards and the detail modal.
pub(super) fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{label}:")).color(theme::TEXT_DIM));
        ui.label(RichText::new(value).color(theme::TEXT_PRIMARY));
    });
}
