//! Status filter bar with per-status counts.

use eframe::egui::{self, RichText};

use super::app::DashboardApp;
use super::state::{Event, StatusFilter};
use super::theme;

impl DashboardApp {
    pub(super) fn render_filter_bar(&mut self, ui: &mut egui::Ui) {
        let mut selected: Option<StatusFilter> = None;

        ui.horizontal(|ui| {
            for filter in StatusFilter::ALL {
                let active = self.state.filter == filter;
                let text = format!("{} ({})", filter.label(), self.state.filter_count(filter));
                let button = egui::Button::new(RichText::new(text).color(if active {
                    theme::BG_PRIMARY
                } else {
                    theme::TEXT_PRIMARY
                }))
                .fill(if active {
                    theme::TEXT_PRIMARY
                } else {
                    theme::BG_CARD
                });

                if ui.add(button).clicked() {
                    selected = Some(filter);
                }
            }
        });

        if let Some(filter) = selected {
            self.dispatch(Event::FilterChanged(filter));
        }
    }
}
