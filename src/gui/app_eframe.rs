//! eframe::App implementation for the dashboard
//!
//! One pass per frame: poll the retry timer and fetch events, then
//! render whichever screen the state calls for.

use eframe::egui::{self, RichText};

use super::app::DashboardApp;
use super::theme;

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();
        self.apply_theme(ctx);

        if self.state.loading {
            self.render_loading_screen(ctx);
        } else if self.state.error.is_some() {
            self.render_error_screen(ctx);
        } else {
            self.render_dashboard(ctx);
        }

        // try_recv channels and the retry deadline have nothing to wake
        // the event loop, so keep frames coming ourselves.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl DashboardApp {
    /// Full-window spinner while a campaign-list attempt is in flight.
    fn render_loading_screen(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label(RichText::new("Loading campaigns...").color(theme::TEXT_DIM));
            });
        });
    }

    /// Full-window terminal error with a manual retry.
    fn render_error_screen(&mut self, ctx: &egui::Context) {
        let message = self.state.error.clone().unwrap_or_default();
        let mut retry = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.label(RichText::new(message).color(theme::ACCENT_RED).size(16.0));
                ui.add_space(12.0);
                if ui.button("Retry").clicked() {
                    retry = true;
                }
            });
        });

        if retry {
            self.dispatch(super::state::Event::RetryRequested);
        }
    }

    /// Header, filter bar, card grid and (when open) the detail modal.
    fn render_dashboard(&mut self, ctx: &egui::Context) {
        self.render_header(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_filter_bar(ui);
            ui.add_space(4.0);
            ui.label(
                RichText::new("Double-click a campaign card to view details and performance.")
                    .small()
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(8.0);
            self.render_campaign_grid(ui);
        });
        self.render_detail_modal(ctx);
    }
}
