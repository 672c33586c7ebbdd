//! Header and central panel rendering

use eframe::egui;

use crate::app::HotPinkApp;
use crate::ui;

impl HotPinkApp {
    /// Render the title bar at the top of the window
    pub(in crate::app) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.violet)
                    .inner_margin(egui::Margin::symmetric(16, 14)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("💬 HotPink Connect")
                            .heading()
                            .color(self.theme.on_accent),
                    );
                    ui.label(
                        egui::RichText::new("Simple 2-User Chat")
                            .color(self.theme.on_accent.gamma_multiply(0.6)),
                    );
                });
            });
    }

    /// Render the central panel with messages
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.backdrop)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui::render_messages(ui, &mut self.client.state, &self.theme);
            });
    }
}
