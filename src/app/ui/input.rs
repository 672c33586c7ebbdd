//! Name, recipient and draft inputs with the send button

use eframe::egui;

use crate::app::HotPinkApp;

impl HotPinkApp {
    /// Render the form panel under the header
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();

        egui::TopBottomPanel::top("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.cream)
                    .inner_margin(egui::Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                if let Some(error) = self.client.state.error {
                    egui::Frame::new()
                        .fill(theme.error_bg)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.colored_label(theme.error_text, error.to_string());
                        });
                    ui.add_space(6.0);
                }

                let mut send_requested = false;
                let state = &mut self.client.state;

                ui.horizontal(|ui| {
                    let full = ui.available_width();
                    ui.add(
                        egui::TextEdit::singleline(&mut state.current_user)
                            .hint_text("Your name...")
                            .desired_width(full * 0.2),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.recipient)
                            .hint_text("To...")
                            .desired_width(full * 0.15),
                    );

                    let draft = ui.add(
                        egui::TextEdit::singleline(&mut state.draft)
                            .hint_text("Type your message...")
                            .desired_width(full * 0.4),
                    );
                    // Enter in the draft field sends, like the button
                    if draft.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        send_requested = true;
                        draft.request_focus();
                    }

                    let label = if state.loading { "⏳" } else { "📤 Send" };
                    let button = egui::Button::new(
                        egui::RichText::new(label).color(theme.on_accent),
                    )
                    .fill(theme.pink)
                    .min_size(egui::vec2(full * 0.15, 0.0));
                    if ui.add_enabled(!state.loading, button).clicked() {
                        send_requested = true;
                    }
                });

                if send_requested {
                    self.client.send();
                }

                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Press Enter to send • Auto-refresh every 3 seconds")
                            .small()
                            .color(theme.text_muted),
                    );
                });
            });
    }
}
