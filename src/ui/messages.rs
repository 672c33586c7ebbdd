//! Message list rendering for the central chat panel.

use eframe::egui;

use crate::message::{display_time, Message};
use crate::state::ClientState;
use crate::ui::theme::HotPinkTheme;

/// Fraction of the panel width a bubble may take.
const BUBBLE_MAX_WIDTH: f32 = 0.8;

/// Stable egui id for a message row: the store id, or the list index when the
/// store did not provide one.
pub fn row_id(message: &Message, index: usize) -> egui::Id {
    match &message.id {
        Some(id) => egui::Id::new(("message", id)),
        None => egui::Id::new(("message-index", index)),
    }
}

/// Render the scrolling message list, or the empty-state hint.
pub fn render_messages(ui: &mut egui::Ui, state: &mut ClientState, theme: &HotPinkTheme) {
    let scroll_to_latest = state.take_scroll_request();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if state.messages.is_empty() {
                render_empty_state(ui, theme);
                return;
            }

            for (index, message) in state.messages.iter().enumerate() {
                let own = state.is_own(message);
                ui.push_id(row_id(message, index), |ui| {
                    render_message_row(ui, message, own, theme);
                });
                ui.add_space(12.0);
            }

            if scroll_to_latest {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn render_empty_state(ui: &mut egui::Ui, theme: &HotPinkTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            egui::RichText::new("💬 No messages yet!")
                .heading()
                .color(theme.on_accent),
        );
        ui.label(
            egui::RichText::new("Enter your name, recipient, and start chatting!")
                .color(theme.on_accent),
        );
    });
}

/// One bubble, right-aligned for own messages and left-aligned otherwise.
fn render_message_row(ui: &mut egui::Ui, message: &Message, own: bool, theme: &HotPinkTheme) {
    let layout = if own {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };
    let max_width = ui.available_width() * BUBBLE_MAX_WIDTH;
    let style = theme.bubble(own);

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(style.fill)
            .corner_radius(style.corners)
            .inner_margin(egui::Margin::same(12))
            .shadow(egui::Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: egui::Color32::from_black_alpha(25),
            })
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&message.from)
                                .small()
                                .strong()
                                .color(style.sender),
                        );
                        ui.label(
                            egui::RichText::new(format!("→ {}", message.to))
                                .small()
                                .color(style.meta),
                        );
                    });
                    ui.add(
                        egui::Label::new(egui::RichText::new(&message.body).color(style.text))
                            .wrap(),
                    );
                    ui.label(
                        egui::RichText::new(display_time(message))
                            .size(11.0)
                            .color(style.meta),
                    );
                });
            });
    });
}
