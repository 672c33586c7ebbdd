//! Colors and styling for the chat window.
//!
//! The palette is a violet header, pink accents for your own messages and a
//! cream surface for everyone else's. There is a single light theme.

use eframe::egui::{self, Color32, CornerRadius, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Semantic colors used across the UI
#[derive(Clone, Debug)]
pub struct HotPinkTheme {
    /// Header bar and input borders
    pub violet: Color32,
    /// Send button and own-message bubbles
    pub pink: Color32,
    /// Form panel and other-message bubbles
    pub cream: Color32,
    /// Message list background
    pub backdrop: Color32,
    pub error_bg: Color32,
    pub error_text: Color32,
    pub own_text: Color32,
    pub own_meta: Color32,
    pub other_text: Color32,
    pub other_meta: Color32,
    pub text_muted: Color32,
    pub on_accent: Color32,
}

impl HotPinkTheme {
    pub fn new() -> Self {
        Self {
            violet: Color32::from_rgb(0x8B, 0x5C, 0xF6),
            pink: Color32::from_rgb(0xEC, 0x48, 0x99),
            cream: Color32::from_rgb(0xFE, 0xF3, 0xE2),
            backdrop: Color32::from_rgb(0xC0, 0x7C, 0xD0),
            error_bg: Color32::from_rgb(0xF8, 0xD7, 0xDA),
            error_text: Color32::from_rgb(0x84, 0x20, 0x29),
            own_text: Color32::WHITE,
            own_meta: Color32::from_rgba_unmultiplied(255, 255, 255, 200),
            other_text: Color32::from_rgb(0x33, 0x33, 0x33),
            other_meta: Color32::from_rgb(0x66, 0x66, 0x66),
            text_muted: Color32::from_rgb(0x99, 0x99, 0x99),
            on_accent: Color32::WHITE,
        }
    }

    /// Bubble colors and shape for a message
    pub fn bubble(&self, own: bool) -> BubbleStyle {
        if own {
            BubbleStyle {
                fill: self.pink,
                sender: self.own_meta,
                text: self.own_text,
                meta: self.own_meta,
                // Tail on the bottom right
                corners: CornerRadius { nw: 20, ne: 20, sw: 20, se: 5 },
            }
        } else {
            BubbleStyle {
                fill: self.cream,
                sender: self.violet,
                text: self.other_text,
                meta: self.other_meta,
                corners: CornerRadius { nw: 20, ne: 20, sw: 5, se: 20 },
            }
        }
    }
}

impl Default for HotPinkTheme {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual treatment of one message bubble
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub fill: Color32,
    pub sender: Color32,
    pub text: Color32,
    pub meta: Color32,
    pub corners: CornerRadius,
}

fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into()
}

/// Apply global style tweaks once at startup
pub fn apply_app_style(ctx: &egui::Context) {
    let theme = HotPinkTheme::new();
    ctx.set_visuals(egui::Visuals::light());

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    // Rounded, violet-bordered inputs
    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = CornerRadius::same(15);
    }
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(2.0, theme.violet);
    style.visuals.selection.stroke = egui::Stroke::new(2.0, theme.pink);
    style.visuals.selection.bg_fill = theme.pink.linear_multiply(0.4);

    ctx.set_style(style);
}
