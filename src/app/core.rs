//! Core HotPinkApp struct definition and initialization

use eframe::egui;
use tracing::{info, warn};

use crate::client::ChatClient;
use crate::config::{save_settings, ChatConfig, Settings};
use crate::state::ClientState;
use crate::ui;

pub struct HotPinkApp {
    /// Session state plus the polling backend
    pub client: ChatClient,

    /// Settings as loaded, rewritten with the form fields on exit
    pub settings: Settings,

    pub theme: ui::HotPinkTheme,
}

impl HotPinkApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: ChatClient, settings: Settings) -> Self {
        ui::apply_app_style(&cc.egui_ctx);

        Self {
            client,
            settings,
            theme: ui::HotPinkTheme::new(),
        }
    }

    /// Build the client from settings and start polling.
    pub fn connect(settings: &Settings) -> Result<ChatClient, crate::error::TransportError> {
        let config = ChatConfig::resolve(settings);
        info!(base_url = %config.base_url, "connecting to chat store");
        let state = ClientState::new(settings.current_user.clone(), settings.recipient.clone());
        ChatClient::activate(&config, state)
    }

    fn snapshot_settings(&self) -> Settings {
        Settings {
            base_url: self.settings.base_url.clone(),
            current_user: self.client.state.current_user.clone(),
            recipient: self.client.state.recipient.clone(),
        }
    }
}

impl Drop for HotPinkApp {
    fn drop(&mut self) {
        self.client.teardown();

        // Persist the form fields on exit
        if let Err(e) = save_settings(&self.snapshot_settings()) {
            warn!(error = %e, "failed to save settings");
        }
    }
}

/// Window options for the native app
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    }
}
