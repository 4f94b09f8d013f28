//! Main application structure hosting the size picker

use chrono::Local;
use eframe::egui::{self, RichText};
use log::{info, warn};
use skipsize_app::config::Config;

use crate::picker_panel::PickerPanel;

/// Main application state
pub struct SkipSizeApp {
    picker_panel: PickerPanel,
    config: Config,
}

impl SkipSizeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!("Falling back to default configuration: {}", e);
            Config::default()
        });

        let picker_panel = PickerPanel::new(&config, None, false, |id| {
            info!("Skip size {} selected", id);
        });

        Self {
            picker_panel,
            config,
        }
    }
}

impl eframe::App for SkipSizeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}", self.config.location()));
                ui.separator();
                if let Some(loaded_at) = self.picker_panel.loaded_at() {
                    ui.label(format!("Loaded {}", loaded_at.with_timezone(&Local).format("%H:%M:%S")));
                    ui.separator();
                }
                match self.picker_panel.selected_id() {
                    Some(id) => ui.label(RichText::new(format!("Chosen size: #{}", id)).strong()),
                    None => ui.weak("No size chosen"),
                };
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.picker_panel.ui(ui);
        });
    }
}
