//! Skip size picker panel

use chrono::{DateTime, Utc};
use eframe::egui::{self, Color32, RichText, ScrollArea, Sense, Stroke, Ui};
use log::warn;

use skipsize_app::config::Config;
use skipsize_app::loader::SizeLoader;
use skipsize_app::repository::open_size_source;
use skipsize_domain::service::cards::{HEADING, HEAVY_WASTE_WARNING, ROAD_WARNING, SUBHEADING};
use skipsize_domain::service::{SizeCard, SizePicker};

const PRIMARY: Color32 = Color32::from_rgb(0x00, 0x37, 0xC1);
const ROAD_COLOR: Color32 = Color32::from_rgb(0xEA, 0xB3, 0x08);
const HEAVY_WASTE_COLOR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Panel that fetches sizes once on creation and renders them as cards
pub struct PickerPanel {
    picker: SizePicker,
    /// Fetch started on creation; dropped together with the panel
    loader: Option<SizeLoader>,
    loaded_at: Option<DateTime<Utc>>,
}

impl PickerPanel {
    pub fn new(
        config: &Config,
        initial_size: Option<u32>,
        heavy_waste: bool,
        select_size: impl FnMut(u32) + 'static,
    ) -> Self {
        let picker = SizePicker::new(select_size)
            .with_initial_size(initial_size)
            .with_heavy_waste(heavy_waste);

        let mut panel = Self {
            picker,
            loader: None,
            loaded_at: None,
        };

        match open_size_source(config) {
            Ok(source) => panel.loader = Some(SizeLoader::spawn(source, config.location())),
            Err(e) => {
                // Same outcome as a failed fetch: an empty list
                warn!("Could not open size source: {}", e);
                panel.picker.load_sizes(Vec::new());
            }
        }

        panel
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.poll_loader(ui.ctx());

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(HEADING).strong());
            ui.add_space(4.0);
            ui.label(RichText::new(SUBHEADING).color(Color32::GRAY));
        });
        ui.add_space(10.0);

        let mut heavy_waste = self.picker.has_heavy_waste();
        if ui.checkbox(&mut heavy_waste, "My waste includes heavy materials").changed() {
            self.picker.set_heavy_waste(heavy_waste);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        let cards = self.picker.cards();
        let mut clicked = None;
        ScrollArea::vertical()
            .id_salt("size_cards_scroll")
            .show(ui, |ui| {
                for card in &cards {
                    if render_card(ui, card) {
                        clicked = Some(card.id);
                    }
                    ui.add_space(12.0);
                }
            });

        if let Some(id) = clicked {
            self.picker.select(id);
        }
    }

    /// Size currently selected in the picker
    pub fn selected_id(&self) -> Option<u32> {
        self.picker.selected_id()
    }

    /// When the sizes arrived; `None` while the fetch is running
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Poll for the fetched sizes from the background thread
    fn poll_loader(&mut self, ctx: &egui::Context) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        if !loader.is_pending() {
            return;
        }
        match loader.poll() {
            Some(loaded) => {
                self.picker.load_sizes(loaded.sizes);
                self.loaded_at = Some(loaded.loaded_at);
            }
            None => ctx.request_repaint(),
        }
    }
}

/// Draw one card. Returns true when an enabled card was clicked.
fn render_card(ui: &mut Ui, card: &SizeCard) -> bool {
    let stroke_color = if card.selected {
        PRIMARY
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    let response = ui
        .scope(|ui| {
            if card.disabled {
                ui.set_opacity(0.5);
            }
            egui::Frame::group(ui.style())
                .stroke(Stroke::new(2.0, stroke_color))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&card.title).size(18.0).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(&card.price).size(20.0).strong().color(PRIMARY));
                        });
                    });
                    ui.label(RichText::new(&card.hire_period).small());
                    ui.horizontal(|ui| {
                        if card.road_warning {
                            ui.label(RichText::new(format!("⚠ {}", ROAD_WARNING)).small().color(ROAD_COLOR));
                        }
                        if card.heavy_waste_warning {
                            ui.label(
                                RichText::new(format!("⚠ {}", HEAVY_WASTE_WARNING))
                                    .small()
                                    .color(HEAVY_WASTE_COLOR),
                            );
                        }
                    });
                })
                .response
        })
        .inner;

    if card.disabled {
        return false;
    }
    response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use std::rc::Rc;
    use std::time::{Duration, Instant};
    use tempfile::NamedTempFile;

    const CATALOGUE: &str = r#"[
        {"id": 1, "size": 4, "hire_period_days": 14, "price_before_vat": 278, "vat": 20,
         "postcode": "NR32", "area": "Lowestoft", "forbidden": false,
         "allowed_on_road": true, "allows_heavy_waste": true},
        {"id": 2, "size": 6, "hire_period_days": 14, "price_before_vat": 305, "vat": 20,
         "postcode": "NR32", "area": "Lowestoft", "forbidden": false,
         "allowed_on_road": true, "allows_heavy_waste": false}
    ]"#;

    fn loaded_panel(chosen: Rc<Cell<Option<u32>>>) -> (NamedTempFile, PickerPanel) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOGUE.as_bytes()).unwrap();
        let config = Config {
            catalogue_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        let mut panel = PickerPanel::new(&config, None, false, move |id| chosen.set(Some(id)));
        let ctx = egui::Context::default();
        let deadline = Instant::now() + Duration::from_secs(5);
        while panel.loaded_at().is_none() {
            assert!(Instant::now() < deadline, "sizes did not load");
            panel.poll_loader(&ctx);
            std::thread::sleep(Duration::from_millis(5));
        }
        (file, panel)
    }

    #[test]
    fn test_sizes_load_with_timestamp() {
        let before = Utc::now();
        let (_file, panel) = loaded_panel(Rc::new(Cell::new(None)));

        assert_eq!(panel.picker.sizes().len(), 2);
        let loaded_at = panel.loaded_at().unwrap();
        assert!(loaded_at >= before && loaded_at <= Utc::now());
    }

    #[test]
    fn test_heavy_waste_toggle_clears_shown_selection() {
        let chosen = Rc::new(Cell::new(None));
        let (_file, mut panel) = loaded_panel(Rc::clone(&chosen));

        panel.picker.select(2);
        assert_eq!(panel.selected_id(), Some(2));
        assert_eq!(chosen.get(), Some(2));

        panel.picker.set_heavy_waste(true);
        assert_eq!(panel.selected_id(), None);
    }
}
