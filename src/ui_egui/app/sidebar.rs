//! Sidebar with the category and date filter forms.
//!
//! Both forms edit drafts; nothing reaches the grid until "Apply".

use super::TripCalendarApp;
use crate::models::category::default_trip_categories;
use egui::RichText;
use egui_extras::DatePickerButton;

const SIDEBAR_MIN_WIDTH: f32 = 170.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 200.0;
const SIDEBAR_MAX_WIDTH: f32 = 300.0;

impl TripCalendarApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_category_form(ui);
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.render_date_form(ui);

                    if self.context.is_local() {
                        ui.add_space(8.0);
                        ui.separator();
                        ui.add_space(8.0);
                        if ui
                            .button("📥 Import activities…")
                            .on_hover_text("Add activities from a JSON file (or drop one on the window)")
                            .clicked()
                        {
                            self.import_from_dialog();
                        }
                    }
                });
            });
    }

    fn render_category_form(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Categories").strong());
        ui.add_space(4.0);

        let categories = default_trip_categories();
        for category in &categories {
            let mut checked = self.view.drafts.checked.contains(&category.name);
            if ui.checkbox(&mut checked, category.display_name()).changed() {
                if checked {
                    self.view.drafts.checked.insert(category.name.clone());
                } else {
                    self.view.drafts.checked.remove(&category.name);
                }
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.small_button("All").clicked() {
                self.view
                    .drafts
                    .checked
                    .extend(categories.iter().map(|c| c.name.clone()));
            }
            if ui.small_button("None").clicked() {
                self.view.drafts.checked.clear();
            }
        });

        if ui.button("Apply").clicked() {
            self.view.apply_category_form();
            log::info!(
                "Category filter applied: {}",
                self.view.filter.selected().collect::<Vec<_>>().join(", ")
            );
            self.request_week();
        }
    }

    fn render_date_form(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Date range").strong());
        ui.add_space(4.0);

        egui::Grid::new("date_filter_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("From");
                ui.add(DatePickerButton::new(&mut self.view.drafts.start_date).id_source("filter_start_date"));
                ui.end_row();

                ui.label("To");
                ui.add(DatePickerButton::new(&mut self.view.drafts.end_date).id_source("filter_end_date"));
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                match self.view.apply_date_filter() {
                    Ok(range) => {
                        self.toast_manager
                            .success(format!("Date filter applied: {}", range.label()));
                        self.request_week();
                    }
                    Err(message) => {
                        log::warn!("Rejected date filter: {}", message);
                        self.toast_manager.error(message);
                    }
                }
            }

            let has_override = self.view.date_override.is_some();
            if ui.add_enabled(has_override, egui::Button::new("Clear")).clicked() {
                self.view.clear_date_filter();
                self.toast_manager.info("Date filter cleared");
                self.request_week();
            }
        });
    }
}
