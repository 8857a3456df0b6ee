//! Week navigation bar along the top of the window.

use super::TripCalendarApp;
use crate::models::settings::LayoutMode;
use egui::RichText;

impl TripCalendarApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous week").clicked() {
                    self.navigate_previous();
                }
                ui.label(RichText::new(self.view.window.label()).strong().size(16.0));
                if ui.button("▶").on_hover_text("Next week").clicked() {
                    self.navigate_next();
                }
                if ui.button("Today").clicked() {
                    self.jump_to_today();
                }

                ui.separator();

                let mut mode = self.view.layout_mode;
                ui.selectable_value(&mut mode, LayoutMode::Hourly, "⏰ Hourly")
                    .on_hover_text("One row per hour");
                ui.selectable_value(&mut mode, LayoutMode::DayColumn, "📅 Day columns")
                    .on_hover_text("One full-day column per date");
                self.set_layout_mode(mode);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.open_settings_dialog();
                    }
                    if ui
                        .button("🖨 Print")
                        .on_hover_text("Open a printable copy of this week")
                        .clicked()
                    {
                        self.export_printable_view();
                    }
                    if self.is_loading() {
                        ui.spinner();
                    }
                    if let Some(range) = self.view.date_override {
                        ui.label(
                            RichText::new(format!("Filtered: {}", range.label()))
                                .small()
                                .color(self.active_theme.text_secondary),
                        );
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}
