//! Activity detail window.

use super::TripCalendarApp;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{format_long_date, format_price, format_time_range};
use egui::RichText;

impl TripCalendarApp {
    pub(super) fn render_detail_window(&mut self, ctx: &egui::Context) {
        let Some(activity) = &self.detail else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        let time_format = self.settings.time_format;
        let secondary = self.active_theme.text_secondary;

        egui::Window::new(RichText::new(&activity.title).strong())
            .id(egui::Id::new("activity_detail"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("activity_detail_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Date").color(secondary));
                        ui.label(format_long_date(activity.date));
                        ui.end_row();

                        ui.label(RichText::new("Time").color(secondary));
                        ui.label(format_time_range(
                            activity.start_time,
                            activity.end_time,
                            time_format,
                        ));
                        ui.end_row();

                        ui.label(RichText::new("Location").color(secondary));
                        ui.label(&activity.location);
                        ui.end_row();

                        ui.label(RichText::new("Category").color(secondary));
                        ui.label(
                            RichText::new(&activity.category)
                                .color(CalendarTheme::category_color(&activity.category)),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Price").color(secondary));
                        ui.label(format_price(activity.price));
                        ui.end_row();
                    });

                if let Some(description) = activity.description.as_deref().filter(|d| !d.is_empty()) {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.label(description);
                }

                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.detail = None;
        }
    }
}
