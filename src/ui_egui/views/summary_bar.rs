use egui::{Margin, RichText, Stroke};

use super::palette::DayStripPalette;
use crate::services::summary::WeekSummary;
use crate::ui_egui::theme::CalendarTheme;

/// Total cost and per-category badges shown under the grid.
pub fn show_summary(ui: &mut egui::Ui, summary: &WeekSummary, theme: &CalendarTheme) {
    let palette = DayStripPalette::from_theme(theme);

    egui::Frame::none()
        .fill(palette.strip_bg)
        .rounding(egui::Rounding::same(8.0))
        .stroke(Stroke::new(1.0, palette.strip_border))
        .inner_margin(Margin::symmetric(10.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(summary.format_total_cost()).strong());
                ui.separator();
                ui.label(RichText::new("Activity Summary").color(palette.date_text));

                if summary.category_counts.is_empty() {
                    ui.label(RichText::new("No visible activities").weak());
                }

                for (category, count) in &summary.category_counts {
                    let color = CalendarTheme::category_color(category);
                    egui::Frame::none()
                        .fill(color)
                        .rounding(egui::Rounding::same(4.0))
                        .inner_margin(Margin::symmetric(6.0, 2.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("{}: {}", category, count))
                                    .small()
                                    .color(egui::Color32::WHITE),
                            );
                        });
                }
            });
        });
}
