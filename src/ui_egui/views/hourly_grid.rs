use egui::{FontId, Rect, Sense, Stroke, Vec2};

use super::activity_block::{draw_activity_block, draw_collapsed_cell};
use super::palette::{DayStripPalette, TimeGridPalette};
use super::{column_widths, show_day_header, GridStyle, COLUMN_SPACING, TIME_LABEL_WIDTH};
use crate::services::layout::{CollapsedDays, GridAction, HourlyGrid};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::hour_label;

pub const ROW_HEIGHT: f32 = 48.0;

/// Week grid with one row per hour.
pub struct HourlyGridView;

impl HourlyGridView {
    pub fn show(
        ui: &mut egui::Ui,
        grid: &HourlyGrid,
        collapsed: &CollapsedDays,
        style: &GridStyle,
        theme: &CalendarTheme,
    ) -> Vec<GridAction> {
        let mut actions = Vec::new();
        let strip_palette = DayStripPalette::from_theme(theme);
        let palette = TimeGridPalette::from_theme(theme);
        let widths = column_widths(ui.available_width(), &grid.days, collapsed);

        show_day_header(
            ui,
            &grid.days,
            &widths,
            collapsed,
            style,
            &strip_palette,
            &mut actions,
        );
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("hourly_grid_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let total_width =
                    TIME_LABEL_WIDTH + widths.iter().sum::<f32>() + COLUMN_SPACING * widths.len() as f32;
                let total_height = ROW_HEIGHT * grid.rows.len() as f32;
                let (grid_rect, _) =
                    ui.allocate_exact_size(Vec2::new(total_width, total_height), Sense::hover());

                for row in &grid.rows {
                    let row_top = grid_rect.top() + ROW_HEIGHT * row.hour as f32;
                    let label_rect = Rect::from_min_size(
                        egui::pos2(grid_rect.left(), row_top),
                        Vec2::new(TIME_LABEL_WIDTH, ROW_HEIGHT),
                    );
                    ui.painter().rect_filled(label_rect, egui::Rounding::ZERO, palette.hour_bg);
                    ui.painter().text(
                        label_rect.right_top() + Vec2::new(-6.0, 4.0),
                        egui::Align2::RIGHT_TOP,
                        hour_label(row.hour),
                        FontId::proportional(11.0),
                        palette.label_text,
                    );

                    let mut x = grid_rect.left() + TIME_LABEL_WIDTH + COLUMN_SPACING;
                    for (cell, width) in row.cells.iter().zip(&widths) {
                        let cell_rect = Rect::from_min_size(
                            egui::pos2(x, row_top),
                            Vec2::new(*width, ROW_HEIGHT),
                        );
                        x += width + COLUMN_SPACING;

                        if collapsed.is_collapsed(cell.date) {
                            draw_collapsed_cell(ui, cell_rect, cell.fragments.len(), &palette);
                            continue;
                        }

                        let fill = if style.selected_day == Some(cell.date) {
                            palette.selected_bg
                        } else {
                            palette.regular_bg
                        };
                        ui.painter().rect_filled(cell_rect, egui::Rounding::ZERO, fill);
                        ui.painter().line_segment(
                            [cell_rect.left_top(), cell_rect.right_top()],
                            Stroke::new(1.0, palette.hour_line),
                        );

                        // Fragments sharing a cell split its width side by side.
                        let count = cell.fragments.len().max(1) as f32;
                        let slot_width = (width - 4.0) / count;
                        for (index, fragment) in cell.fragments.iter().enumerate() {
                            let top = cell_rect.top() + ROW_HEIGHT * fragment.top_pct as f32 / 100.0;
                            let height = ROW_HEIGHT * fragment.height_pct as f32 / 100.0;
                            let block_rect = Rect::from_min_size(
                                egui::pos2(cell_rect.left() + 2.0 + slot_width * index as f32, top),
                                Vec2::new(slot_width - 1.0, height),
                            );
                            let continued = fragment.activity.start_hour() != row.hour;
                            let clicked = draw_activity_block(
                                ui,
                                block_rect,
                                grid_rect,
                                &fragment.activity,
                                ("hourly", fragment.activity.id, row.hour, cell.date),
                                continued,
                                style,
                                &palette,
                            );
                            if clicked {
                                actions.push(GridAction::OpenDetail(fragment.activity.id));
                            }
                        }
                    }
                }

                ui.painter().line_segment(
                    [
                        grid_rect.left_top() + Vec2::new(TIME_LABEL_WIDTH, 0.0),
                        grid_rect.left_bottom() + Vec2::new(TIME_LABEL_WIDTH, 0.0),
                    ],
                    Stroke::new(1.0, palette.divider),
                );
            });

        actions
    }
}
