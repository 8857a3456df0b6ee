use egui::{FontId, Rect, Sense, Stroke, Vec2};

use super::activity_block::{draw_activity_block, draw_collapsed_cell};
use super::palette::{DayStripPalette, TimeGridPalette};
use super::{column_widths, show_day_header, GridStyle, COLUMN_SPACING, TIME_LABEL_WIDTH};
use crate::services::layout::{CollapsedDays, DayColumn, GridAction};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::hour_label;

/// Height of the full 24-hour column.
pub const DAY_HEIGHT: f32 = 24.0 * 40.0;

/// Week grid with one full-day column per date and overlapping activities
/// pushed below their predecessor.
pub struct DayColumnsView;

impl DayColumnsView {
    pub fn show(
        ui: &mut egui::Ui,
        columns: &[DayColumn],
        collapsed: &CollapsedDays,
        style: &GridStyle,
        theme: &CalendarTheme,
    ) -> Vec<GridAction> {
        let mut actions = Vec::new();
        let strip_palette = DayStripPalette::from_theme(theme);
        let palette = TimeGridPalette::from_theme(theme);
        let days: Vec<_> = columns.iter().map(|column| column.date).collect();
        let widths = column_widths(ui.available_width(), &days, collapsed);

        show_day_header(ui, &days, &widths, collapsed, style, &strip_palette, &mut actions);
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("day_columns_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let total_width =
                    TIME_LABEL_WIDTH + widths.iter().sum::<f32>() + COLUMN_SPACING * widths.len() as f32;
                let (area, _) =
                    ui.allocate_exact_size(Vec2::new(total_width, DAY_HEIGHT), Sense::hover());
                let hour_height = DAY_HEIGHT / 24.0;

                let mut column_rects = Vec::with_capacity(columns.len());
                let mut x = area.left() + TIME_LABEL_WIDTH + COLUMN_SPACING;
                for (column, width) in columns.iter().zip(&widths) {
                    let column_rect =
                        Rect::from_min_size(egui::pos2(x, area.top()), Vec2::new(*width, DAY_HEIGHT));
                    x += width + COLUMN_SPACING;
                    column_rects.push(column_rect);

                    if collapsed.is_collapsed(column.date) {
                        draw_collapsed_cell(ui, column_rect, column.blocks.len(), &palette);
                        continue;
                    }

                    let fill = if style.selected_day == Some(column.date) {
                        palette.selected_bg
                    } else {
                        palette.regular_bg
                    };
                    ui.painter().rect_filled(column_rect, egui::Rounding::ZERO, fill);
                }

                for hour in 0..24u32 {
                    let y = area.top() + hour_height * hour as f32;
                    ui.painter().text(
                        egui::pos2(area.left() + TIME_LABEL_WIDTH - 6.0, y + 2.0),
                        egui::Align2::RIGHT_TOP,
                        hour_label(hour),
                        FontId::proportional(11.0),
                        palette.label_text,
                    );
                    ui.painter().line_segment(
                        [
                            egui::pos2(area.left() + TIME_LABEL_WIDTH, y),
                            egui::pos2(area.right(), y),
                        ],
                        Stroke::new(1.0, palette.hour_line),
                    );
                }

                for (column, column_rect) in columns.iter().zip(column_rects) {
                    if collapsed.is_collapsed(column.date) {
                        continue;
                    }

                    for block in &column.blocks {
                        let top = column_rect.top() + DAY_HEIGHT * block.visible_top_pct() as f32 / 100.0;
                        let height = DAY_HEIGHT * block.visible_height_pct() as f32 / 100.0;
                        let block_rect = Rect::from_min_size(
                            egui::pos2(column_rect.left() + 2.0, top),
                            Vec2::new(column_rect.width() - 4.0, height),
                        );
                        let clicked = draw_activity_block(
                            ui,
                            block_rect,
                            column_rect,
                            &block.activity,
                            ("column", block.activity.id, column.date),
                            false,
                            style,
                            &palette,
                        );
                        if clicked {
                            actions.push(GridAction::OpenDetail(block.activity.id));
                        }
                    }
                }
            });

        actions
    }
}

