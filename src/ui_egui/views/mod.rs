use chrono::NaiveDate;
use egui::{Margin, RichText, Sense, Stroke, Vec2};

use crate::models::settings::TimeFormat;
use crate::services::layout::{header_action, CollapsedDays, GridAction};
use crate::utils::date::format_day_header;

mod activity_block;
pub mod day_columns;
pub mod hourly_grid;
pub(crate) mod palette;
pub mod summary_bar;

use self::palette::DayStripPalette;

pub const TIME_LABEL_WIDTH: f32 = 50.0;
pub const COLUMN_SPACING: f32 = 2.0;
pub const COLLAPSED_COLUMN_WIDTH: f32 = 28.0;
pub const MIN_COLUMN_WIDTH: f32 = 40.0;
const HEADER_HEIGHT: f32 = 40.0;

/// Per-frame drawing options shared by both grid views.
#[derive(Debug, Clone)]
pub struct GridStyle {
    pub time_format: TimeFormat,
    pub highlight_keyword: Option<String>,
    pub selected_day: Option<NaiveDate>,
}

/// Widths of the day columns for the space left after the time label.
/// Every column, the first included, is preceded by one `COLUMN_SPACING` gap.
/// Collapsed days take a fixed narrow strip; the rest share what remains.
pub fn column_widths(available: f32, days: &[NaiveDate], collapsed: &CollapsedDays) -> Vec<f32> {
    if days.is_empty() {
        return Vec::new();
    }

    let gaps = COLUMN_SPACING * days.len() as f32;
    let collapsed_count = days.iter().filter(|d| collapsed.is_collapsed(**d)).count();
    let open_count = days.len() - collapsed_count;
    let remaining = available - TIME_LABEL_WIDTH - gaps - COLLAPSED_COLUMN_WIDTH * collapsed_count as f32;
    let open_width = if open_count == 0 {
        0.0
    } else {
        (remaining / open_count as f32).max(MIN_COLUMN_WIDTH)
    };

    days.iter()
        .map(|day| {
            if collapsed.is_collapsed(*day) {
                COLLAPSED_COLUMN_WIDTH
            } else {
                open_width
            }
        })
        .collect()
}

/// Header strip with one cell per day. Each cell carries a collapse toggle.
pub(crate) fn show_day_header(
    ui: &mut egui::Ui,
    days: &[NaiveDate],
    widths: &[f32],
    collapsed: &CollapsedDays,
    style: &GridStyle,
    palette: &DayStripPalette,
    actions: &mut Vec<GridAction>,
) {
    egui::Frame::none()
        .fill(palette.strip_bg)
        .rounding(egui::Rounding::same(8.0))
        .stroke(Stroke::new(1.0, palette.strip_border))
        .inner_margin(Margin::symmetric(0.0, 6.0))
        .show(ui, |strip_ui| {
            strip_ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, HEADER_HEIGHT), Sense::hover());

                for (date, width) in days.iter().zip(widths) {
                    ui.add_space(COLUMN_SPACING);

                    let is_collapsed = collapsed.is_collapsed(*date);
                    let is_selected = style.selected_day == Some(*date);

                    let (rect, header_response) =
                        ui.allocate_exact_size(Vec2::new(*width, HEADER_HEIGHT), Sense::click());
                    let fill = if is_selected {
                        palette.selected_cell_bg
                    } else {
                        palette.cell_bg
                    };
                    let border = if is_selected {
                        palette.accent_line
                    } else {
                        palette.strip_border
                    };
                    ui.painter().rect_filled(rect, egui::Rounding::same(6.0), fill);
                    ui.painter()
                        .rect_stroke(rect, egui::Rounding::same(6.0), Stroke::new(1.0, border));

                    let toggle_size = Vec2::splat(18.0);
                    let toggle_rect = egui::Rect::from_min_size(
                        egui::pos2(rect.right() - toggle_size.x - 4.0, rect.top() + 4.0),
                        toggle_size,
                    );
                    let toggle_response = ui
                        .interact(toggle_rect, ui.id().with(("collapse_toggle", *date)), Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(if is_collapsed { "Expand day" } else { "Collapse day" });
                    ui.painter().text(
                        toggle_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        if is_collapsed { "▸" } else { "▾" },
                        egui::FontId::proportional(14.0),
                        if toggle_response.hovered() {
                            palette.accent_line
                        } else {
                            palette.date_text
                        },
                    );

                    if !is_collapsed {
                        let mut child = ui.child_ui(
                            rect.shrink2(Vec2::new(6.0, 2.0)),
                            egui::Layout::top_down(egui::Align::Min),
                            None,
                        );
                        child.label(
                            RichText::new(date.format("%A").to_string())
                                .size(12.0)
                                .color(palette.text)
                                .strong(),
                        );
                        child.label(
                            RichText::new(format_day_header(*date))
                                .size(11.0)
                                .color(palette.date_text),
                        );
                    }

                    if let Some(action) =
                        header_action(*date, header_response.clicked(), toggle_response.clicked())
                    {
                        actions.push(action);
                    }
                }
            });
        });
}
