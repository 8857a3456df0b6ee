use egui::{Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke};

use super::palette::{with_alpha, TimeGridPalette};
use super::GridStyle;
use crate::models::activity::Activity;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{format_price, format_time_range};

/// Draw one activity block and report whether it was clicked.
///
/// `continued` marks the fragment of an hourly block that started in an
/// earlier row; it is drawn dimmer and without the time line.
pub(super) fn draw_activity_block(
    ui: &mut egui::Ui,
    rect: Rect,
    clip: Rect,
    activity: &Activity,
    id_salt: impl std::hash::Hash,
    continued: bool,
    style: &GridStyle,
    palette: &TimeGridPalette,
) -> bool {
    let visible = rect.intersect(clip);
    if !visible.is_positive() {
        return false;
    }

    let base = CalendarTheme::category_color(&activity.category);
    let fill = if continued { with_alpha(base, 200) } else { base };
    let painter = ui.painter().with_clip_rect(clip);

    painter.rect_filled(rect, egui::Rounding::same(4.0), fill);

    let highlighted = style
        .highlight_keyword
        .as_deref()
        .map(|keyword| activity.location_mentions(keyword))
        .unwrap_or(false);
    if highlighted {
        painter.rect_stroke(
            rect.shrink(1.0),
            egui::Rounding::same(4.0),
            Stroke::new(2.0, palette.highlight_border),
        );
    }

    let text_painter = painter.with_clip_rect(visible.shrink(2.0));
    let mut text = activity.title.clone();
    if !continued {
        text.push('\n');
        text.push_str(&format_time_range(
            activity.start_time,
            activity.end_time,
            style.time_format,
        ));
    }
    let layout_job = egui::text::LayoutJob::simple(
        text,
        FontId::proportional(11.0),
        palette.block_text,
        (rect.width() - 8.0).max(1.0),
    );
    let galley = ui.fonts(|f| f.layout_job(layout_job));
    text_painter.galley(
        Pos2::new(rect.left() + 4.0, rect.top() + 3.0),
        galley,
        palette.block_text,
    );

    let response = ui
        .interact(visible, ui.id().with(id_salt), Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .on_hover_ui(|ui| {
            ui.label(egui::RichText::new(&activity.title).strong());
            ui.label(format!("Location: {}", activity.location));
            ui.label(format!("Category: {}", activity.category));
            ui.label(format!("Price: {}", format_price(activity.price)));
        });

    if response.hovered() {
        painter.rect_filled(rect, egui::Rounding::same(4.0), palette.hover_overlay);
    }

    response.clicked()
}

/// Narrow placeholder drawn for every cell of a collapsed day.
pub(super) fn draw_collapsed_cell(ui: &egui::Ui, rect: Rect, count: usize, palette: &TimeGridPalette) {
    ui.painter().rect_filled(rect, egui::Rounding::ZERO, palette.collapsed_bg);
    if count > 0 {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            count.to_string(),
            FontId::proportional(10.0),
            with_alpha(Color32::GRAY, 220),
        );
    }
}
