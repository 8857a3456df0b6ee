use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Colours for the day header strip above the grid.
#[derive(Clone, Copy)]
pub(crate) struct DayStripPalette {
    pub strip_bg: Color32,
    pub strip_border: Color32,
    pub accent_line: Color32,
    pub cell_bg: Color32,
    pub selected_cell_bg: Color32,
    pub text: Color32,
    pub date_text: Color32,
}

impl DayStripPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            strip_bg: blend(theme.app_background, theme.calendar_background, 0.5),
            strip_border: theme.day_border,
            accent_line: theme.today_border,
            cell_bg: theme.day_background,
            selected_cell_bg: theme.today_background,
            text: theme.text_primary,
            date_text: theme.text_secondary,
        }
    }
}

/// Colours for the hour rows, day columns and activity blocks.
#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub selected_bg: Color32,
    pub collapsed_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub label_text: Color32,
    pub block_text: Color32,
    pub highlight_border: Color32,
    pub hover_overlay: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            hour_bg: blend(theme.calendar_background, theme.day_background, 0.4),
            regular_bg: theme.day_background,
            selected_bg: theme.today_background,
            collapsed_bg: blend(theme.day_background, theme.day_border, 0.6),
            hour_line: theme.day_border,
            divider: with_alpha(theme.day_border, 220),
            label_text: theme.text_secondary,
            block_text: Color32::WHITE,
            highlight_border: if theme.is_dark {
                Color32::from_rgb(250, 204, 21)
            } else {
                Color32::from_rgb(202, 138, 4)
            },
            hover_overlay: with_alpha(theme.today_border, if theme.is_dark { 80 } else { 50 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
