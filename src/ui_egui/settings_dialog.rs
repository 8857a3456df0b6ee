use crate::models::settings::{EmptyFilterPolicy, OverlapPolicy, Settings, TimeFormat};
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use egui::{Color32, RichText};

const LABEL_WIDTH: f32 = 180.0;

pub struct SettingsDialogResponse {
    pub saved: bool,
}

/// Render the settings dialog over a draft copy of the settings.
///
/// The draft is written to the database only when Save is clicked.
pub fn render_settings_dialog(
    ctx: &egui::Context,
    settings: &mut Settings,
    database: &Database,
    show_dialog: &mut bool,
    error_message: &mut Option<String>,
) -> SettingsDialogResponse {
    let mut saved = false;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Settings")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(error) = error_message.as_ref() {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            ui.heading("Calendar");
            ui.add_space(4.0);

            labelled_row(ui, "First day of week:", |ui| {
                egui::ComboBox::from_id_source("first_day_combo")
                    .selected_text(weekday_name(settings.first_day_of_week))
                    .show_ui(ui, |ui| {
                        for day in 0..7u8 {
                            ui.selectable_value(&mut settings.first_day_of_week, day, weekday_name(day));
                        }
                    });
            });

            labelled_row(ui, "Time format:", |ui| {
                egui::ComboBox::from_id_source("time_format_combo")
                    .selected_text(time_format_label(settings.time_format))
                    .show_ui(ui, |ui| {
                        for format in [TimeFormat::TwelveHour, TimeFormat::TwentyFourHour] {
                            ui.selectable_value(&mut settings.time_format, format, time_format_label(format));
                        }
                    });
            });

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Layout");
            ui.add_space(4.0);

            labelled_row(ui, "Overlapping activities:", |ui| {
                egui::ComboBox::from_id_source("overlap_policy_combo")
                    .selected_text(overlap_policy_label(settings.overlap_policy))
                    .show_ui(ui, |ui| {
                        for policy in [OverlapPolicy::LastSeen, OverlapPolicy::MonotonicMax] {
                            ui.selectable_value(&mut settings.overlap_policy, policy, overlap_policy_label(policy));
                        }
                    });
            });

            labelled_row(ui, "No category ticked:", |ui| {
                egui::ComboBox::from_id_source("empty_filter_combo")
                    .selected_text(empty_filter_label(settings.empty_filter_policy))
                    .show_ui(ui, |ui| {
                        for policy in [EmptyFilterPolicy::ShowNone, EmptyFilterPolicy::ShowAll] {
                            ui.selectable_value(
                                &mut settings.empty_filter_policy,
                                policy,
                                empty_filter_label(policy),
                            );
                        }
                    });
            });

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Appearance");
            ui.add_space(4.0);

            labelled_row(ui, "Theme:", |ui| {
                ui.add_enabled_ui(!settings.use_system_theme, |ui| {
                    egui::ComboBox::from_id_source("theme_combo")
                        .selected_text(theme_label(&settings.theme))
                        .show_ui(ui, |ui| {
                            for theme in ["light", "dark"] {
                                ui.selectable_value(&mut settings.theme, theme.to_string(), theme_label(theme));
                            }
                        });
                });
            });
            ui.horizontal(|ui| {
                ui.add_space(LABEL_WIDTH);
                ui.checkbox(&mut settings.use_system_theme, "Follow system theme");
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    match save_settings(settings, database) {
                        Ok(()) => {
                            *error_message = None;
                            *show_dialog = false;
                            saved = true;
                        }
                        Err(e) => *error_message = Some(e),
                    }
                }

                if ui.button("✖ Cancel").clicked() {
                    *error_message = None;
                    *show_dialog = false;
                }

                ui.add_space(20.0);

                if ui
                    .button(RichText::new("↺ Reset to Defaults").color(Color32::LIGHT_BLUE))
                    .clicked()
                {
                    *settings = Settings {
                        layout_mode: settings.layout_mode,
                        ..Settings::default()
                    };
                }
            });
        });

    if !dialog_open {
        *error_message = None;
        *show_dialog = false;
    }

    SettingsDialogResponse { saved }
}

fn labelled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::Vec2::new(LABEL_WIDTH, 20.0),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.label(label);
            },
        );
        add_contents(ui);
    });
}

/// Validate and write the settings row.
fn save_settings(settings: &Settings, database: &Database) -> Result<(), String> {
    settings.validate()?;
    SettingsService::new(database)
        .update(settings)
        .map_err(|e| format!("Failed to save settings: {}", e))
}

/// Convert weekday number to name
fn weekday_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

fn time_format_label(format: TimeFormat) -> &'static str {
    match format {
        TimeFormat::TwelveHour => "12-hour",
        TimeFormat::TwentyFourHour => "24-hour",
    }
}

fn overlap_policy_label(policy: OverlapPolicy) -> &'static str {
    match policy {
        OverlapPolicy::LastSeen => "Stack below previous activity",
        OverlapPolicy::MonotonicMax => "Stack below latest end so far",
    }
}

fn empty_filter_label(policy: EmptyFilterPolicy) -> &'static str {
    match policy {
        EmptyFilterPolicy::ShowNone => "Show nothing",
        EmptyFilterPolicy::ShowAll => "Show everything",
    }
}

fn theme_label(theme: &str) -> &'static str {
    if theme.eq_ignore_ascii_case("dark") {
        "Dark"
    } else {
        "Light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_save_settings_persists_policies() {
        let db = setup_db();
        let settings = Settings {
            first_day_of_week: 0,
            time_format: TimeFormat::TwentyFourHour,
            overlap_policy: OverlapPolicy::MonotonicMax,
            empty_filter_policy: EmptyFilterPolicy::ShowAll,
            theme: "dark".to_string(),
            ..Settings::default()
        };

        save_settings(&settings, &db).unwrap();

        let stored = SettingsService::new(&db).get().unwrap();
        assert_eq!(stored.first_day_of_week, 0);
        assert_eq!(stored.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(stored.overlap_policy, OverlapPolicy::MonotonicMax);
        assert_eq!(stored.empty_filter_policy, EmptyFilterPolicy::ShowAll);
        assert!(stored.is_dark());
    }

    #[test]
    fn test_save_settings_rejects_invalid_values() {
        let db = setup_db();
        let settings = Settings {
            first_day_of_week: 9,
            ..Settings::default()
        };

        let err = save_settings(&settings, &db).unwrap_err();
        assert!(err.contains("first_day_of_week"));
        assert_eq!(SettingsService::new(&db).get().unwrap().first_day_of_week, 1);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(6), "Saturday");
        assert_eq!(weekday_name(7), "Unknown");
    }
}
