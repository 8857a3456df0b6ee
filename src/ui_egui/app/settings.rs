use super::TripCalendarApp;
use crate::ui_egui::settings_dialog::render_settings_dialog;
use crate::ui_egui::theme::CalendarTheme;

impl TripCalendarApp {
    pub(super) fn open_settings_dialog(&mut self) {
        self.settings.layout_mode = self.view.layout_mode;
        self.settings_draft = self.settings.clone();
        self.settings_error = None;
        self.show_settings_dialog = true;
    }

    pub(super) fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings_dialog {
            return;
        }

        // The top bar can still switch layouts while the dialog is open.
        self.settings_draft.layout_mode = self.view.layout_mode;

        let response = render_settings_dialog(
            ctx,
            &mut self.settings_draft,
            self.context.database(),
            &mut self.show_settings_dialog,
            &mut self.settings_error,
        );

        if response.saved {
            self.apply_saved_settings(ctx);
        }
    }

    fn apply_saved_settings(&mut self, ctx: &egui::Context) {
        self.settings = self.settings_draft.clone();
        log::info!(
            "Settings saved: overlap_policy={}, empty_filter_policy={}, first_day_of_week={}",
            self.settings.overlap_policy,
            self.settings.empty_filter_policy,
            self.settings.first_day_of_week
        );

        self.active_theme = CalendarTheme::for_settings(&self.settings);
        self.active_theme.apply_to_context(ctx);

        if self.view.apply_settings(&self.settings) {
            self.request_week();
        }
        self.toast_manager.success("Settings saved");
    }
}
