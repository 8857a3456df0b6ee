use std::sync::Arc;

use super::context::AppContext;
use super::state::WeekViewState;
use super::toast::ToastManager;
use super::TripCalendarApp;
use crate::models::settings::{LayoutMode, Settings};
use crate::services::layout::{apply_collapse_actions, layout_day_columns, layout_hourly, GridAction};
use crate::services::loader::{DetailLoader, Notifier, WeekLoader};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::day_columns::DayColumnsView;
use crate::ui_egui::views::hourly_grid::HourlyGridView;
use crate::ui_egui::views::summary_bar::show_summary;
use crate::ui_egui::views::GridStyle;
use chrono::Local;

impl TripCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, context: AppContext) -> Self {
        let settings = load_settings_or_default(&context.settings_service());
        log::info!(
            "Loaded settings: layout_mode={}, overlap_policy={}, empty_filter_policy={}",
            settings.layout_mode,
            settings.overlap_policy,
            settings.empty_filter_policy
        );

        let active_theme = CalendarTheme::for_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        // Worker threads wake the UI as soon as a response lands.
        let repaint_ctx = cc.egui_ctx.clone();
        let notifier: Notifier = Arc::new(move || repaint_ctx.request_repaint());

        let today = Local::now().date_naive();
        let view = WeekViewState::new(today, &settings, context.config().trip_range());
        let week_loader = WeekLoader::new(context.source()).with_notifier(Arc::clone(&notifier));
        let detail_loader = DetailLoader::new(context.source()).with_notifier(notifier);

        let mut app = Self {
            context,
            settings_draft: settings.clone(),
            settings,
            show_settings_dialog: false,
            settings_error: None,
            active_theme,
            view,
            week_loader,
            pending_range: None,
            detail_loader,
            detail: None,
            load_error: None,
            toast_manager: ToastManager::new(),
        };

        app.request_week();
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_file_drops(ctx);
        self.poll_week_loader();
        self.poll_detail_loader();

        self.render_top_bar(ctx);
        self.render_sidebar(ctx);
        self.render_summary_panel(ctx);
        self.render_main_panel(ctx);
        self.render_detail_window(ctx);
        self.render_settings_window(ctx);

        // Render toast notifications (last, so they appear on top)
        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_settings();
    }

    pub(super) fn persist_settings(&mut self) {
        self.settings.layout_mode = self.view.layout_mode;
        if let Err(e) = self.context.settings_service().update(&self.settings) {
            log::error!("Failed to save settings: {}", e);
        }
    }

    pub(super) fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.view.layout_mode == mode {
            return;
        }
        self.view.set_layout_mode(mode);
        self.persist_settings();
    }

    fn render_summary_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("summary_panel")
            .resizable(false)
            .show(ctx, |ui| {
                show_summary(ui, &self.view.summary, &self.active_theme);
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(error) = &self.load_error {
                    ui.colored_label(
                        egui::Color32::from_rgb(200, 60, 60),
                        format!("Could not load activities: {}", error),
                    );
                    ui.add_space(4.0);
                }

                let days = self.view.display_days();
                let style = GridStyle {
                    time_format: self.settings.time_format,
                    highlight_keyword: self.context.config().highlight_keyword.clone(),
                    selected_day: self.view.selected_day,
                };

                match self.view.layout_mode {
                    LayoutMode::Hourly => {
                        let grid = layout_hourly(&days, &self.view.data, &self.view.filter);
                        HourlyGridView::show(ui, &grid, &self.view.collapsed, &style, &self.active_theme)
                    }
                    LayoutMode::DayColumn => {
                        let columns = layout_day_columns(
                            &days,
                            &self.view.data,
                            &self.view.filter,
                            self.view.overlap_policy,
                        );
                        DayColumnsView::show(ui, &columns, &self.view.collapsed, &style, &self.active_theme)
                    }
                }
            })
            .inner;

        self.dispatch_grid_actions(&actions);
    }

    /// Single dispatch point for everything the grid reported this frame.
    fn dispatch_grid_actions(&mut self, actions: &[GridAction]) {
        for action in apply_collapse_actions(actions, &mut self.view.collapsed) {
            match action {
                GridAction::OpenDetail(id) => self.open_detail(id),
                GridAction::SelectDay(date) => {
                    self.view.selected_day = if self.view.selected_day == Some(date) {
                        None
                    } else {
                        Some(date)
                    };
                }
                GridAction::ToggleCollapse(_) => {}
            }
        }
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    }
}
