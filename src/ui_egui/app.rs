mod context;
mod detail;
mod export;
mod imports;
mod lifecycle;
mod navigation;
mod settings;
mod sidebar;
mod state;
mod toast;
mod top_bar;

pub use self::context::AppContext;
use self::state::WeekViewState;
use self::toast::ToastManager;
use crate::models::activity::Activity;
use crate::models::settings::Settings;
use crate::models::week::FetchRange;
use crate::services::loader::{DetailLoader, WeekLoader};
use crate::ui_egui::theme::CalendarTheme;

pub struct TripCalendarApp {
    /// Shared access to the settings database, the activity source and config
    context: AppContext,
    /// Persisted view preferences
    settings: Settings,
    /// Draft edited by the settings dialog while it is open
    settings_draft: Settings,
    show_settings_dialog: bool,
    settings_error: Option<String>,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Week window, filters and the last loaded data
    view: WeekViewState,
    week_loader: WeekLoader,
    /// Range of the most recent weekly request
    pending_range: Option<FetchRange>,
    detail_loader: DetailLoader,
    /// Activity shown in the detail window
    detail: Option<Activity>,
    /// Last weekly load failure, shown above the grid until the next success
    load_error: Option<String>,
    toast_manager: ToastManager,
}

impl eframe::App for TripCalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
