use super::TripCalendarApp;
use crate::services::loader::LoadOutcome;
use chrono::Local;

impl TripCalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.view.previous_week();
        self.request_week();
    }

    pub(super) fn navigate_next(&mut self) {
        self.view.next_week();
        self.request_week();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.view.go_to(Local::now().date_naive());
        self.request_week();
    }

    /// Fetch the current range; any response still in flight is superseded.
    pub(super) fn request_week(&mut self) {
        let range = self.view.fetch_range();
        self.pending_range = Some(range);
        self.week_loader.request(range, &self.view.filter);
    }

    pub(super) fn open_detail(&mut self, id: i64) {
        self.detail_loader.request(id);
    }

    pub(super) fn poll_week_loader(&mut self) {
        match self.week_loader.poll() {
            Some(LoadOutcome::Loaded(data)) => {
                if let Some(range) = self.pending_range {
                    log::info!(
                        "Loaded {} days of activities ({} to {})",
                        data.len(),
                        range.start,
                        range.end
                    );
                    self.view.accept_data(range, data);
                }
                self.load_error = None;
            }
            Some(LoadOutcome::Failed(message)) => {
                // Keep showing the last good week.
                self.toast_manager
                    .error(format!("Failed to load activities: {}", message));
                self.load_error = Some(message);
            }
            None => {}
        }
    }

    pub(super) fn poll_detail_loader(&mut self) {
        match self.detail_loader.poll() {
            Some(LoadOutcome::Loaded(activity)) => self.detail = Some(activity),
            Some(LoadOutcome::Failed(message)) => {
                self.toast_manager
                    .error(format!("Failed to load activity details: {}", message));
            }
            None => {}
        }
    }

    pub(super) fn is_loading(&self) -> bool {
        self.week_loader.is_loading() || self.detail_loader.is_loading()
    }
}
