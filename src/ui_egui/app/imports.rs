use std::path::{Path, PathBuf};

use super::TripCalendarApp;
use crate::services::activity::{parse_bulk_json, ActivityService};

impl TripCalendarApp {
    pub(super) fn handle_file_drops(&mut self, ctx: &egui::Context) {
        // Collect files outside of ctx.input to avoid borrow issues
        let dropped_files: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        for path in dropped_files {
            if path.extension().map_or(true, |ext| !ext.eq_ignore_ascii_case("json")) {
                log::warn!("Ignoring dropped file {:?}: not a JSON activity list", path);
                continue;
            }
            self.import_activities(&path, "drag-and-drop");
        }
    }

    pub(super) fn import_from_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Import Activities")
            .add_filter("Activity lists", &["json"])
            .pick_file()
        {
            self.import_activities(&path, "file dialog");
        }
    }

    /// Bulk-insert a `{"activities": [...]}` file into the local store.
    /// All-or-nothing: a single bad entry rejects the whole file.
    fn import_activities(&mut self, path: &Path, source_label: &str) {
        if !self.context.is_local() {
            self.toast_manager
                .error("Importing is only available with the local activity store");
            return;
        }

        let result = std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|json| parse_bulk_json(&json))
            .and_then(|inputs| ActivityService::new(self.context.database().connection()).bulk_add(&inputs));

        match result {
            Ok(count) => {
                log::info!("Imported {} activities from {:?} via {}", count, path, source_label);
                self.toast_manager.success(format!("Imported {} activities", count));
                self.request_week();
            }
            Err(e) => {
                log::error!("Failed to import {:?}: {:#}", path, e);
                self.toast_manager.error(format!("Import failed: {}", e));
            }
        }
    }
}
