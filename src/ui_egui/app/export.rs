use super::TripCalendarApp;
use crate::services::export::PrintableExport;
use std::path::Path;

/// Printable snapshot of the current week.
impl TripCalendarApp {
    pub(super) fn export_printable_view(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Printable Week")
            .set_file_name("weekly_view.html")
            .add_filter("HTML files", &["html"])
            .save_file()
        else {
            return;
        };

        let result = PrintableExport::render_html(
            &self.view.window,
            &self.view.data,
            &self.view.filter,
            &self.view.summary,
            self.view.layout_mode,
        )
        .and_then(|export| export.write_to(&path))
        .and_then(|_| open_in_browser(&path));

        match result {
            Ok(()) => self.toast_manager.success("Printable view opened"),
            Err(e) => {
                log::error!("Failed to export printable view: {}", e);
                self.toast_manager.error(format!("Export failed: {}", e));
            }
        }
    }
}

fn open_in_browser(path: &Path) -> anyhow::Result<()> {
    let target = path.to_string_lossy();
    webbrowser::open(&target)
        .map_err(|e| anyhow::anyhow!("Could not open {} in a browser: {}", target, e))
}
