// Trip Calendar Application
// Main entry point

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use trip_calendar::services::activity::ActivityService;
use trip_calendar::services::config::{AppConfig, DataSourceKind};
use trip_calendar::services::database::Database;
use trip_calendar::services::source::{ActivitySource, HttpActivitySource, LocalActivitySource};
use trip_calendar::ui_egui::{AppContext, TripCalendarApp};

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Trip Calendar");

    let config = AppConfig::load_or_default(None);
    let db_path = config.resolve_database_path()?;
    let db_path = db_path.to_string_lossy().to_string();
    log::info!("Using database at {}", db_path);

    let database = open_database(&db_path)?;
    if config.data_source == DataSourceKind::Local {
        let inserted = ActivityService::new(database.connection()).seed_sample_trip()?;
        if inserted > 0 {
            log::info!("Seeded {} sample activities", inserted);
        }
    }

    // Leaked for the 'static lifetime eframe's app requires
    let database: &'static Database = Box::leak(Box::new(database));
    let source = build_source(&config, &db_path)?;
    let context = AppContext::new(database, source, config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Trip Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Trip Calendar",
        options,
        Box::new(|cc| Ok(Box::new(TripCalendarApp::new(cc, context)))),
    )
    .map_err(|e| anyhow!("Failed to run the calendar window: {}", e))
}

fn open_database(path: &str) -> Result<Database> {
    let db = Database::new(path).context("Failed to create database connection")?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;
    Ok(db)
}

/// Local mode reads activities through its own connection so fetch workers
/// never contend with the UI thread's settings connection.
fn build_source(config: &AppConfig, db_path: &str) -> Result<Arc<dyn ActivitySource>> {
    match config.data_source {
        DataSourceKind::Local => {
            let db = open_database(db_path)?;
            Ok(Arc::new(LocalActivitySource::new(db)))
        }
        DataSourceKind::Http => {
            log::info!("Fetching activities from {}", config.server_url);
            let source = HttpActivitySource::new(&config.server_url, config.request_timeout())?;
            Ok(Arc::new(source))
        }
    }
}
