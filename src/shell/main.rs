// Composition root.
//
// Responsibilities
// - Read config from the environment (and a `.env` file when present).
// - Instantiate the file backed week store and wire it into the tracker.
// - Print the view of the configured week, or of the current one.

use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt};

use weekly_income::adapters::json_file::json_file_week_store::JsonFileWeekStore;
use weekly_income::application::tracker::WeeklyTracker;
use weekly_income::config::TrackerConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = TrackerConfig::from_env()?;
    let store = JsonFileWeekStore::open(config.data_dir.clone())?;
    let date = config
        .view_date
        .unwrap_or_else(|| Local::now().date_naive());

    let tracker = WeeklyTracker::open(store, date)?;
    tracing::info!(
        week = %tracker.week_key(),
        records = tracker.records().len(),
        data_dir = %config.data_dir.display(),
        "week loaded"
    );

    print!("{}", tracker.view());
    Ok(())
}
