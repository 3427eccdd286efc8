pub mod dates;
pub mod error;
pub mod listing;
pub mod loader;
pub mod models;
pub mod render;
pub mod settings;
pub mod site;
pub mod validation;

use tracing::info;

use crate::error::SiteError;
use crate::settings::Settings;
use crate::site::BuildSummary;

pub fn run() -> Result<BuildSummary, SiteError> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let as_of = settings
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    info!(
        input = %settings.input.display(),
        output = %settings.output_dir.display(),
        %as_of,
        "generating training index"
    );
    site::build(&settings, as_of)
}
