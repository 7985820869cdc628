//! Fetch command - one-shot forecast lookup without starting the server

use clap::Args;
use tracing::info;

use crate::api::types::WeatherResponse;
use crate::config::AppConfig;
use crate::domain::CityName;
use crate::infrastructure::logging;

/// Arguments for the fetch command
#[derive(Args, Clone)]
pub struct FetchArgs {
    /// City to look up (defaults to the configured city)
    pub city: Option<String>,
}

/// Fetch a forecast once and print it as pretty JSON
pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;

    let raw_city = args.city.unwrap_or_else(|| config.weather.default_city.clone());
    let city = CityName::parse(&raw_city)?;

    info!(city = %city, "Fetching forecast");

    let report = state.weather_service.get_weather(&city).await?;
    let response = WeatherResponse::from_report(report);

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
