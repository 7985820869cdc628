//! Upstream weather data sources

mod open_meteo;

pub use open_meteo::{OpenMeteoClient, DEFAULT_FORECAST_BASE_URL, DEFAULT_GEOCODING_BASE_URL};
