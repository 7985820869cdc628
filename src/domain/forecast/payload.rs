use serde::Deserialize;

/// Response shape of the Open-Meteo geocoding API (`/v1/search`).
///
/// The API omits the `results` key entirely when nothing matches, so it
/// defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    #[serde(default = "default_city_name")]
    pub name: String,
    /// First-level administrative area (state or province).
    #[serde(default)]
    pub admin1: String,
    pub latitude: f64,
    pub longitude: f64,
}

fn default_city_name() -> String {
    "Unknown".to_string()
}

/// Response shape of the Open-Meteo forecast API (`/v1/forecast`), reduced to
/// the fields this service consumes. A payload missing the `daily` block or
/// any of its required arrays fails deserialization, which callers surface as
/// a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub daily: DailyForecast,
}

fn default_timezone() -> String {
    "auto".to_string()
}

/// Parallel per-day arrays as returned by Open-Meteo.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
}
