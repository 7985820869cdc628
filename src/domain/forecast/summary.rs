use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::forecast::payload::DailyForecast;

/// Aggregated view over a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub high_temp_f: f64,
    pub low_temp_f: f64,
    /// Mean of the daily highs, rounded to one decimal place.
    pub avg_high_temp_f: f64,
    pub days: usize,
    pub total_precipitation_inches: f64,
    pub avg_wind_mph: f64,
}

impl ForecastSummary {
    /// Validates the parallel daily arrays and reduces them to a summary.
    ///
    /// All arrays must be non-empty and of equal length; anything else is a
    /// validation failure, never a panic.
    pub fn from_daily(daily: &DailyForecast) -> Result<Self, DomainError> {
        let days = daily.time.len();
        if days == 0 {
            return Err(DomainError::validation("daily forecast data is empty"));
        }
        for (field, len) in [
            ("temperature_2m_max", daily.temperature_2m_max.len()),
            ("temperature_2m_min", daily.temperature_2m_min.len()),
            ("precipitation_sum", daily.precipitation_sum.len()),
            ("wind_speed_10m_max", daily.wind_speed_10m_max.len()),
        ] {
            if len != days {
                return Err(DomainError::validation(format!(
                    "daily field '{field}' has {len} entries, expected {days}"
                )));
            }
        }

        let high_temp_f = daily
            .temperature_2m_max
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let low_temp_f = daily
            .temperature_2m_min
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let avg_high = daily.temperature_2m_max.iter().sum::<f64>() / days as f64;
        let avg_wind = daily.wind_speed_10m_max.iter().sum::<f64>() / days as f64;

        Ok(Self {
            high_temp_f,
            low_temp_f,
            avg_high_temp_f: round_to_tenth(avg_high),
            days,
            total_precipitation_inches: daily.precipitation_sum.iter().sum(),
            avg_wind_mph: avg_wind,
        })
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
