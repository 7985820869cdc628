//! Forecast domain - city validation, upstream payload types, aggregation

mod payload;
mod provider;
mod report;
mod request;
mod summary;

pub use payload::{DailyForecast, ForecastPayload, GeocodingResponse, GeocodingResult};
pub use provider::{FetchedForecast, ForecastProvider, Location};
pub use report::{WeatherData, WeatherReport};
pub use request::CityName;
pub use summary::ForecastSummary;

#[cfg(test)]
pub use provider::MockForecastProvider;
