//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod forecast;

pub use cache::{Cache, CacheExt};
pub use error::DomainError;
pub use forecast::{
    CityName, DailyForecast, FetchedForecast, ForecastPayload, ForecastProvider, ForecastSummary,
    GeocodingResponse, GeocodingResult, Location, WeatherData, WeatherReport,
};
