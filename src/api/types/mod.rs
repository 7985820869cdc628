//! API request and response types

pub mod error;
pub mod weather;

pub use error::{ApiError, ApiErrorBody};
pub use weather::WeatherResponse;
