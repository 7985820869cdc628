//! Infrastructure services

mod forecast_service;

pub use forecast_service::ForecastService;
