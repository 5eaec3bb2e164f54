//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The Open-Meteo request for the fixed York, UK location
//! - Decoding of the hourly/daily forecast tables
//! - Projection onto a flat, display-ready [`WeatherView`]
//! - Configuration (endpoint, timeout) and the provider abstraction
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod project;
pub mod provider;
pub mod request;
pub mod units;
pub mod weather_code;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use decode::{ForecastResponse, decode};
pub use error::{DecodeError, WeatherError};
pub use model::{Location, WeatherView};
pub use project::project;
pub use provider::{
    WeatherProvider, fetch_weather, open_meteo::OpenMeteoProvider, provider_from_config,
};
pub use request::ForecastRequest;
