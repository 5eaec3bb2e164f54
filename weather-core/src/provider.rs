use crate::{
    Config, ForecastRequest, Location, WeatherView,
    decode::ForecastResponse,
    error::WeatherError,
    project::project,
    provider::open_meteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Source of raw forecasts. Implementations do the network call and decoding,
/// nothing else.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, WeatherError>;
}

/// Build the Open-Meteo provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let provider = match config.timeout() {
        Some(timeout) => OpenMeteoProvider::with_timeout(config.forecast_url(), timeout)?,
        None => OpenMeteoProvider::with_base_url(config.forecast_url()),
    };

    Ok(Box::new(provider))
}

/// Request, decode and project the current view for `location`.
///
/// Each call is independent; errors from the provider come back unchanged.
pub async fn fetch_weather<P>(provider: &P, location: &Location) -> Result<WeatherView, WeatherError>
where
    P: WeatherProvider + ?Sized,
{
    let request = ForecastRequest::new(*location);
    let forecast = provider.fetch_forecast(&request).await?;

    Ok(project(location, &forecast)?)
}
