//! Typed shape of the Open-Meteo forecast payload.
//!
//! Both tables are column-oriented: `time` is the shared axis and every other
//! vector holds one value per entry of `time`. Decoding checks that invariant
//! instead of trimming or padding columns.

use serde::Deserialize;

use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub generationtime_ms: Option<f64>,
    pub utc_offset_seconds: Option<i32>,
    pub timezone: Option<String>,
    pub timezone_abbreviation: Option<String>,
    pub elevation: Option<f64>,

    pub hourly: HourlyTable,
    pub hourly_units: Option<HourlyUnits>,

    /// Missing entirely when no daily variables came back.
    #[serde(default)]
    pub daily: DailyTable,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyTable {
    /// Local wall-clock timestamps, `YYYY-MM-DDTHH:MM`.
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub apparent_temperature: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub weather_code: Vec<i32>,
    pub wind_speed_10m: Vec<f64>,
    pub wind_gusts_10m: Vec<f64>,
    pub wind_direction_10m: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub cloud_cover: Vec<f64>,
    pub surface_pressure: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DailyTable {
    /// Local dates, `YYYY-MM-DD`.
    pub time: Vec<String>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub uv_index_max: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
    pub wind_gusts_10m_max: Vec<f64>,
    pub wind_direction_10m_dominant: Vec<f64>,
}

/// Units reported for the hourly columns that get converted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HourlyUnits {
    pub temperature_2m: Option<String>,
    pub apparent_temperature: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_gusts_10m: Option<String>,
}

const CELSIUS: &str = "°C";
const KMH: &str = "km/h";

/// Turn an HTTP status and body into a checked forecast.
pub fn decode(status: u16, status_text: &str, body: &str) -> Result<ForecastResponse, DecodeError> {
    if !(200..300).contains(&status) {
        return Err(DecodeError::HttpStatus {
            status,
            status_text: status_text.to_string(),
        });
    }

    let forecast: ForecastResponse = serde_json::from_str(body)?;
    forecast.check_shape()?;

    Ok(forecast)
}

impl ForecastResponse {
    /// Non-empty hourly table, equal-length columns, expected units.
    pub fn check_shape(&self) -> Result<(), DecodeError> {
        if self.hourly.is_empty() {
            return Err(DecodeError::EmptyHourly);
        }

        self.hourly.check_lengths()?;
        self.daily.check_lengths()?;

        if let Some(units) = &self.hourly_units {
            units.check()?;
        }

        Ok(())
    }
}

impl HourlyTable {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    fn check_lengths(&self) -> Result<(), DecodeError> {
        check_columns(
            "hourly",
            self.time.len(),
            &[
                ("temperature_2m", self.temperature_2m.len()),
                ("apparent_temperature", self.apparent_temperature.len()),
                ("relative_humidity_2m", self.relative_humidity_2m.len()),
                ("weather_code", self.weather_code.len()),
                ("wind_speed_10m", self.wind_speed_10m.len()),
                ("wind_gusts_10m", self.wind_gusts_10m.len()),
                ("wind_direction_10m", self.wind_direction_10m.len()),
                ("precipitation", self.precipitation.len()),
                ("cloud_cover", self.cloud_cover.len()),
                ("surface_pressure", self.surface_pressure.len()),
            ],
        )
    }
}

impl DailyTable {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    fn check_lengths(&self) -> Result<(), DecodeError> {
        check_columns(
            "daily",
            self.time.len(),
            &[
                ("sunrise", self.sunrise.len()),
                ("sunset", self.sunset.len()),
                ("temperature_2m_max", self.temperature_2m_max.len()),
                ("temperature_2m_min", self.temperature_2m_min.len()),
                ("uv_index_max", self.uv_index_max.len()),
                ("precipitation_sum", self.precipitation_sum.len()),
                ("wind_speed_10m_max", self.wind_speed_10m_max.len()),
                ("wind_gusts_10m_max", self.wind_gusts_10m_max.len()),
                (
                    "wind_direction_10m_dominant",
                    self.wind_direction_10m_dominant.len(),
                ),
            ],
        )
    }
}

impl HourlyUnits {
    fn check(&self) -> Result<(), DecodeError> {
        let expected = [
            ("temperature_2m", &self.temperature_2m, CELSIUS),
            ("apparent_temperature", &self.apparent_temperature, CELSIUS),
            ("wind_speed_10m", &self.wind_speed_10m, KMH),
            ("wind_gusts_10m", &self.wind_gusts_10m, KMH),
        ];

        for (field, actual, unit) in expected {
            match actual {
                Some(actual) if actual != unit => {
                    return Err(DecodeError::UnexpectedUnit {
                        table: "hourly",
                        field,
                        expected: unit,
                        actual: actual.clone(),
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn check_columns(
    table: &'static str,
    expected: usize,
    columns: &[(&'static str, usize)],
) -> Result<(), DecodeError> {
    match columns.iter().find(|(_, actual)| *actual != expected) {
        Some(&(field, actual)) => Err(DecodeError::LengthMismatch {
            table,
            field,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}
