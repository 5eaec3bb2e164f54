use serde::{Deserialize, Serialize};

/// A single fixed place the forecast is requested for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone identifier, e.g. "Europe/London".
    pub timezone: &'static str,
}

impl Location {
    pub const YORK: Location = Location {
        label: "York, UK",
        latitude: 53.9614,
        longitude: -1.0739,
        timezone: "Europe/London",
    };
}

/// Flat, unit-normalised view of one observation.
///
/// Field names and units are the contract with the presentation layer; nothing
/// downstream should convert them again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherView {
    pub location: String,
    pub observed_at: String,
    pub summary: String,
    pub temperature_f: f64,
    pub wind_speed_mph: f64,
    /// Degrees.
    pub wind_direction: f64,
    pub apparent_c: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub gust_mph: f64,
    pub precipitation_mm: f64,
    pub cloud_cover_pct: f64,
    pub surface_pressure_hpa: f64,

    // Absent when the daily table has no rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_index_max: Option<f64>,
}
