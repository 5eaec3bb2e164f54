//! Projection of a decoded forecast onto the flat [`WeatherView`].

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::{
    decode::ForecastResponse,
    error::DecodeError,
    model::{Location, WeatherView},
    units::{celsius_to_fahrenheit, kmh_to_mph, round_tenth},
    weather_code,
};

/// Hourly row standing in for "now": around midday of the first day.
pub const OBSERVATION_HOUR: usize = 12;

const UPSTREAM_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Display format for timestamps in the view, rendered in the runtime's local zone.
pub const DISPLAY_FORMAT: &str = "%a %d %b %Y, %H:%M:%S %:z";

/// `min(12, len - 1)`.
pub fn hourly_index(len: usize) -> usize {
    OBSERVATION_HOUR.min(len.saturating_sub(1))
}

/// Build the view for `location` from an already decoded forecast.
///
/// The shape checks done by [`crate::decode::decode`] are repeated so a
/// hand-built forecast cannot index out of bounds.
pub fn project(location: &Location, forecast: &ForecastResponse) -> Result<WeatherView, DecodeError> {
    forecast.check_shape()?;

    let tz: Tz = location
        .timezone
        .parse()
        .map_err(|_| DecodeError::UnknownTimezone(location.timezone.to_string()))?;

    let hourly = &forecast.hourly;
    let i = hourly_index(hourly.len());

    let daily = &forecast.daily;
    let today = (!daily.is_empty()).then_some(0);

    Ok(WeatherView {
        location: location.label.to_string(),
        observed_at: display_timestamp(&hourly.time[i], tz)?,
        summary: weather_code::describe(hourly.weather_code[i]).into_owned(),
        temperature_f: round_tenth(celsius_to_fahrenheit(hourly.temperature_2m[i])),
        wind_speed_mph: round_tenth(kmh_to_mph(hourly.wind_speed_10m[i])),
        wind_direction: hourly.wind_direction_10m[i],
        apparent_c: hourly.apparent_temperature[i],
        humidity: hourly.relative_humidity_2m[i],
        gust_mph: round_tenth(kmh_to_mph(hourly.wind_gusts_10m[i])),
        precipitation_mm: hourly.precipitation[i],
        cloud_cover_pct: hourly.cloud_cover[i],
        surface_pressure_hpa: hourly.surface_pressure[i],
        sunrise: today
            .map(|d| display_timestamp(&daily.sunrise[d], tz))
            .transpose()?,
        sunset: today
            .map(|d| display_timestamp(&daily.sunset[d], tz))
            .transpose()?,
        uv_index_max: today.map(|d| daily.uv_index_max[d]),
    })
}

/// Render an upstream wall-clock timestamp (local to `tz`) in the runtime's zone.
///
/// The result depends on the machine's timezone; treat it as opaque and use
/// [`parse_display_timestamp`] to recover the instant.
pub fn display_timestamp(raw: &str, tz: Tz) -> Result<String, DecodeError> {
    let instant = parse_upstream(raw, tz)?;
    Ok(instant.with_timezone(&Local).format(DISPLAY_FORMAT).to_string())
}

pub fn parse_display_timestamp(display: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(display, DISPLAY_FORMAT).ok()
}

fn parse_upstream(raw: &str, tz: Tz) -> Result<DateTime<Tz>, DecodeError> {
    let naive = UPSTREAM_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| DecodeError::InvalidTimestamp(raw.to_string()))?;

    // Ambiguous (clocks back) picks the first occurrence; skipped (clocks
    // forward) lands an hour later.
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .ok_or_else(|| DecodeError::InvalidTimestamp(raw.to_string()))
}
