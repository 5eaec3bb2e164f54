//! Synthetic forecasts shared by the unit tests.

use chrono::{Duration, NaiveDate};
use serde_json::{Value, json};

use crate::decode::{DailyTable, ForecastResponse, HourlyTable, HourlyUnits};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn column(rows: usize, value: impl Fn(f64) -> f64) -> Vec<f64> {
    (0..rows).map(|i| value(i as f64)).collect()
}

/// `hours` hourly rows from 2025-06-01T00:00 and `days` daily rows.
pub(crate) fn sample_forecast(hours: usize, days: usize) -> ForecastResponse {
    let midnight = start().and_hms_opt(0, 0, 0).unwrap();
    let day = |d: usize| start() + Duration::days(d as i64);

    ForecastResponse {
        latitude: Some(53.96),
        longitude: Some(-1.08),
        generationtime_ms: Some(0.05),
        utc_offset_seconds: Some(3600),
        timezone: Some("Europe/London".into()),
        timezone_abbreviation: Some("BST".into()),
        elevation: Some(19.0),
        hourly: HourlyTable {
            time: (0..hours)
                .map(|i| {
                    (midnight + Duration::hours(i as i64))
                        .format("%Y-%m-%dT%H:%M")
                        .to_string()
                })
                .collect(),
            temperature_2m: column(hours, |i| 10.0 + i * 0.5),
            apparent_temperature: column(hours, |i| 9.0 + i * 0.5),
            relative_humidity_2m: column(hours, |i| 60.0 + i),
            weather_code: (0..hours).map(|i| (i % 4) as i32).collect(),
            wind_speed_10m: column(hours, |i| 8.0 + i),
            wind_gusts_10m: column(hours, |i| 15.0 + i),
            wind_direction_10m: column(hours, |i| 200.0 + i),
            precipitation: column(hours, |i| i / 10.0),
            cloud_cover: column(hours, |i| 50.0 + i),
            surface_pressure: column(hours, |i| 1010.0 + i * 0.25),
        },
        hourly_units: Some(HourlyUnits {
            temperature_2m: Some("°C".into()),
            apparent_temperature: Some("°C".into()),
            wind_speed_10m: Some("km/h".into()),
            wind_gusts_10m: Some("km/h".into()),
        }),
        daily: DailyTable {
            time: (0..days).map(|d| day(d).format("%Y-%m-%d").to_string()).collect(),
            sunrise: (0..days)
                .map(|d| format!("{}T04:38", day(d).format("%Y-%m-%d")))
                .collect(),
            sunset: (0..days)
                .map(|d| format!("{}T21:34", day(d).format("%Y-%m-%d")))
                .collect(),
            temperature_2m_max: column(days, |d| 20.0 + d),
            temperature_2m_min: column(days, |d| 10.0 + d),
            uv_index_max: column(days, |d| 5.5 + d),
            precipitation_sum: column(days, |_| 1.0),
            wind_speed_10m_max: column(days, |_| 25.0),
            wind_gusts_10m_max: column(days, |_| 40.0),
            wind_direction_10m_dominant: column(days, |_| 240.0),
        },
    }
}

/// The JSON body Open-Meteo would send for `sample_forecast(hours, days)`.
pub(crate) fn payload(hours: usize, days: usize) -> Value {
    let f = sample_forecast(hours, days);
    let h = &f.hourly;
    let d = &f.daily;

    json!({
        "latitude": f.latitude,
        "longitude": f.longitude,
        "generationtime_ms": f.generationtime_ms,
        "utc_offset_seconds": f.utc_offset_seconds,
        "timezone": f.timezone,
        "timezone_abbreviation": f.timezone_abbreviation,
        "elevation": f.elevation,
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "apparent_temperature": "°C",
            "relative_humidity_2m": "%",
            "weather_code": "wmo code",
            "wind_speed_10m": "km/h",
            "wind_gusts_10m": "km/h",
            "wind_direction_10m": "°",
            "precipitation": "mm",
            "cloud_cover": "%",
            "surface_pressure": "hPa"
        },
        "hourly": {
            "time": h.time,
            "temperature_2m": h.temperature_2m,
            "apparent_temperature": h.apparent_temperature,
            "relative_humidity_2m": h.relative_humidity_2m,
            "weather_code": h.weather_code,
            "wind_speed_10m": h.wind_speed_10m,
            "wind_gusts_10m": h.wind_gusts_10m,
            "wind_direction_10m": h.wind_direction_10m,
            "precipitation": h.precipitation,
            "cloud_cover": h.cloud_cover,
            "surface_pressure": h.surface_pressure
        },
        "daily_units": {
            "time": "iso8601",
            "sunrise": "iso8601",
            "sunset": "iso8601",
            "uv_index_max": ""
        },
        "daily": {
            "time": d.time,
            "sunrise": d.sunrise,
            "sunset": d.sunset,
            "temperature_2m_max": d.temperature_2m_max,
            "temperature_2m_min": d.temperature_2m_min,
            "uv_index_max": d.uv_index_max,
            "precipitation_sum": d.precipitation_sum,
            "wind_speed_10m_max": d.wind_speed_10m_max,
            "wind_gusts_10m_max": d.wind_gusts_10m_max,
            "wind_direction_10m_dominant": d.wind_direction_10m_dominant
        }
    })
}
