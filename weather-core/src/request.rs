use crate::model::Location;

/// Hourly variables, in the order they are requested.
pub const HOURLY_VARIABLES: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "weather_code",
    "wind_speed_10m",
    "wind_gusts_10m",
    "wind_direction_10m",
    "precipitation",
    "cloud_cover",
    "surface_pressure",
];

/// Daily variables, in the order they are requested.
pub const DAILY_VARIABLES: &[&str] = &[
    "sunrise",
    "sunset",
    "temperature_2m_max",
    "temperature_2m_min",
    "uv_index_max",
    "precipitation_sum",
    "wind_speed_10m_max",
    "wind_gusts_10m_max",
    "wind_direction_10m_dominant",
];

/// Outbound query for the forecast endpoint. Building one performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub location: Location,
    pub timezone: &'static str,
    pub hourly: &'static [&'static str],
    pub daily: &'static [&'static str],
}

impl ForecastRequest {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            timezone: location.timezone,
            hourly: HOURLY_VARIABLES,
            daily: DAILY_VARIABLES,
        }
    }

    /// Query parameters in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("timezone", self.timezone.to_string()),
            ("hourly", self.hourly.join(",")),
            ("daily", self.daily.join(",")),
        ]
    }
}
