//! WMO weather interpretation codes as used by Open-Meteo.
//! See: https://open-meteo.com/en/docs#weathervariables

use std::borrow::Cow;

/// Sorted by code so lookups can binary search.
const WMO_CODES: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snowfall"),
    (73, "Moderate snowfall"),
    (75, "Heavy snowfall"),
    (80, "Rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Phrase for a known code, `None` otherwise.
pub fn lookup(code: i32) -> Option<&'static str> {
    WMO_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| WMO_CODES[i].1)
}

/// Human-readable summary; unknown codes become `"Code {code}"`.
pub fn describe(code: i32) -> Cow<'static, str> {
    match lookup(code) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(format!("Code {code}")),
    }
}
