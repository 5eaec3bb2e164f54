const KM_PER_MILE: f64 = 1.609344;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / KM_PER_MILE
}

/// One decimal place, halves rounded away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
