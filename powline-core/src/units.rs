//! Metric to imperial conversions with display rounding.
//!
//! The wire protocol can serve either unit system; these helpers cover the
//! metric case. Speeds, distances, and temperatures round to one decimal;
//! elevations round to the nearest foot.

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert centimetres of snowfall to inches, rounded to one decimal.
///
/// # Examples
/// ```
/// use powline_core::cm_to_inches;
///
/// assert_eq!(cm_to_inches(2.54), 1.0);
/// assert_eq!(cm_to_inches(10.0), 3.9);
/// ```
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    round1(cm / 2.54)
}

/// Convert inches of snowfall to centimetres, rounded to one decimal.
///
/// Inverse of [`cm_to_inches`] within the 0.1 rounding grain.
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    round1(inches * 2.54)
}

/// Convert kilometres per hour to miles per hour, rounded to one decimal.
#[must_use]
pub fn kph_to_mph(kph: f64) -> f64 {
    round1(kph / 1.609)
}

/// Convert metres to miles, rounded to one decimal.
#[must_use]
pub fn meters_to_miles(m: f64) -> f64 {
    round1(m / 1609.0)
}

/// Convert metres to feet, rounded to the nearest foot.
///
/// # Examples
/// ```
/// use powline_core::meters_to_feet;
///
/// assert_eq!(meters_to_feet(1000.0), 3281.0);
/// ```
#[must_use]
pub fn meters_to_feet(m: f64) -> f64 {
    (m * 3.281).round()
}

/// Convert degrees Celsius to Fahrenheit, rounded to one decimal.
#[must_use]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    round1(c * 1.8 + 32.0)
}
