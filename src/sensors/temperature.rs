//! Die temperature conversion

/// Raw reading that corresponds to 35 °C
const TEMP_OFFSET_LSB: f32 = -13200.0;

/// Sensitivity in LSB/°C
const TEMP_SENSITIVITY: f32 = 280.0;

/// Reference temperature in °C
const TEMP_REFERENCE_C: f32 = 35.0;

/// Convert a raw `TEMP_OUT` reading to degrees Celsius
///
/// `35 + (raw + 13200) / 280`
#[must_use]
pub fn temperature_to_celsius(raw: i16) -> f32 {
    TEMP_REFERENCE_C + (f32::from(raw) - TEMP_OFFSET_LSB) / TEMP_SENSITIVITY
}
