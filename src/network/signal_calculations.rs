//! Fiber propagation constants and signal quality calculations.
//!
//! Contains helpers for:
//! - Propagation latency over a fiber span
//! - Linear noise accumulation model
//! - SNR in decibels
//! - dBm / watt conversions
//!
//! Units:
//! - Power: watts (dBm conversion provided)
//! - Time: seconds
//! - Distance: the abstract planar units of the topology description

/// Speed of light in vacuum (m/s), rounded as used by the link model.
pub const LIGHT_SPEED: f64 = 3.0e8;

/// Signal speed in fiber: two thirds of the vacuum speed of light.
pub const FIBER_SPEED: f64 = LIGHT_SPEED * 2.0 / 3.0;

/// Noise generated per unit length per watt of input power.
pub const NOISE_COEFFICIENT: f64 = 1e-9;

/// Time needed to cross a span of the given length.
///
/// # Formula
///
/// ```text
/// t = L / v_fiber
/// ```
pub fn propagation_latency(length: f64) -> f64 {
    length / FIBER_SPEED
}

/// Noise added by a span, linear in both input power and length.
///
/// # Formula
///
/// ```text
/// N = k × P_in × L,  k = 1e-9
/// ```
///
/// This stands in for amplifier and thermal noise; it is not a physical
/// noise-figure model.
pub fn generated_noise(input_power: f64, length: f64) -> f64 {
    NOISE_COEFFICIENT * input_power * length
}

/// Signal-to-noise ratio in dB.
///
/// Returns `f64::INFINITY` when no noise was accumulated (for example a
/// single-node path that never crossed a link).
pub fn snr_db(power: f64, noise: f64) -> f64 {
    if noise > 0.0 {
        10.0 * (power / noise).log10()
    } else {
        f64::INFINITY
    }
}

/// Convert power from dBm to watts.
///
/// ```text
/// 0 dBm   → 1 mW
/// 30 dBm  → 1 W
/// ```
pub fn dbm_to_w(dbm: f64) -> f64 {
    10f64.powf(dbm / 10.0) / 1000.0
}

/// Convert power from watts to dBm. Inverse of `dbm_to_w`; non-positive input
/// yields `-inf` or NaN.
pub fn w_to_dbm(w: f64) -> f64 {
    10.0 * (w * 1000.0).log10()
}
