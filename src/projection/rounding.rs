//! Fixed-decimal rounding used to bound floating-point drift

/// Decimals kept on running balances between arithmetic steps
pub const INTERNAL_DECIMALS: u32 = 8;

/// Decimals shown to users
pub const DISPLAY_DECIMALS: u32 = 2;

/// Round half away from zero to `decimals` places
///
/// Values too large to scale are returned unchanged; at that magnitude the
/// requested decimals are below f64 resolution anyway.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round to the internal accumulation precision
pub fn internal(value: f64) -> f64 {
    round_to(value, INTERNAL_DECIMALS)
}

/// Round to display precision
pub fn display(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}
