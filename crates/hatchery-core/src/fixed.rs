use fixed::types::I32F32;

/// Q32.32 fixed-point: 32 integer bits, 32 fractional bits.
pub type Fixed64 = I32F32;

/// Ticks are the atomic unit of game time.
pub type Ticks = u64;

/// Convert an f64 to Fixed64. Use only when loading configuration.
#[inline]
pub fn f64_to_fixed64(v: f64) -> Fixed64 {
    Fixed64::saturating_from_num(v)
}

/// Convert Fixed64 to f64. Use only for display.
#[inline]
pub fn fixed64_to_f64(v: Fixed64) -> f64 {
    v.to_num::<f64>()
}

/// Scale an energy amount by a factor, rounding down. Saturates at the
/// bounds of `u32` instead of overflowing.
#[inline]
pub fn scale_energy(amount: u32, factor: Fixed64) -> u32 {
    let scaled = Fixed64::saturating_from_num(amount).saturating_mul(factor);
    scaled.floor().saturating_to_num::<u32>()
}
