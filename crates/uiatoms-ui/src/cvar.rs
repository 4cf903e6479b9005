//! Console-variable helpers.
//!
//! The console port already returns owned values, so these only add the
//! interpretations the menu code needs.

use uiatoms_engine::trap::Console;

use crate::bounds::clamp_to_range;

/// Numeric value of `name`, clamped to `[min, max]`.
pub fn clamp_cvar<C: Console + ?Sized>(console: &C, name: &str, min: f32, max: f32) -> f32 {
    clamp_to_range(console.cvar_value(name), min, max)
}

/// True when `name` holds a number whose integer part is non-zero.
///
/// Flags like `developer` are integers on the engine side, so `0.5` is off.
#[inline]
pub fn cvar_enabled<C: Console + ?Sized>(console: &C, name: &str) -> bool {
    console.cvar_value(name) as i32 != 0
}
