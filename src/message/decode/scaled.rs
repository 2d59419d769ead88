//! Fixed-point rendering of scaled integers.
//!
//! NUMERIC and DECIMAL columns are stored as plain integers with a decimal
//! exponent on the field. A scale of `-2` means the stored `1234` is `12.34`.

use crate::error::{Error, Result};
use crate::message::constants::MAX_SCALE;

/// Render `value * 10^scale` as a decimal string.
///
/// Negative scales insert a decimal point, positive scales append zeros.
///
/// # Errors
/// Returns `Error::Codec` if the scale magnitude exceeds 38.
pub fn format_scaled(value: i128, scale: i32) -> Result<String> {
    if scale.unsigned_abs() > MAX_SCALE {
        return Err(Error::codec(format!("Scale out of range: {}", scale)));
    }
    let sign = if value < 0 { "-" } else { "" };
    let digits = value.unsigned_abs().to_string();

    if scale >= 0 {
        if scale == 0 || value == 0 {
            return Ok(format!("{}{}", sign, digits));
        }
        return Ok(format!("{}{}{}", sign, digits, "0".repeat(scale as usize)));
    }

    let frac_len = scale.unsigned_abs() as usize;
    // Make sure there is at least one digit before the point
    let padded = if digits.len() <= frac_len {
        format!("{:0>width$}", digits, width = frac_len + 1)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - frac_len);
    Ok(format!("{}{}.{}", sign, int_part, frac_part))
}
