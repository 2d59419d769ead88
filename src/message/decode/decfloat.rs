//! DECFLOAT(16) and DECFLOAT(34) decoder.
//!
//! Values are IEEE 754-2008 decimal64 / decimal128 with the coefficient in
//! densely packed decimal (DPD):
//! - 1 bit sign
//! - 5 bit combination field (exponent high bits + leading digit, or special)
//! - 8 / 12 bit exponent continuation
//! - 50 / 110 bit coefficient continuation, 10-bit declets of 3 digits each

use crate::message::constants::{DEC16_EXPONENT_BIAS, DEC34_EXPONENT_BIAS};
use crate::message::types::{DecFloat16, DecFloat34};

/// Decoded decimal floating point value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalValue {
    /// `coefficient * 10^exponent`; `coefficient` is a digit string with no leading zeros.
    Finite {
        negative: bool,
        coefficient: String,
        exponent: i32,
    },
    Infinity { negative: bool },
    NaN { negative: bool, signaling: bool },
}

/// Decode a DECFLOAT(16) value.
pub fn decode_dec16(value: &DecFloat16) -> DecimalValue {
    let bits = value.to_bits();
    let declets: Vec<u16> = (0..5)
        .map(|i| ((bits >> (40 - 10 * i)) & 0x3ff) as u16)
        .collect();
    decode_fields(
        bits >> 63 != 0,
        ((bits >> 58) & 0x1f) as u32,
        ((bits >> 50) & 0xff) as u32,
        8,
        &declets,
        DEC16_EXPONENT_BIAS,
    )
}

/// Decode a DECFLOAT(34) value.
pub fn decode_dec34(value: &DecFloat34) -> DecimalValue {
    let bits = value.to_bits();
    let declets: Vec<u16> = (0..11)
        .map(|i| ((bits >> (100 - 10 * i)) & 0x3ff) as u16)
        .collect();
    decode_fields(
        bits >> 127 != 0,
        ((bits >> 122) & 0x1f) as u32,
        ((bits >> 110) & 0xfff) as u32,
        12,
        &declets,
        DEC34_EXPONENT_BIAS,
    )
}

/// Render a DECFLOAT(16) value as a scientific string.
pub fn dec16_to_string(value: &DecFloat16) -> String {
    decode_dec16(value).to_string()
}

/// Render a DECFLOAT(34) value as a scientific string.
pub fn dec34_to_string(value: &DecFloat34) -> String {
    decode_dec34(value).to_string()
}

fn decode_fields(
    negative: bool,
    combination: u32,
    exponent_continuation: u32,
    continuation_bits: u32,
    declets: &[u16],
    bias: i32,
) -> DecimalValue {
    let (exponent_high, leading_digit) = match combination >> 3 {
        0b11 => match (combination >> 1) & 0b11 {
            0b11 if combination & 1 == 0 => return DecimalValue::Infinity { negative },
            0b11 => {
                return DecimalValue::NaN {
                    negative,
                    signaling: exponent_continuation >> (continuation_bits - 1) != 0,
                }
            }
            high => (high, 8 + (combination & 1) as u8),
        },
        high => (high, (combination & 0b111) as u8),
    };

    let exponent =
        ((exponent_high << continuation_bits) | exponent_continuation) as i32 - bias;

    let mut digits = String::with_capacity(1 + declets.len() * 3);
    digits.push((b'0' + leading_digit) as char);
    for &declet in declets {
        for digit in unpack_declet(declet) {
            digits.push((b'0' + digit) as char);
        }
    }
    let coefficient = match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    };

    DecimalValue::Finite {
        negative,
        coefficient,
        exponent,
    }
}

/// Unpack a 10-bit DPD declet `pqr stu v wxy` into three decimal digits.
fn unpack_declet(declet: u16) -> [u8; 3] {
    let bit = |n: u16| ((declet >> n) & 1) as u8;
    let (p, q, r) = (bit(9), bit(8), bit(7));
    let (s, t, u) = (bit(6), bit(5), bit(4));
    let (v, w, x, y) = (bit(3), bit(2), bit(1), bit(0));

    let pqr = (p << 2) | (q << 1) | r;
    let stu = (s << 2) | (t << 1) | u;
    let wxy = (w << 2) | (x << 1) | y;

    if v == 0 {
        return [pqr, stu, wxy];
    }
    match (w, x, s, t) {
        (0, 0, _, _) => [pqr, stu, 8 + y],
        (0, 1, _, _) => [pqr, 8 + u, (s << 2) | (t << 1) | y],
        (1, 0, _, _) => [8 + r, stu, (p << 2) | (q << 1) | y],
        (_, _, 0, 0) => [8 + r, 8 + u, (p << 2) | (q << 1) | y],
        (_, _, 0, 1) => [8 + r, (p << 2) | (q << 1) | u, 8 + y],
        (_, _, 1, 0) => [pqr, 8 + u, 8 + y],
        _ => [8 + r, 8 + u, 8 + y],
    }
}

impl std::fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecimalValue::Infinity { negative } => {
                write!(f, "{}Infinity", if *negative { "-" } else { "" })
            }
            DecimalValue::NaN {
                negative,
                signaling,
            } => write!(
                f,
                "{}{}NaN",
                if *negative { "-" } else { "" },
                if *signaling { "s" } else { "" }
            ),
            DecimalValue::Finite {
                negative,
                coefficient,
                exponent,
            } => {
                if *negative {
                    write!(f, "-")?;
                }
                let len = coefficient.len() as i32;
                let adjusted = exponent + len - 1;
                if *exponent <= 0 && adjusted >= -6 {
                    if *exponent == 0 {
                        return write!(f, "{}", coefficient);
                    }
                    let point = len + exponent;
                    if point > 0 {
                        let (int_part, frac_part) = coefficient.split_at(point as usize);
                        write!(f, "{}.{}", int_part, frac_part)
                    } else {
                        write!(f, "0.{}{}", "0".repeat((-point) as usize), coefficient)
                    }
                } else {
                    let (first, rest) = coefficient.split_at(1);
                    write!(f, "{}", first)?;
                    if !rest.is_empty() {
                        write!(f, ".{}", rest)?;
                    }
                    write!(f, "E{}{}", if adjusted >= 0 { "+" } else { "" }, adjusted)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_declet() {
        assert_eq!(unpack_declet(0x000), [0, 0, 0]);
        assert_eq!(unpack_declet(0x0a3), [1, 2, 3]);
        assert_eq!(unpack_declet(0x008), [0, 0, 8]);
        assert_eq!(unpack_declet(0x009), [0, 0, 9]);
        assert_eq!(unpack_declet(0x0ff), [9, 9, 9]);
        // 0x00a: v=1 w=0 x=1 s=t=u=0 -> [0, 8, 0]
        assert_eq!(unpack_declet(0x00a), [0, 8, 0]);
        // 0x00c: v=1 w=1 x=0 -> [8, 0, 0]
        assert_eq!(unpack_declet(0x00c), [8, 0, 0]);
    }

    #[test]
    fn test_dec16_one() {
        let one = DecFloat16::from_bits(0x2238_0000_0000_0001);
        assert_eq!(
            decode_dec16(&one),
            DecimalValue::Finite {
                negative: false,
                coefficient: "1".to_string(),
                exponent: 0
            }
        );
        assert_eq!(dec16_to_string(&one), "1");
    }

    #[test]
    fn test_dec16_fraction() {
        // -1.23: exponent -2 (biased 396 = 0x18c), coefficient declet 0x0a3
        let value = DecFloat16::from_bits(0xa230_0000_0000_00a3);
        assert_eq!(dec16_to_string(&value), "-1.23");
    }

    #[test]
    fn test_dec16_small_fraction() {
        // 5E-3 -> 0.005: biased exponent 395 = 0x18b
        let value = DecFloat16::from_bits(0x222c_0000_0000_0005);
        assert_eq!(dec16_to_string(&value), "0.005");
    }

    #[test]
    fn test_dec16_scientific() {
        // 12E+4: biased exponent 402 = 0x192, coefficient declet 0x012
        let value = DecFloat16::from_bits(0x2248_0000_0000_0012);
        assert_eq!(dec16_to_string(&value), "1.2E+5");
    }

    #[test]
    fn test_dec16_large_leading_digit() {
        // 9 as leading digit: combination 11 01 1 -> exponent high 01, msd 9
        // 9000000000000000 with exponent 0
        let value = DecFloat16::from_bits((0b11011u64 << 58) | (0x8e << 50));
        assert_eq!(dec16_to_string(&value), "9000000000000000");
    }

    #[test]
    fn test_dec16_specials() {
        assert_eq!(
            dec16_to_string(&DecFloat16::from_bits(0x7800_0000_0000_0000)),
            "Infinity"
        );
        assert_eq!(
            dec16_to_string(&DecFloat16::from_bits(0xf800_0000_0000_0000)),
            "-Infinity"
        );
        assert_eq!(
            dec16_to_string(&DecFloat16::from_bits(0x7c00_0000_0000_0000)),
            "NaN"
        );
        assert_eq!(
            dec16_to_string(&DecFloat16::from_bits(0x7e00_0000_0000_0000)),
            "sNaN"
        );
    }

    #[test]
    fn test_dec16_zero() {
        assert_eq!(
            dec16_to_string(&DecFloat16::from_bits(0x2238_0000_0000_0000)),
            "0"
        );
        // 0E-2
        assert_eq!(
            dec16_to_string(&DecFloat16::from_bits(0x2230_0000_0000_0000)),
            "0.00"
        );
    }

    #[test]
    fn test_dec34_one() {
        let one = DecFloat34::from_bits(0x2208_0000_0000_0000_0000_0000_0000_0001);
        assert_eq!(dec34_to_string(&one), "1");
    }

    #[test]
    fn test_dec34_negative_fraction() {
        // -12.3: exponent -1 (biased 6175 = 0x181f), coefficient declet 0x0a3 = 123
        let bits = (1u128 << 127) | (0b01000u128 << 122) | (0x81fu128 << 110) | 0x0a3;
        assert_eq!(dec34_to_string(&DecFloat34::from_bits(bits)), "-12.3");
    }
}
