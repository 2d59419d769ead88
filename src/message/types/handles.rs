//! Opaque fixed-size values: BLOB/ARRAY ids and decimal floating point.
//!
//! A `Quad` identifies a BLOB or ARRAY stored out of line. The message only
//! carries the id; reading the content is the blob transport's job.

use std::fmt;

/// BLOB, ARRAY or QUAD id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quad {
    pub high: i32,
    pub low: u32,
}

impl Quad {
    pub const WIRE_SIZE: usize = 8;

    pub fn new(high: i32, low: u32) -> Self {
        Self { high, low }
    }

    /// Check if this is the null id.
    pub fn is_empty(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    pub(crate) fn from_le_bytes(bytes: [u8; 8]) -> Self {
        let mut high = [0u8; 4];
        let mut low = [0u8; 4];
        high.copy_from_slice(&bytes[..4]);
        low.copy_from_slice(&bytes[4..]);
        Self {
            high: i32::from_le_bytes(high),
            low: u32::from_le_bytes(low),
        }
    }

    pub(crate) fn to_le_bytes(self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&self.high.to_le_bytes());
        bytes[4..].copy_from_slice(&self.low.to_le_bytes());
        bytes
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}:{:08x}", self.high as u32, self.low)
    }
}

/// DECFLOAT(16) value: IEEE 754 decimal64 bits, little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecFloat16(pub [u8; 8]);

impl DecFloat16 {
    pub const WIRE_SIZE: usize = 8;

    pub fn from_bits(bits: u64) -> Self {
        Self(bits.to_le_bytes())
    }

    pub fn to_bits(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }
}

/// DECFLOAT(34) value: IEEE 754 decimal128 bits, little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecFloat34(pub [u8; 16]);

impl DecFloat34 {
    pub const WIRE_SIZE: usize = 16;

    pub fn from_bits(bits: u128) -> Self {
        Self(bits.to_le_bytes())
    }

    pub fn to_bits(&self) -> u128 {
        u128::from_le_bytes(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_bytes() {
        let quad = Quad::new(-2, 0x1234_5678);
        let bytes = quad.to_le_bytes();
        assert_eq!(&bytes[..4], &(-2i32).to_le_bytes());
        assert_eq!(Quad::from_le_bytes(bytes), quad);
        assert!(!quad.is_empty());
        assert!(Quad::default().is_empty());
    }

    #[test]
    fn test_quad_display() {
        assert_eq!(Quad::new(1, 255).to_string(), "00000001:000000ff");
    }

    #[test]
    fn test_decfloat_bits() {
        let d16 = DecFloat16::from_bits(0x2238_0000_0000_0001);
        assert_eq!(d16.0[0], 0x01);
        assert_eq!(d16.to_bits(), 0x2238_0000_0000_0001);

        let d34 = DecFloat34::from_bits(1u128 << 100);
        assert_eq!(d34.to_bits(), 1u128 << 100);
    }
}
