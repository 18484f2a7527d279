//! Fixed-width bit labels.
//!
//! A label is the bit pattern a modulator maps onto a constellation point.
//! Labels only compare against labels of the same width; comparing a 4-bit
//! label with a 6-bit label is an error, never a silent answer.

use std::str::FromStr;

use crate::{Error, Result, MAX_LABEL_WIDTH};

/// A bit string of exactly `width` bits.
///
/// Serialises as its zero-padded bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitLabel {
    value: u64,
    width: u32,
}

impl BitLabel {
    /// Create a label, checking that `value` fits in `width` bits.
    pub fn new(value: u64, width: u32) -> Result<Self> {
        if width == 0 || width > MAX_LABEL_WIDTH {
            return Err(Error::InvalidWidth(width));
        }
        if width < MAX_LABEL_WIDTH && value >> width != 0 {
            return Err(Error::LabelOverflow { value, width });
        }
        Ok(Self { value, width })
    }

    /// Smallest width that holds `value` (at least one bit).
    pub fn width_for(value: u64) -> u32 {
        (u64::BITS - value.leading_zeros()).max(1)
    }

    /// Raw integer value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Width in bits.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Bitwise XOR with a label of the same width.
    pub fn xor(&self, other: &Self) -> Result<u64> {
        if self.width != other.width {
            return Err(Error::LabelWidthMismatch {
                left: self.to_string(),
                left_width: self.width,
                right: other.to_string(),
                right_width: other.width,
            });
        }
        Ok(self.value ^ other.value)
    }

    /// Number of bit positions in which the labels differ.
    pub fn hamming_distance(&self, other: &Self) -> Result<u32> {
        self.xor(other).map(u64::count_ones)
    }
}

impl std::fmt::Display for BitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for BitLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(Error::InvalidLabel(s.to_string()));
        }
        let width = u32::try_from(s.len()).map_err(|_| Error::InvalidLabel(s.to_string()))?;
        if width > MAX_LABEL_WIDTH {
            return Err(Error::InvalidWidth(width));
        }
        let value = u64::from_str_radix(s, 2).map_err(|_| Error::InvalidLabel(s.to_string()))?;
        Self::new(value, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(BitLabel::new(5, 4).unwrap().to_string(), "0101");
        assert_eq!(BitLabel::new(5, 6).unwrap().to_string(), "000101");
        assert_eq!(BitLabel::new(0, 1).unwrap().to_string(), "0");
    }

    #[test]
    fn parse_preserves_width() {
        let label: BitLabel = "0011".parse().unwrap();
        assert_eq!(label.value(), 3);
        assert_eq!(label.width(), 4);
        assert_eq!(label.to_string(), "0011");
    }

    #[test]
    fn parse_rejects_non_bits() {
        assert!(matches!("".parse::<BitLabel>(), Err(Error::InvalidLabel(_))));
        assert!(matches!("01a1".parse::<BitLabel>(), Err(Error::InvalidLabel(_))));
        assert!(matches!("-101".parse::<BitLabel>(), Err(Error::InvalidLabel(_))));
    }

    #[test]
    fn value_must_fit_width() {
        assert_eq!(
            BitLabel::new(16, 4),
            Err(Error::LabelOverflow { value: 16, width: 4 })
        );
        assert!(BitLabel::new(15, 4).is_ok());
        assert!(BitLabel::new(u64::MAX, 64).is_ok());
    }

    #[test]
    fn width_bounds() {
        assert_eq!(BitLabel::new(0, 0), Err(Error::InvalidWidth(0)));
        assert_eq!(BitLabel::new(0, 65), Err(Error::InvalidWidth(65)));
    }

    #[test]
    fn width_for_values() {
        assert_eq!(BitLabel::width_for(0), 1);
        assert_eq!(BitLabel::width_for(1), 1);
        assert_eq!(BitLabel::width_for(15), 4);
        assert_eq!(BitLabel::width_for(16), 5);
        assert_eq!(BitLabel::width_for(63), 6);
        assert_eq!(BitLabel::width_for(u64::MAX), 64);
    }

    #[test]
    fn hamming_distance_counts_bits() {
        let a = BitLabel::new(0b1010, 4).unwrap();
        let b = BitLabel::new(0b0110, 4).unwrap();
        assert_eq!(a.hamming_distance(&b), Ok(2));
        assert_eq!(a.hamming_distance(&a), Ok(0));
    }

    #[test]
    fn xor_rejects_mixed_widths() {
        let a = BitLabel::new(5, 4).unwrap();
        let b = BitLabel::new(5, 6).unwrap();
        let err = a.xor(&b).unwrap_err();
        assert_eq!(
            err,
            Error::LabelWidthMismatch {
                left: "0101".into(),
                left_width: 4,
                right: "000101".into(),
                right_width: 6,
            }
        );
    }
}
