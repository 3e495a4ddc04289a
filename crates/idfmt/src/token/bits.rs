use core::fmt;

use crate::{ArgumentIssue, base36};

/// Supported bit widths for `{RANDOM:<bits>}`.
///
/// The rendered width depends only on the bit width, never on the drawn
/// value: see [`RandomBits::width`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
#[repr(u8)]
pub enum RandomBits {
    #[default]
    Six = 6,
    Nine = 9,
    Twenty = 20,
    ThirtyTwo = 32,
}

impl RandomBits {
    pub const ALL: [Self; 4] = [Self::Six, Self::Nine, Self::Twenty, Self::ThirtyTwo];

    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Number of base-36 characters a value of this width renders to.
    ///
    /// ```
    /// use idfmt::RandomBits;
    ///
    /// assert_eq!(RandomBits::Twenty.width(), 4);
    /// ```
    ///
    /// The base-36 helpers behind it are not part of the public API:
    ///
    /// ```compile_fail
    /// let _ = idfmt::width_for_bits(65);
    /// ```
    pub const fn width(self) -> usize {
        base36::width_for_bits(self.bits())
    }

    /// Mask selecting the low `bits` bits of a random draw.
    pub const fn mask(self) -> u64 {
        (1_u64 << self.bits()) - 1
    }
}

impl TryFrom<u32> for RandomBits {
    type Error = ArgumentIssue;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            6 => Ok(Self::Six),
            9 => Ok(Self::Nine),
            20 => Ok(Self::Twenty),
            32 => Ok(Self::ThirtyTwo),
            other => Err(ArgumentIssue::UnsupportedBits(other)),
        }
    }
}

impl From<RandomBits> for u32 {
    fn from(bits: RandomBits) -> Self {
        bits.bits()
    }
}

impl fmt::Display for RandomBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_log36() {
        assert_eq!(RandomBits::Six.width(), 2);
        assert_eq!(RandomBits::Nine.width(), 2);
        assert_eq!(RandomBits::Twenty.width(), 4);
        assert_eq!(RandomBits::ThirtyTwo.width(), 7);
    }

    #[test]
    fn rejects_unsupported_widths() {
        for bits in [0, 1, 5, 7, 8, 10, 16, 31, 33, 64] {
            assert_eq!(
                RandomBits::try_from(bits),
                Err(ArgumentIssue::UnsupportedBits(bits))
            );
        }
        for bits in RandomBits::ALL {
            assert_eq!(RandomBits::try_from(bits.bits()), Ok(bits));
        }
    }

    #[test]
    fn mask_covers_exactly_the_bit_width() {
        assert_eq!(RandomBits::Six.mask(), 0x3F);
        assert_eq!(RandomBits::ThirtyTwo.mask(), u64::from(u32::MAX));
    }
}
