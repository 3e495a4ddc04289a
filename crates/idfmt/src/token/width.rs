use crate::ArgumentIssue;

/// Minimum number of digits a sequence value renders with when `{SEQ}` has no
/// explicit width.
pub const DEFAULT_SEQUENCE_WIDTH: usize = 5;

/// Largest accepted explicit width; `u64::MAX` has 20 decimal digits.
pub const MAX_SEQUENCE_WIDTH: u8 = 20;

/// Minimum digit count of a `{SEQ}` directive.
///
/// `{SEQ}` and `{SEQ:5}` render identically but are kept apart so the
/// canonical string re-serializes exactly as it was written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Option<u32>", into = "Option<u32>")
)]
pub enum SequenceWidth {
    /// Written `{SEQ}`.
    #[default]
    Default,
    /// Written `{SEQ:<n>}`.
    Explicit(u8),
}

impl SequenceWidth {
    /// Validates an explicit width.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentIssue::WidthOutOfRange`] unless `1 <= width <= 20`.
    pub fn explicit(width: u32) -> Result<Self, ArgumentIssue> {
        match u8::try_from(width) {
            Ok(w @ 1..=MAX_SEQUENCE_WIDTH) => Ok(Self::Explicit(w)),
            _ => Err(ArgumentIssue::WidthOutOfRange(width)),
        }
    }

    /// Minimum rendered digit count; longer values are never truncated.
    pub const fn min_digits(self) -> usize {
        match self {
            Self::Default => DEFAULT_SEQUENCE_WIDTH,
            Self::Explicit(w) => w as usize,
        }
    }
}

impl TryFrom<Option<u32>> for SequenceWidth {
    type Error = ArgumentIssue;

    fn try_from(width: Option<u32>) -> Result<Self, Self::Error> {
        width.map_or(Ok(Self::Default), Self::explicit)
    }
}

impl From<SequenceWidth> for Option<u32> {
    fn from(width: SequenceWidth) -> Self {
        match width {
            SequenceWidth::Default => None,
            SequenceWidth::Explicit(w) => Some(u32::from(w)),
        }
    }
}
