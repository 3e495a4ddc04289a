use core::fmt::{self, Write};

use crate::{Format, SequenceWidth, Token};

/// Writes the canonical directive, or the literal for text.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { literal } => f.write_str(literal),
            Self::Random { bits } => write!(f, "{{RANDOM:{bits}}}"),
            Self::Guid => f.write_str("{GUID}"),
            Self::Date { pattern } => write!(f, "{{DATE:{pattern}}}"),
            Self::Sequence {
                width: SequenceWidth::Default,
            } => f.write_str("{SEQ}"),
            Self::Sequence {
                width: SequenceWidth::Explicit(w),
            } => write!(f, "{{SEQ:{w}}}"),
        }
    }
}

/// Serializes to the canonical format string: each token's directive or
/// literal, concatenated with no separator.
///
/// ```
/// use idfmt::{DatePattern, Format, RandomBits, Token};
///
/// let format = Format::from(vec![
///     Token::text("INV-"),
///     Token::date(DatePattern::Compact),
///     Token::text("-"),
///     Token::random(RandomBits::Twenty),
/// ]);
/// assert_eq!(format.to_string(), "INV-{DATE:yyyyMMdd}-{RANDOM:20}");
/// ```
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|token| write!(f, "{token}"))
    }
}

/// Counts the bytes written through it.
struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

impl Token {
    /// Length in bytes of this token's canonical form.
    pub(crate) fn canonical_len(&self) -> usize {
        let mut counter = ByteCounter(0);
        // Writing to `ByteCounter` never fails.
        let _ = write!(counter, "{self}");
        counter.0
    }
}
