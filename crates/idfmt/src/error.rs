use thiserror::Error;

use crate::TokenKind;

/// A result type defaulting to [`FormatError`].
///
/// Only compiling a format is fallible. Rendering a compiled format and
/// reserving sequence values never fail.
pub type Result<T, E = FormatError> = core::result::Result<T, E>;

/// All errors a format string can produce.
///
/// Every variant is a deterministic function of the input text, so callers
/// should surface them as-is rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatError {
    /// A `{` that is never closed, has an empty head, or contains another
    /// `{` before its closing `}`.
    #[error("malformed directive at byte {offset}")]
    MalformedDirective {
        /// Byte offset of the opening `{`.
        offset: usize,
    },

    /// The directive head is not one of `RANDOM`, `GUID`, `DATE` or `SEQ`.
    #[error("unknown directive `{head}` at byte {offset}")]
    UnknownDirective { head: String, offset: usize },

    /// A directive argument is missing, superfluous, or out of range.
    #[error("invalid argument for {kind} at byte {offset}: {issue}")]
    InvalidArgument {
        kind: TokenKind,
        /// Byte offset of the directive (or text literal) in the canonical
        /// string.
        offset: usize,
        issue: ArgumentIssue,
    },

    /// More tokens of one kind than the policy allows.
    #[error("too many {kind} tokens: {count} exceeds the limit of {max}")]
    TooManyOfKind {
        kind: TokenKind,
        count: usize,
        max: usize,
    },

    /// More tokens in total than the policy allows.
    #[error("too many tokens: {count} exceeds the limit of {max}")]
    TooManyTokens { count: usize, max: usize },
}

impl FormatError {
    /// Returns true if the error was raised while parsing the format text.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedDirective { .. }
                | Self::UnknownDirective { .. }
                | Self::InvalidArgument { .. }
        )
    }

    /// Returns true if the error is a cap violation.
    pub fn is_limit_error(&self) -> bool {
        matches!(self, Self::TooManyOfKind { .. } | Self::TooManyTokens { .. })
    }
}

/// Why a directive argument was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ArgumentIssue {
    #[error("missing argument")]
    Missing,

    #[error("unexpected argument `{0}`")]
    Unexpected(String),

    #[error("`{0}` is not a number")]
    NotNumeric(String),

    #[error("`{0}` has a leading zero")]
    LeadingZero(String),

    #[error("{0} is not a supported bit width (expected 6, 9, 20 or 32)")]
    UnsupportedBits(u32),

    #[error("`{0}` is not an allowed date pattern")]
    UnknownDatePattern(String),

    #[error("sequence width {0} is out of range (expected 1..=20)")]
    WidthOutOfRange(u32),

    #[error("literal text may not contain `{{`")]
    ReservedCharacter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_split_parse_and_limit_errors() {
        let syntax = FormatError::MalformedDirective { offset: 0 };
        let limit = FormatError::TooManyTokens { count: 21, max: 20 };

        assert!(syntax.is_syntax_error());
        assert!(!syntax.is_limit_error());
        assert!(limit.is_limit_error());
        assert!(!limit.is_syntax_error());
    }

    #[test]
    fn display_names_the_offending_kind() {
        let err = FormatError::TooManyOfKind {
            kind: TokenKind::Random,
            count: 4,
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "too many RANDOM tokens: 4 exceeds the limit of 3"
        );

        let err = FormatError::InvalidArgument {
            kind: TokenKind::Random,
            offset: 4,
            issue: ArgumentIssue::UnsupportedBits(7),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument for RANDOM at byte 4: 7 is not a supported bit width (expected 6, 9, 20 or 32)"
        );
    }
}
