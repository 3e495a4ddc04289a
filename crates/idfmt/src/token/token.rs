use crate::{DatePattern, RandomBits, SequenceWidth, TokenKind};

/// One segment of a [`crate::Format`].
///
/// Each variant carries exactly the payload its kind needs, so combinations
/// such as a random token with a date pattern cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "UPPERCASE")
)]
pub enum Token {
    /// Literal text, copied verbatim. May be empty; may not contain `{`.
    Text { literal: String },
    /// A uniformly drawn value of `bits` bits, rendered in fixed-width base 36.
    Random { bits: RandomBits },
    /// A random (version 4) UUID.
    Guid,
    /// The generation time formatted with `pattern`.
    Date { pattern: DatePattern },
    /// The inventory's next sequence number.
    Sequence { width: SequenceWidth },
}

impl Token {
    pub fn text(literal: impl Into<String>) -> Self {
        Self::Text {
            literal: literal.into(),
        }
    }

    pub const fn random(bits: RandomBits) -> Self {
        Self::Random { bits }
    }

    pub const fn guid() -> Self {
        Self::Guid
    }

    pub const fn date(pattern: DatePattern) -> Self {
        Self::Date { pattern }
    }

    /// A `{SEQ}` token with the default width.
    pub const fn sequence() -> Self {
        Self::Sequence {
            width: SequenceWidth::Default,
        }
    }

    /// The token the editor inserts when a component of `kind` is added:
    /// empty text, 6 random bits, `yyyyMMdd`, or a default-width sequence.
    pub fn default_for(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Text => Self::text(String::new()),
            TokenKind::Random => Self::random(RandomBits::default()),
            TokenKind::Guid => Self::guid(),
            TokenKind::Date => Self::date(DatePattern::default()),
            TokenKind::Sequence => Self::sequence(),
        }
    }

    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Text { .. } => TokenKind::Text,
            Self::Random { .. } => TokenKind::Random,
            Self::Guid => TokenKind::Guid,
            Self::Date { .. } => TokenKind::Date,
            Self::Sequence { .. } => TokenKind::Sequence,
        }
    }

    /// Returns true for every kind except [`Token::Text`].
    pub const fn is_directive(&self) -> bool {
        self.kind().is_directive()
    }
}
