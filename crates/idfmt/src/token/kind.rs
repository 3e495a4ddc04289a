use core::fmt;

/// The payload-free discriminant of a [`crate::Token`].
///
/// Caps and error reports are expressed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum TokenKind {
    Text,
    Random,
    Guid,
    Date,
    Sequence,
}

impl TokenKind {
    /// Every kind, in the order the editor lists them.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Random,
        Self::Guid,
        Self::Date,
        Self::Sequence,
    ];

    /// The directive head used in the canonical format string.
    ///
    /// `Text` has no directive; its name is only used in messages.
    pub const fn head(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Random => "RANDOM",
            Self::Guid => "GUID",
            Self::Date => "DATE",
            Self::Sequence => "SEQ",
        }
    }

    /// Resolves a directive head. Matching is case-sensitive and never
    /// yields [`TokenKind::Text`].
    pub fn from_head(head: &str) -> Option<Self> {
        match head {
            "RANDOM" => Some(Self::Random),
            "GUID" => Some(Self::Guid),
            "DATE" => Some(Self::Date),
            "SEQ" => Some(Self::Sequence),
            _ => None,
        }
    }

    /// Returns true for every kind written as a `{...}` directive, i.e. all
    /// but [`TokenKind::Text`]. Only directive kinds are capped per kind.
    pub const fn is_directive(self) -> bool {
        !matches!(self, Self::Text)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_resolve_case_sensitively() {
        for kind in TokenKind::ALL.into_iter().skip(1) {
            assert_eq!(TokenKind::from_head(kind.head()), Some(kind));
        }
        assert_eq!(TokenKind::from_head("TEXT"), None);
        assert_eq!(TokenKind::from_head("seq"), None);
        assert_eq!(TokenKind::from_head("Guid"), None);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, kind) in TokenKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
