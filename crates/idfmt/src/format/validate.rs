#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{ArgumentIssue, Format, FormatError, Policy, Result, Token, TokenKind};

impl Format {
    /// Checks this format against `policy`.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidArgument`] if a text literal contains `{`; the
    ///   offset is the literal's byte position in the serialized format.
    /// - [`FormatError::TooManyOfKind`] for the first directive kind, in
    ///   [`TokenKind::ALL`] order, over `policy.max_per_kind`. Text runs are
    ///   not capped per kind.
    /// - [`FormatError::TooManyTokens`] if the format is longer than
    ///   `policy.max_tokens`.
    pub fn validate(&self, policy: &Policy) -> Result<()> {
        let mut counts = [0_usize; TokenKind::ALL.len()];
        let mut offset = 0;

        for token in self {
            match token {
                Token::Text { literal } if literal.contains('{') => {
                    return Err(FormatError::InvalidArgument {
                        kind: TokenKind::Text,
                        offset,
                        issue: ArgumentIssue::ReservedCharacter,
                    });
                }
                _ => {}
            }
            counts[token.kind().index()] += 1;
            offset += token.canonical_len();
        }

        if let Some(kind) = TokenKind::ALL
            .into_iter()
            .filter(|kind| kind.is_directive())
            .find(|kind| counts[kind.index()] > policy.max_per_kind)
        {
            return Err(FormatError::TooManyOfKind {
                kind,
                count: counts[kind.index()],
                max: policy.max_per_kind,
            });
        }

        if self.len() > policy.max_tokens {
            return Err(FormatError::TooManyTokens {
                count: self.len(),
                max: policy.max_tokens,
            });
        }

        Ok(())
    }

    /// Parses `text` and validates the result against `policy`.
    ///
    /// # Errors
    ///
    /// Any error from [`Format::parse`] or [`Format::validate`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(policy)))]
    pub fn compile(text: &str, policy: &Policy) -> Result<Self> {
        let compiled = Self::parse(text).and_then(|format| {
            format.validate(policy)?;
            Ok(format)
        });

        #[cfg(feature = "tracing")]
        if let Err(err) = &compiled {
            tracing::debug!(%err, "rejected format");
        }

        compiled
    }
}
