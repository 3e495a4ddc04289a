use crate::{Format, FormatError, Policy, Result, Token, TokenKind};

/// Editing operations used by format builders.
///
/// Caps are enforced on insertion, so a format assembled only through
/// [`Format::try_push`] never needs to be rejected later for its size.
impl Format {
    /// Appends `token` if the result stays within `policy`.
    ///
    /// # Errors
    ///
    /// [`FormatError::TooManyOfKind`] or [`FormatError::TooManyTokens`] if the
    /// append would exceed a cap; the format is left unchanged. Text is only
    /// bounded by the total cap.
    pub fn try_push(&mut self, token: Token, policy: &Policy) -> Result<()> {
        let kind = token.kind();
        let count = self.count(kind) + 1;
        if kind.is_directive() && count > policy.max_per_kind {
            return Err(FormatError::TooManyOfKind {
                kind,
                count,
                max: policy.max_per_kind,
            });
        }
        if self.len() + 1 > policy.max_tokens {
            return Err(FormatError::TooManyTokens {
                count: self.len() + 1,
                max: policy.max_tokens,
            });
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Appends the default token of `kind`, see [`Token::default_for`].
    ///
    /// # Errors
    ///
    /// As [`Format::try_push`].
    pub fn push_kind(&mut self, kind: TokenKind, policy: &Policy) -> Result<()> {
        self.try_push(Token::default_for(kind), policy)
    }

    /// Removes and returns the token at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Token> {
        (index < self.len()).then(|| self.tokens.remove(index))
    }

    /// Swaps the token at `index` with its predecessor. Returns whether
    /// anything moved.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.len() {
            return false;
        }
        self.tokens.swap(index, index - 1);
        true
    }

    /// Swaps the token at `index` with its successor. Returns whether
    /// anything moved.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.len() {
            return false;
        }
        self.tokens.swap(index, index + 1);
        true
    }

    /// Drag-and-drop reorder: takes the token at `from` out and reinserts it
    /// at `to`, where `to` indexes the list as it was before the removal.
    ///
    /// Dropping onto a later slot lands the token just before the drop
    /// target, so dropping a token onto its immediate successor is a no-op.
    /// Returns whether the order changed.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.len() || to >= self.len() {
            return false;
        }
        let target = if from < to { to - 1 } else { to };
        if target == from {
            return false;
        }
        let token = self.tokens.remove(from);
        self.tokens.insert(target, token);
        true
    }

    /// Replaces the contents with the standard `ITEM-{SEQ}` format.
    pub fn reset(&mut self) {
        *self = Self::standard();
    }
}
