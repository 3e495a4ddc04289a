/// Default cap on tokens of any single kind.
pub const DEFAULT_MAX_PER_KIND: usize = 3;

/// Default cap on the total number of tokens in a format.
pub const DEFAULT_MAX_TOKENS: usize = 20;

/// Default number of extra renderings returned by a preview.
pub const DEFAULT_PREVIEW_EXAMPLES: usize = 3;

/// Limits applied when compiling a format, and preview sizing.
///
/// ```
/// use idfmt::Policy;
///
/// let policy = Policy::default().with_max_tokens(10).with_preview_examples(5);
/// assert_eq!(policy.max_per_kind, 3);
/// assert_eq!(policy.max_tokens, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Policy {
    /// Maximum tokens of any one kind.
    pub max_per_kind: usize,
    /// Maximum tokens in total. Bounds rendering cost.
    pub max_tokens: usize,
    /// Number of additional renderings in a [`crate::PreviewResult`].
    pub preview_examples: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_per_kind: DEFAULT_MAX_PER_KIND,
            max_tokens: DEFAULT_MAX_TOKENS,
            preview_examples: DEFAULT_PREVIEW_EXAMPLES,
        }
    }
}

impl Policy {
    #[must_use]
    pub const fn with_max_per_kind(mut self, max_per_kind: usize) -> Self {
        self.max_per_kind = max_per_kind;
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn with_preview_examples(mut self, preview_examples: usize) -> Self {
        self.preview_examples = preview_examples;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let policy: Policy = serde_json::from_str(r#"{"max_tokens":8}"#).unwrap();
        assert_eq!(policy, Policy::default().with_max_tokens(8));
    }
}
