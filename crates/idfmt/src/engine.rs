#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    AtomicSequenceStore, Context, Format, InventoryId, Policy, RandSource, Result, SequenceStore,
    SystemClock, ThreadRandom, TimeSource, render,
};

/// The outcome of a preview: one rendering plus independent extra samples.
///
/// Previews never reserve sequence values, so `{SEQ}` always shows the
/// placeholder `00001`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewResult {
    pub preview: String,
    /// Further renderings with fresh random, GUID and time samples; empty
    /// when the format has no tokens.
    pub examples: Vec<String>,
}

/// Compiles format strings and renders identifiers from them.
///
/// `S` holds the per-inventory sequence counters, `T` supplies the time for
/// `{DATE}` and `R` supplies randomness for `{RANDOM}` and `{GUID}`. Parsing
/// and rendering are pure, so an engine can be shared across threads (e.g.
/// in an [`Arc`](std::sync::Arc)) whenever its parts are `Sync`.
///
/// # Example
/// ```
/// use idfmt::{Engine, FormatError, InventoryId};
///
/// let engine = Engine::new();
/// let id = engine
///     .generate(InventoryId::new(1), "INV-{RANDOM:20}-{SEQ}")
///     .unwrap();
/// assert_eq!(id.len(), "INV-XXXX-00001".len());
/// assert!(id.ends_with("-00001"));
///
/// let err = engine.generate(InventoryId::new(1), "BAD-{RANDOM:7}").unwrap_err();
/// assert!(matches!(err, FormatError::InvalidArgument { .. }));
/// ```
#[derive(Debug, Default)]
pub struct Engine<S = AtomicSequenceStore, T = SystemClock, R = ThreadRandom> {
    store: S,
    clock: T,
    rng: R,
    policy: Policy,
}

impl Engine {
    /// An engine with an in-memory [`AtomicSequenceStore`], the system clock,
    /// the thread-local RNG and the default [`Policy`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, T, R> Engine<S, T, R>
where
    S: SequenceStore,
    T: TimeSource,
    R: RandSource<u64> + RandSource<u128>,
{
    /// Creates an engine from explicit parts and the default [`Policy`].
    pub fn from_parts(store: S, clock: T, rng: R) -> Self {
        Self {
            store,
            clock,
            rng,
            policy: Policy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses and validates `text` under this engine's policy.
    ///
    /// # Errors
    ///
    /// See [`Format::compile`].
    pub fn compile(&self, text: &str) -> Result<Format> {
        Format::compile(text, &self.policy)
    }

    /// Renders the identifier for a new item of `inventory`.
    ///
    /// The inventory's sequence counter advances by exactly one if and only
    /// if the format contains a `{SEQ}` token; otherwise no state changes.
    ///
    /// # Errors
    ///
    /// Any compile error for `text`. Nothing is reserved when compiling
    /// fails.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn generate(&self, inventory: InventoryId, text: &str) -> Result<String> {
        let format = self.compile(text)?;
        Ok(self.generate_format(inventory, &format))
    }

    /// Committing render of an already compiled format.
    pub fn generate_format(&self, inventory: InventoryId, format: &Format) -> String {
        let now = self.clock.now();
        let sequence = format
            .has_sequence()
            .then(|| self.store.reserve(inventory));
        let ctx = Context::commit(inventory, now, &self.rng, sequence);
        render(format, &ctx)
    }

    /// Renders `text` without reserving anything.
    ///
    /// Safe to call any number of times, including for formats that were
    /// never saved.
    ///
    /// # Errors
    ///
    /// Any compile error for `text`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn preview(&self, text: &str) -> Result<PreviewResult> {
        let format = self.compile(text)?;
        Ok(self.preview_format(&format))
    }

    /// Non-committing render of an already compiled format.
    pub fn preview_format(&self, format: &Format) -> PreviewResult {
        let sample = || render(format, &Context::preview(self.clock.now(), &self.rng));

        let preview = sample();
        let examples = if format.is_empty() {
            Vec::new()
        } else {
            (0..self.policy.preview_examples).map(|_| sample()).collect()
        };

        PreviewResult { preview, examples }
    }
}
