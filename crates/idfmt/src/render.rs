use core::fmt::Write;

use chrono::{DateTime, Utc};
use uuid::Builder;

use crate::{DatePattern, Format, InventoryId, RandSource, RandomBits, SequenceWidth, Token};

/// Ordinal rendered for `{SEQ}` when no value was reserved (previews).
pub const PLACEHOLDER_SEQUENCE: u128 = 1;

/// The inputs of one render.
///
/// Time is sampled once when the context is built, so every `{DATE}` token in
/// the same render agrees.
#[derive(Debug, Clone)]
pub struct Context<'r, R> {
    inventory: Option<InventoryId>,
    now: DateTime<Utc>,
    rng: &'r R,
    sequence: Option<u64>,
}

impl<'r, R> Context<'r, R> {
    /// A context that has reserved nothing; `{SEQ}` renders the placeholder.
    pub fn preview(now: DateTime<Utc>, rng: &'r R) -> Self {
        Self {
            inventory: None,
            now,
            rng,
            sequence: None,
        }
    }

    /// A context for a committing render of `inventory`.
    ///
    /// `sequence` is the value reserved from the sequence store, or `None`
    /// when the format has no sequence token.
    pub fn commit(
        inventory: InventoryId,
        now: DateTime<Utc>,
        rng: &'r R,
        sequence: Option<u64>,
    ) -> Self {
        Self {
            inventory: Some(inventory),
            now,
            rng,
            sequence,
        }
    }

    pub fn inventory(&self) -> Option<InventoryId> {
        self.inventory
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// The 1-based ordinal shown for the reserved value.
    ///
    /// Computed in 128 bits so a counter that wrapped at `u64::MAX` still
    /// renders.
    pub fn ordinal(&self) -> u128 {
        self.sequence
            .map_or(PLACEHOLDER_SEQUENCE, |reserved| u128::from(reserved) + 1)
    }
}

/// Renders every token of `format` in order and concatenates the fragments.
///
/// Rendering is total: every way a format can be wrong is caught when it is
/// compiled.
pub fn render<R>(format: &Format, ctx: &Context<'_, R>) -> String
where
    R: RandSource<u64> + RandSource<u128>,
{
    let mut out = String::with_capacity(format.iter().map(estimated_len).sum());
    for token in format {
        render_token(token, ctx, &mut out);
    }
    out
}

/// Appends the rendering of a single token to `out`.
pub fn render_token<R>(token: &Token, ctx: &Context<'_, R>, out: &mut String)
where
    R: RandSource<u64> + RandSource<u128>,
{
    match token {
        Token::Text { literal } => out.push_str(literal),
        Token::Random { bits } => render_random(*bits, ctx.rng, out),
        Token::Guid => render_guid(ctx.rng, out),
        Token::Date { pattern } => render_date(*pattern, ctx.now, out),
        Token::Sequence { width } => render_sequence(ctx.ordinal(), *width, out),
    }
}

fn render_random<R: RandSource<u64>>(bits: RandomBits, rng: &R, out: &mut String) {
    let value = rng.rand() & bits.mask();
    crate::base36::push_base36(out, value, bits.width());
}

fn render_guid<R: RandSource<u128>>(rng: &R, out: &mut String) {
    let bytes = RandSource::<u128>::rand(rng).to_be_bytes();
    let uuid = Builder::from_random_bytes(bytes).into_uuid();
    out.push_str(uuid.hyphenated().encode_lower(&mut uuid::Uuid::encode_buffer()));
}

fn render_date(pattern: DatePattern, now: DateTime<Utc>, out: &mut String) {
    // Writing into a `String` cannot fail.
    let _ = write!(out, "{}", now.format(pattern.strftime()));
}

fn render_sequence(ordinal: u128, width: SequenceWidth, out: &mut String) {
    let _ = write!(out, "{ordinal:0>width$}", width = width.min_digits());
}

fn estimated_len(token: &Token) -> usize {
    match token {
        Token::Text { literal } => literal.len(),
        Token::Random { bits } => bits.width(),
        Token::Guid => uuid::fmt::Hyphenated::LENGTH,
        Token::Date { pattern } => pattern.as_str().len(),
        Token::Sequence { width } => width.min_digits(),
    }
}
