const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RADIX: u64 = 36;

/// Number of base-36 characters needed to represent every value below
/// `2^bits`.
///
/// This is `ceil(bits / log2(36))`, computed exactly as the smallest `w` with
/// `36^w >= 2^bits`.
///
/// # Panics
///
/// Panics (at compile time in const contexts) if `bits > 64`.
pub(crate) const fn width_for_bits(bits: u32) -> usize {
    assert!(bits <= 64, "base36 widths are defined for at most 64 bits");
    let target = 1_u128 << bits;
    let mut capacity = 1_u128;
    let mut width = 0;
    while capacity < target {
        capacity *= RADIX as u128;
        width += 1;
    }
    width
}

/// Encodes `value` as zero-padded base 36 into `buf`, most significant digit
/// first, filling the whole buffer.
///
/// The caller must size `buf` so that `value < 36^buf.len()`; higher digits
/// that do not fit are dropped.
fn encode_base36(mut value: u64, buf: &mut [u8]) {
    debug_assert!(
        buf.len() >= 13 || value < RADIX.pow(buf.len() as u32),
        "value {value} does not fit in {} base36 digits",
        buf.len()
    );
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(value % RADIX) as usize];
        value /= RADIX;
    }
}

/// Appends `value` as exactly `width` zero-padded base-36 characters.
pub(crate) fn push_base36(out: &mut String, value: u64, width: usize) {
    // u64::MAX needs 13 base-36 digits
    let mut buf = [b'0'; 13];
    let width = width.min(buf.len());
    let digits = &mut buf[..width];
    encode_base36(value, digits);
    for &b in digits.iter() {
        out.push(char::from(b));
    }
}
