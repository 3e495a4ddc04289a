use rand::{Rng, rng};

/// Where `{RANDOM}` and `{GUID}` tokens get their entropy.
///
/// A `u64` draw is masked down to the token's bit width before it is
/// base-36 encoded, so only its low bits matter. A `u128` draw supplies the
/// sixteen bytes of a GUID; the version and variant bits are overwritten.
/// Renders take one draw per token, in token order, which lets tests script
/// exact outputs.
///
/// # Example
/// ```
/// use idfmt::{AtomicSequenceStore, Engine, InventoryId, RandSource, SystemClock};
///
/// struct Zeros;
/// impl RandSource<u64> for Zeros {
///     fn rand(&self) -> u64 {
///         0
///     }
/// }
/// impl RandSource<u128> for Zeros {
///     fn rand(&self) -> u128 {
///         0
///     }
/// }
///
/// let engine = Engine::from_parts(AtomicSequenceStore::new(), SystemClock, Zeros);
/// let id = engine.generate(InventoryId::new(1), "{RANDOM:20}").unwrap();
/// assert_eq!(id, "0000");
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

impl<T, R: RandSource<T> + ?Sized> RandSource<T> for &R {
    fn rand(&self) -> T {
        (**self).rand()
    }
}

/// Draws from `rand`'s thread-local generator on every call.
///
/// Holds no state, so one value can sit in a shared [`crate::Engine`] and
/// serve every thread; each thread draws from its own generator.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

impl RandSource<u128> for ThreadRandom {
    fn rand(&self) -> u128 {
        rng().random()
    }
}
