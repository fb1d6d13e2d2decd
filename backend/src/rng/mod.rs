//! Single-bit random sources
//!
//! Every generator in this crate exposes exactly one primitive: [`BitSource::next_bit`].
//! All wider values (bytes, words, bounded integers, floats) are assembled from it
//! by the [`crate::sampling`] layer.
//!
//! CRITICAL: Only [`crate::Rule30Engine`] is reproducible across platforms.
//! [`PlatformBitSource`] delegates to the host RNG and is not.

mod platform;

pub use platform::PlatformBitSource;

/// A producer of single random bits.
///
/// # Example
/// ```
/// use rule30_rng::{BitSource, Rule30Engine};
///
/// let mut engine = Rule30Engine::new(12345, 255, 8).unwrap();
/// let bit: bool = engine.next_bit();
/// # let _ = bit;
/// ```
pub trait BitSource {
    /// Produce the next bit of the stream.
    fn next_bit(&mut self) -> bool;
}

impl<T: BitSource + ?Sized> BitSource for &mut T {
    #[inline]
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

impl<T: BitSource + ?Sized> BitSource for Box<T> {
    #[inline]
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}
