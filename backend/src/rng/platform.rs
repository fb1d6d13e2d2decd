//! Platform-backed bit source
//!
//! Wraps any [`rand::RngCore`] behind the [`BitSource`] contract. Output depends
//! on the host generator, so sequences are NOT reproducible across platforms or
//! `rand` versions. Use [`crate::Rule30Engine`] whenever replay matters.

use rand::rngs::ThreadRng;
use rand::RngCore;

use super::BitSource;

/// Bit source delegating to a platform random number generator.
///
/// Bits are drawn 64 at a time from the wrapped generator and handed out
/// least-significant first.
///
/// # Example
/// ```
/// use rule30_rng::{BitSource, PlatformBitSource};
///
/// let mut source = PlatformBitSource::new();
/// let _bit = source.next_bit();
/// ```
#[derive(Debug, Clone)]
pub struct PlatformBitSource<R = ThreadRng> {
    rng: R,
    /// Undelivered bits of the last word, LSB next
    pending: u64,
    /// Number of valid bits left in `pending`
    remaining: u32,
}

impl PlatformBitSource<ThreadRng> {
    /// Create a source backed by the thread-local RNG
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for PlatformBitSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> PlatformBitSource<R> {
    /// Wrap an existing generator
    ///
    /// # Example
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rule30_rng::PlatformBitSource;
    ///
    /// let source = PlatformBitSource::from_rng(StdRng::seed_from_u64(7));
    /// # let _ = source;
    /// ```
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            pending: 0,
            remaining: 0,
        }
    }

    /// Return the wrapped generator, discarding any buffered bits
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> BitSource for PlatformBitSource<R> {
    fn next_bit(&mut self) -> bool {
        if self.remaining == 0 {
            self.pending = self.rng.next_u64();
            self.remaining = u64::BITS;
        }
        let bit = self.pending & 1 == 1;
        self.pending >>= 1;
        self.remaining -= 1;
        bit
    }
}
