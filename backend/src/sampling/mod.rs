//! Numeric sampling on top of a single-bit source
//!
//! [`BitSampler`] assembles bytes, words, bounded integers and floats purely
//! from repeated [`BitSource::next_bit`] calls. It never inspects generator
//! state, so it works identically over [`crate::Rule30Engine`] and
//! [`crate::PlatformBitSource`].
//!
//! # Bit order
//!
//! Multi-bit values are assembled LSB-first: the first bit drawn becomes bit 0.
//!
//! # Bounded integers
//!
//! `sample_below(bound)` draws `floor(log2(bound)) + 1` bits and rejects
//! results `>= bound`. Each draw is accepted with probability above 1/2, and
//! after [`MAX_REJECTION_ATTEMPTS`] rejections the call fails with
//! [`SamplingError::RetryLimitExceeded`] instead of looping forever.

mod rand_compat;

use thiserror::Error;
use tracing::warn;

use crate::rng::BitSource;

/// Rejection-sampling retry ceiling for [`BitSampler::sample_below`]
pub const MAX_REJECTION_ATTEMPTS: usize = 128;

/// Errors raised while sampling bounded values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamplingError {
    #[error("Bound must be positive")]
    ZeroBound,

    #[error("Empty range: min {min} must be less than max {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("Rejection sampling below {bound} exhausted {attempts} attempts")]
    RetryLimitExceeded { bound: u64, attempts: usize },
}

/// Wider values built from single bits.
///
/// Blanket-implemented for every [`BitSource`].
///
/// # Example
/// ```
/// use rule30_rng::{BitSampler, Rule30Engine};
///
/// let mut engine = Rule30Engine::new(12345, 255, 8).unwrap();
/// let die = engine.sample_range(1, 7).unwrap();
/// assert!((1..7).contains(&die));
///
/// let p = engine.sample_f64();
/// assert!((0.0..1.0).contains(&p));
/// ```
pub trait BitSampler: BitSource {
    /// Draw `count` bits into the low bits of a word, first bit at bit 0.
    ///
    /// # Panics
    /// Panics if `count > 64`.
    fn sample_bits(&mut self, count: u32) -> u64 {
        assert!(count <= u64::BITS, "cannot sample more than 64 bits");

        let mut value = 0u64;
        for i in 0..count {
            if self.next_bit() {
                value |= 1 << i;
            }
        }
        value
    }

    fn sample_bool(&mut self) -> bool {
        self.next_bit()
    }

    fn sample_u8(&mut self) -> u8 {
        self.sample_bits(u8::BITS) as u8
    }

    fn sample_u32(&mut self) -> u32 {
        self.sample_bits(u32::BITS) as u32
    }

    fn sample_u64(&mut self) -> u64 {
        self.sample_bits(u64::BITS)
    }

    /// Fill `dest` one byte at a time, front to back
    fn sample_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.sample_u8();
        }
    }

    /// Uniform integer in `[0, bound)` by rejection sampling
    ///
    /// # Errors
    /// [`SamplingError::ZeroBound`] if `bound == 0`;
    /// [`SamplingError::RetryLimitExceeded`] if every attempt was rejected.
    fn sample_below(&mut self, bound: u64) -> Result<u64, SamplingError> {
        if bound == 0 {
            return Err(SamplingError::ZeroBound);
        }

        // floor(log2(bound)) + 1
        let bits = u64::BITS - bound.leading_zeros();
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let candidate = self.sample_bits(bits);
            if candidate < bound {
                return Ok(candidate);
            }
        }

        warn!(
            bound,
            attempts = MAX_REJECTION_ATTEMPTS,
            "rejection sampling retry limit exhausted"
        );
        Err(SamplingError::RetryLimitExceeded {
            bound,
            attempts: MAX_REJECTION_ATTEMPTS,
        })
    }

    /// Uniform integer in `[min, max)`
    ///
    /// # Errors
    /// [`SamplingError::EmptyRange`] if `min >= max`, otherwise as
    /// [`sample_below`](Self::sample_below).
    fn sample_range(&mut self, min: i64, max: i64) -> Result<i64, SamplingError> {
        if min >= max {
            return Err(SamplingError::EmptyRange { min, max });
        }

        let span = max.wrapping_sub(min) as u64;
        let offset = self.sample_below(span)?;
        Ok(min.wrapping_add(offset as i64))
    }

    /// Uniform `f64` in `[0, 1)` from 53 bits
    fn sample_f64(&mut self) -> f64 {
        self.sample_bits(53) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform `f32` in `[0, 1)` from 24 bits
    fn sample_f32(&mut self) -> f32 {
        self.sample_bits(24) as f32 * (1.0 / (1u32 << 24) as f32)
    }
}

impl<T: BitSource + ?Sized> BitSampler for T {}
