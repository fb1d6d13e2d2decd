//! `rand` ecosystem integration
//!
//! Lets a [`Rule30Engine`] stand in wherever a [`rand::RngCore`] is expected,
//! while keeping every output a pure function of the engine's bit stream.

use rand::RngCore;

use super::BitSampler;
use crate::automaton::Rule30Engine;

impl RngCore for Rule30Engine {
    fn next_u32(&mut self) -> u32 {
        self.sample_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.sample_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.sample_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.sample_bytes(dest);
        Ok(())
    }
}
