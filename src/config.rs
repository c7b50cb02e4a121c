// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Generator parameters.

use crate::alphabet::Alphabet;
use crate::error::ConstructionError;

/// Default ratio of step to distance above which interpolation halves its step.
pub const DEFAULT_SPREAD: f64 = 0.3;

/// Parameters shared by every operation of a generator.
///
/// Sizes below 1 are clamped to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    block_size: usize,
    step_size: usize,
    spread: f64,
    step_limit: bool,
}

impl Config {
    /// Block size 1, step size 1, spread 0.3, step limit enabled.
    pub fn new() -> Config {
        return Config {
            block_size: 1,
            step_size: 1,
            spread: DEFAULT_SPREAD,
            step_limit: true,
        };
    }

    /// Set the length granularity of keys.
    pub fn with_block_size(mut self, block_size: usize) -> Config {
        self.block_size = block_size.max(1);
        return self;
    }

    /// Set how many units `next` and `prev` move per call.
    pub fn with_step_size(mut self, step_size: usize) -> Config {
        self.step_size = step_size.max(1);
        return self;
    }

    /// Set the step/distance ratio above which interpolation halves its step.
    pub fn with_spread(mut self, spread: f64) -> Config {
        self.spread = spread;
        return self;
    }

    /// Require the step to fit inside one block (on by default).
    pub fn with_step_limit(mut self, step_limit: bool) -> Config {
        self.step_limit = step_limit;
        return self;
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        return self.block_size;
    }

    #[inline]
    pub fn step_size(&self) -> usize {
        return self.step_size;
    }

    #[inline]
    pub fn spread(&self) -> f64 {
        return self.spread;
    }

    #[inline]
    pub fn step_limit(&self) -> bool {
        return self.step_limit;
    }

    /// Check the parameters against an alphabet.
    pub fn validate(&self, alphabet: &Alphabet) -> Result<(), ConstructionError> {
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(ConstructionError::InvalidSpread { spread: self.spread });
        }
        if self.step_limit {
            let capacity = block_capacity(alphabet.radix(), self.block_size);
            if self.step_size as u128 >= capacity {
                return Err(ConstructionError::StepTooLarge {
                    step_size: self.step_size,
                    capacity,
                });
            }
        }
        return Ok(());
    }
}

impl Default for Config {
    fn default() -> Config {
        return Config::new();
    }
}

/// Number of distinct values one block holds, saturating at u128::MAX.
pub fn block_capacity(radix: usize, block_size: usize) -> u128 {
    let exponent = u32::try_from(block_size).unwrap_or(u32::MAX);
    return (radix as u128).saturating_pow(exponent);
}
