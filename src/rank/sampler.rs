use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{RankError, Result};

/// Draws items from discrete distributions.
///
/// The estimators only ever ask for an index, so they do not care which
/// random source sits behind it. A distribution that is drawn from many
/// times is turned into a [`DiscreteSampler::Prepared`] once and reused.
pub trait DiscreteSampler {
    /// Ready-to-draw form of one distribution.
    type Prepared;

    /// Prepares `weights` for repeated draws.
    fn prepare(&mut self, weights: &[f64]) -> Result<Self::Prepared>;

    /// Index in `0..len`, every index equally likely.
    fn pick_uniform(&mut self, len: usize) -> Result<usize>;

    /// Index into the prepared distribution, chosen with probability
    /// proportional to its weight.
    fn pick(&mut self, prepared: &Self::Prepared) -> Result<usize>;

    /// One-off draw from `weights`.
    fn pick_weighted(&mut self, weights: &[f64]) -> Result<usize> {
        let prepared = self.prepare(weights)?;
        self.pick(&prepared)
    }
}

/// [`DiscreteSampler`] backed by any [`rand::Rng`].
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<ChaCha8Rng> {
    /// Reproducible sampler for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> DiscreteSampler for RngSampler<R> {
    type Prepared = WeightedIndex<f64>;

    fn prepare(&mut self, weights: &[f64]) -> Result<Self::Prepared> {
        WeightedIndex::new(weights).map_err(|e| {
            RankError::InvalidParameter(format!("unusable sampling weights: {}", e))
        })
    }

    fn pick_uniform(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(RankError::InvalidParameter(
                "cannot pick from an empty range".to_string(),
            ));
        }
        Ok(self.rng.gen_range(0..len))
    }

    fn pick(&mut self, prepared: &Self::Prepared) -> Result<usize> {
        Ok(prepared.sample(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_never_picks_zero_weight() -> Result<()> {
        let mut sampler = RngSampler::seeded(7);
        for _ in 0..1000 {
            let index = sampler.pick_weighted(&[0.0, 0.3, 0.0, 0.7])?;
            assert!(index == 1 || index == 3);
        }
        Ok(())
    }

    #[test]
    fn test_weighted_follows_weights() -> Result<()> {
        let mut sampler = RngSampler::seeded(42);
        let mut counts = [0usize; 2];
        for _ in 0..20_000 {
            counts[sampler.pick_weighted(&[0.2, 0.8])?] += 1;
        }
        let share = counts[1] as f64 / 20_000.0;
        assert!((share - 0.8).abs() < 0.02, "share was {}", share);
        Ok(())
    }

    #[test]
    fn test_uniform_stays_in_range() -> Result<()> {
        let mut sampler = RngSampler::seeded(1);
        for _ in 0..500 {
            assert!(sampler.pick_uniform(3)? < 3);
        }
        assert_eq!(sampler.pick_uniform(1)?, 0);
        assert!(sampler.pick_uniform(0).is_err());
        Ok(())
    }

    #[test]
    fn test_rejects_unusable_weights() {
        let mut sampler = RngSampler::seeded(3);
        assert!(sampler.pick_weighted(&[]).is_err());
        assert!(sampler.pick_weighted(&[0.0, 0.0]).is_err());
        assert!(sampler.pick_weighted(&[-1.0, 2.0]).is_err());
    }

    #[test]
    fn test_prepared_matches_one_off_draws() -> Result<()> {
        let weights = [0.5, 0.0, 0.25, 0.25];
        let mut first = RngSampler::seeded(5);
        let mut second = RngSampler::seeded(5);
        let prepared = first.prepare(&weights)?;
        for _ in 0..200 {
            assert_eq!(first.pick(&prepared)?, second.pick_weighted(&weights)?);
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_same_draws() -> Result<()> {
        let mut first = RngSampler::seeded(99);
        let mut second = RngSampler::seeded(99);
        for _ in 0..100 {
            assert_eq!(
                first.pick_weighted(&[0.1, 0.2, 0.3, 0.4])?,
                second.pick_weighted(&[0.1, 0.2, 0.3, 0.4])?
            );
        }
        Ok(())
    }
}
