//! Categorical distribution over `{Up, Neutral, Down}`.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use trinomial_core::{ProbabilityTriple, StepOutcome, WalkError};

/// Single-step outcome distribution backed by [`WeightedIndex`].
///
/// Used when outcomes are drawn one at a time; bulk sampling maps a
/// pre-filled uniform buffer through [`ProbabilityTriple::outcome_for_uniform`]
/// instead.
#[derive(Debug, Clone)]
pub struct StepDistribution {
    index: WeightedIndex<f64>,
}

impl StepDistribution {
    /// Builds the distribution from a validated triple.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if the weights are rejected by
    /// `WeightedIndex` (unreachable for a validated triple).
    pub fn new(probs: &ProbabilityTriple) -> Result<Self, WalkError> {
        let index = WeightedIndex::new(probs.as_array())
            .map_err(|e| WalkError::invalid("probs", e.to_string()))?;
        Ok(Self { index })
    }
}

impl Distribution<StepOutcome> for StepDistribution {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StepOutcome {
        StepOutcome::ALL[self.index.sample(rng)]
    }
}
