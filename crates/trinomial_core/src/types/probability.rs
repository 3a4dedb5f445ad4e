//! Step probability model for the trinomial walk.
//!
//! A walk moves `+1`, `0` or `-1` at every step. [`ProbabilityTriple`] holds
//! the weights of those three outcomes and guarantees, from construction
//! onwards, that they are finite, non-negative and sum to one.

use super::error::{Result, WalkError};

/// Maximum absolute deviation of `p_up + p_neutral + p_down` from one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// One of the three moves available at each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepOutcome {
    /// Move up one level (+1).
    Up,
    /// Stay on the current level (0).
    Neutral,
    /// Move down one level (-1).
    Down,
}

impl StepOutcome {
    /// All outcomes in `(up, neutral, down)` order.
    pub const ALL: [StepOutcome; 3] = [StepOutcome::Up, StepOutcome::Neutral, StepOutcome::Down];

    /// Level change produced by this outcome.
    #[inline]
    pub fn increment(self) -> i64 {
        match self {
            StepOutcome::Up => 1,
            StepOutcome::Neutral => 0,
            StepOutcome::Down => -1,
        }
    }

    /// Level change as `f64`, the element type of sampled paths.
    #[inline]
    pub fn increment_f64(self) -> f64 {
        self.increment() as f64
    }
}

/// Validated `(p_up, p_neutral, p_down)` probabilities.
///
/// Immutable once constructed. Invalid combinations are rejected by
/// [`new`](Self::new) or rescaled explicitly by
/// [`normalised`](Self::normalised); they are never accepted silently.
///
/// # Examples
///
/// ```rust
/// use trinomial_core::types::ProbabilityTriple;
///
/// let probs = ProbabilityTriple::new(0.5, 0.3, 0.2).unwrap();
/// assert_eq!(probs.p_up(), 0.5);
///
/// // Sums to 1.2
/// assert!(ProbabilityTriple::new(0.5, 0.6, 0.1).is_err());
///
/// // Integer percentage sliders: p_down is the remainder
/// let probs = ProbabilityTriple::from_percentages(33, 33).unwrap();
/// assert!((probs.p_down() - 0.34).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 3]", into = "[f64; 3]"))]
pub struct ProbabilityTriple {
    p_up: f64,
    p_neutral: f64,
    p_down: f64,
}

impl ProbabilityTriple {
    /// Creates a triple, rejecting invalid probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if any probability is
    /// negative or non-finite, or if the sum differs from one by more than
    /// [`PROBABILITY_TOLERANCE`].
    pub fn new(p_up: f64, p_neutral: f64, p_down: f64) -> Result<Self> {
        check_weight("p_up", p_up)?;
        check_weight("p_neutral", p_neutral)?;
        check_weight("p_down", p_down)?;

        let sum = p_up + p_neutral + p_down;
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(WalkError::invalid(
                "probs",
                format!(
                    "must sum to 1 within {:e}, got {} + {} + {} = {}",
                    PROBABILITY_TOLERANCE, p_up, p_neutral, p_down, sum
                ),
            ));
        }

        Ok(Self {
            p_up,
            p_neutral,
            p_down,
        })
    }

    /// Creates a triple by rescaling non-negative weights to sum to one.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if any weight is negative or
    /// non-finite, or if all weights are zero.
    pub fn normalised(w_up: f64, w_neutral: f64, w_down: f64) -> Result<Self> {
        check_weight("w_up", w_up)?;
        check_weight("w_neutral", w_neutral)?;
        check_weight("w_down", w_down)?;

        let total = w_up + w_neutral + w_down;
        if total <= 0.0 || !total.is_finite() {
            return Err(WalkError::invalid(
                "weights",
                format!("must have a positive finite sum, got {}", total),
            ));
        }

        Ok(Self {
            p_up: w_up / total,
            p_neutral: w_neutral / total,
            p_down: w_down / total,
        })
    }

    /// Creates a triple from integer percentages for the up and neutral
    /// moves; the down move takes the remainder `100 - up - neutral`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidParameter`] if `up + neutral > 100`.
    pub fn from_percentages(up: u32, neutral: u32) -> Result<Self> {
        let taken = up.checked_add(neutral).filter(|&t| t <= 100).ok_or_else(|| {
            WalkError::invalid(
                "percentages",
                format!("up ({}) + neutral ({}) must not exceed 100", up, neutral),
            )
        })?;
        let down = 100 - taken;

        Ok(Self {
            p_up: f64::from(up) / 100.0,
            p_neutral: f64::from(neutral) / 100.0,
            p_down: f64::from(down) / 100.0,
        })
    }

    /// Equal weight on every move.
    pub fn uniform() -> Self {
        let third = 1.0 / 3.0;
        Self {
            p_up: third,
            p_neutral: third,
            p_down: third,
        }
    }

    /// Probability of moving up.
    #[inline]
    pub fn p_up(&self) -> f64 {
        self.p_up
    }

    /// Probability of staying level.
    #[inline]
    pub fn p_neutral(&self) -> f64 {
        self.p_neutral
    }

    /// Probability of moving down.
    #[inline]
    pub fn p_down(&self) -> f64 {
        self.p_down
    }

    /// Probability of a given outcome.
    #[inline]
    pub fn probability(&self, outcome: StepOutcome) -> f64 {
        match outcome {
            StepOutcome::Up => self.p_up,
            StepOutcome::Neutral => self.p_neutral,
            StepOutcome::Down => self.p_down,
        }
    }

    /// Probabilities in `[p_up, p_neutral, p_down]` order.
    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.p_up, self.p_neutral, self.p_down]
    }

    /// Cumulative thresholds `(p_up, p_up + p_neutral)` for inverse-CDF
    /// sampling, rescaled by the triple's sum.
    ///
    /// A sum within tolerance of one but not exactly one leaves no mass to
    /// an outcome whose probability is zero: with `p_down = 0` the second
    /// threshold is exactly 1.
    #[inline]
    pub fn thresholds(&self) -> (f64, f64) {
        let up_or_neutral = self.p_up + self.p_neutral;
        let total = up_or_neutral + self.p_down;
        (self.p_up / total, up_or_neutral / total)
    }

    /// Maps a uniform variate in `[0, 1)` to an outcome by inverse CDF.
    #[inline]
    pub fn outcome_for_uniform(&self, u: f64) -> StepOutcome {
        let (up, up_or_neutral) = self.thresholds();
        if u < up {
            StepOutcome::Up
        } else if u < up_or_neutral {
            StepOutcome::Neutral
        } else {
            StepOutcome::Down
        }
    }

    /// Returns `true` when one outcome carries all the probability mass.
    pub fn is_deterministic(&self) -> bool {
        self.as_array()
            .iter()
            .any(|&p| (p - 1.0).abs() <= PROBABILITY_TOLERANCE)
    }
}

impl Default for ProbabilityTriple {
    fn default() -> Self {
        Self::uniform()
    }
}

impl TryFrom<[f64; 3]> for ProbabilityTriple {
    type Error = WalkError;

    fn try_from(probs: [f64; 3]) -> Result<Self> {
        Self::new(probs[0], probs[1], probs[2])
    }
}

impl From<ProbabilityTriple> for [f64; 3] {
    fn from(probs: ProbabilityTriple) -> Self {
        probs.as_array()
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(WalkError::invalid(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(WalkError::invalid(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}
