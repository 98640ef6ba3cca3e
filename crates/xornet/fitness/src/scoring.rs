use crate::environment::{CLAIMED, EMPTY};
use crate::error::{FitnessError, FitnessResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which scoring rule to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessVariant {
    /// Tallies and bonuses only, plus a little tie-breaking noise.
    #[default]
    Discrete,
    /// Adds a graded closeness-to-zero reward for every output byte.
    Continuous,
}

impl std::str::FromStr for FitnessVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discrete" => Ok(Self::Discrete),
            "continuous" => Ok(Self::Continuous),
            other => Err(format!("unknown fitness variant: {}", other)),
        }
    }
}

/// Bonus and penalty constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Added per zero-valued output byte.
    pub zero_bonus: i64,
    /// Added for the first byte equal to 1.
    pub select_bonus: i64,
    /// Subtracted for every further byte equal to 1.
    pub illegal_move_penalty: i64,
    /// Added when the move is committed to the board.
    pub commit_bonus: i64,
    /// Exclusive upper bound of the uniform noise; 0 disables it.
    pub noise_ceiling: i64,
}

impl ScoringWeights {
    pub fn discrete() -> Self {
        Self {
            zero_bonus: 14,
            select_bonus: 100,
            illegal_move_penalty: 3,
            commit_bonus: 1_000,
            noise_ceiling: 10,
        }
    }

    pub fn continuous() -> Self {
        Self {
            zero_bonus: 14,
            select_bonus: 749,
            illegal_move_penalty: 3,
            commit_bonus: 234_567,
            noise_ceiling: 0,
        }
    }

    pub fn for_variant(variant: FitnessVariant) -> Self {
        match variant {
            FitnessVariant::Discrete => Self::discrete(),
            FitnessVariant::Continuous => Self::continuous(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::discrete()
    }
}

/// Result of scoring one output vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub score: i64,
    /// Cell written to `environment_out`, if the move was committed.
    pub committed: Option<usize>,
}

/// Scores network outputs against a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    pub variant: FitnessVariant,
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(variant: FitnessVariant) -> Self {
        Self {
            variant,
            weights: ScoringWeights::for_variant(variant),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Score `output` against `environment`.
    ///
    /// All three slices must have the same length; otherwise nothing is
    /// scored or written and [`FitnessError::LengthMismatch`] is returned.
    /// On a legal winning move the chosen cell of `environment_out` is set
    /// to [`CLAIMED`].
    pub fn step<R: Rng + ?Sized>(
        &self,
        environment: &[u8],
        output: &[u8],
        environment_out: &mut [u8],
        rng: &mut R,
    ) -> FitnessResult<StepOutcome> {
        if environment.len() != output.len() || environment.len() != environment_out.len() {
            return Err(FitnessError::LengthMismatch {
                environment: environment.len(),
                output: output.len(),
                environment_out: environment_out.len(),
            });
        }

        let w = &self.weights;
        let mut score: i64 = 0;
        let mut zeroes: usize = 0;
        let mut chosen: Option<usize> = None;

        for (i, &n) in output.iter().enumerate() {
            if self.variant == FitnessVariant::Continuous {
                let s = 255 - i64::from(n);
                score += s * s - 1;
            }
            match n {
                0 => zeroes += 1,
                1 if chosen.is_some() => score -= w.illegal_move_penalty,
                1 => {
                    chosen = Some(i);
                    score += w.select_bonus;
                }
                _ => score -= i64::from(n),
            }
        }
        score += zeroes as i64 * w.zero_bonus;

        let committed = chosen.filter(|&m| zeroes + 1 == output.len() && environment[m] == EMPTY);
        if let Some(m) = committed {
            environment_out[m] = CLAIMED;
            score += w.commit_bonus;
        }

        if w.noise_ceiling > 0 {
            score += rng.gen_range(0..w.noise_ceiling);
        }

        Ok(StepOutcome { score, committed })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(FitnessVariant::default())
    }
}
