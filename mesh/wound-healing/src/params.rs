//! Parameters for wound line tension.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WoundError, WoundResult};

/// Which of two traced boundary loops to treat as the wound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoopPick {
    /// The loop traced from the lowest-indexed boundary node.
    First,
    /// The loop traced from the lowest-indexed boundary node not on the first.
    Second,
}

/// Rule choosing the wound loop from the node counts of the two loops.
pub type LoopChoice = fn(first_len: usize, second_len: usize) -> LoopPick;

/// Pick the loop with fewer nodes. Ties go to the first loop.
///
/// The wound rim is usually much shorter than the outer edge of the tissue.
///
/// # Example
///
/// ```
/// use wound_healing::{LoopPick, shorter_loop};
///
/// assert_eq!(shorter_loop(24, 8), LoopPick::Second);
/// assert_eq!(shorter_loop(8, 8), LoopPick::First);
/// ```
#[must_use]
pub const fn shorter_loop(first_len: usize, second_len: usize) -> LoopPick {
    if second_len < first_len {
        LoopPick::Second
    } else {
        LoopPick::First
    }
}

/// Pick the loop with more nodes. Ties go to the first loop.
///
/// For wounds larger than the surrounding tissue, e.g. a thin ring of cells
/// around a large opening.
#[must_use]
pub const fn longer_loop(first_len: usize, second_len: usize) -> LoopPick {
    if second_len > first_len {
        LoopPick::Second
    } else {
        LoopPick::First
    }
}

/// Parameters for wound line tension.
///
/// # Example
///
/// ```
/// use wound_healing::{WoundParams, longer_loop};
///
/// let params = WoundParams::default();
/// assert!((params.tension_parameter - 0.12).abs() < 1e-12);
///
/// let params = WoundParams::default()
///     .tension_parameter(1.0)
///     .loop_choice(longer_loop);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WoundParams {
    /// Line tension along the wound rim. Must be finite and non-negative.
    pub tension_parameter: f64,

    /// Rule choosing which boundary loop is the wound.
    pub loop_choice: LoopChoice,
}

impl Default for WoundParams {
    fn default() -> Self {
        Self {
            tension_parameter: Self::DEFAULT_TENSION_PARAMETER,
            loop_choice: shorter_loop,
        }
    }
}

impl WoundParams {
    /// Default wound line tension.
    pub const DEFAULT_TENSION_PARAMETER: f64 = 0.12;

    /// Create params with a custom tension and the default loop choice.
    #[must_use]
    pub fn with_tension(tension_parameter: f64) -> Self {
        Self {
            tension_parameter,
            ..Self::default()
        }
    }

    /// Set the tension parameter.
    #[must_use]
    pub const fn tension_parameter(mut self, tension: f64) -> Self {
        self.tension_parameter = tension;
        self
    }

    /// Set the loop choice rule.
    #[must_use]
    pub const fn loop_choice(mut self, choice: LoopChoice) -> Self {
        self.loop_choice = choice;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`WoundError::InvalidParams`] if the tension is negative or not
    /// finite.
    pub fn validate(&self) -> WoundResult<()> {
        if !self.tension_parameter.is_finite() || self.tension_parameter < 0.0 {
            return Err(WoundError::invalid_params(format!(
                "tension parameter must be finite and non-negative, got {}",
                self.tension_parameter
            )));
        }
        Ok(())
    }
}
