use crate::error::CtdesignErr;
use crate::search::error::SearchErr;
use serde::Serialize;

/// Fewer simulations than this gives rate estimates too noisy to gate on
pub const MIN_SIMULATIONS: u32 = 100;

/// Candidate sample sizes n_min..=n_max stepped by n_step, searched in
/// ascending order
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchGrid {
    pub n_min: usize,
    pub n_max: usize,
    pub n_step: usize,
}

impl SearchGrid {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if self.n_min < 1 || self.n_min > self.n_max {
            return Err(SearchErr::BadGrid {
                n_min: self.n_min,
                n_max: self.n_max,
            }
            .into());
        }
        if self.n_step < 1 {
            return Err(SearchErr::BadStep.into());
        }
        Ok(())
    }

    pub fn candidates(&self) -> impl Iterator<Item = usize> {
        (self.n_min..=self.n_max).step_by(self.n_step)
    }
}

/// Ceiling on estimated type I error and floor on estimated power
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchTargets {
    pub type1_error: f64,
    pub power: f64,
}

impl SearchTargets {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if self.type1_error <= 0.0 || self.type1_error >= 1.0 {
            return Err(SearchErr::RateOutOfBounds {
                field: "target_type1_error",
                value: self.type1_error,
            }
            .into());
        }
        if self.power <= 0.0 || self.power >= 1.0 {
            return Err(SearchErr::RateOutOfBounds {
                field: "target_power",
                value: self.power,
            }
            .into());
        }
        Ok(())
    }
}

/// Which data-generating rate a simulated trial draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hypothesis {
    Null,
    Alternative,
}

/// Result of one grid search. `constraints_met = false` means the grid was
/// exhausted without any candidate clearing both targets; the caller
/// should widen the grid rather than treat this as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub recommended_n: usize,
    pub type1_error: f64,
    pub power: f64,
    pub constraints_met: bool,
    pub n_simulations: u32,
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_candidates_ascend() {
        let grid = SearchGrid {
            n_min: 10,
            n_max: 50,
            n_step: 15,
        };
        let candidates: Vec<usize> = grid.candidates().collect();
        assert_eq!(candidates, vec![10, 25, 40]);
    }

    #[test]
    fn degenerate_grid_is_single_candidate() {
        let grid = SearchGrid {
            n_min: 30,
            n_max: 30,
            n_step: 10,
        };
        assert_eq!(grid.candidates().collect::<Vec<usize>>(), vec![30]);
    }

    #[test]
    fn inverted_grid_error() {
        let grid = SearchGrid {
            n_min: 100,
            n_max: 20,
            n_step: 10,
        };
        if let Err(e) = grid.validate() {
            assert_eq!(
                String::from(
                    "while running sample size search: n_min should be >= 1 \
                     and <= n_max; got n_min 100, n_max 20"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
