//----------------------------------------
// search errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchErr {
    #[error("n_min should be >= 1 and <= n_max; got n_min {n_min}, n_max {n_max}")]
    BadGrid { n_min: usize, n_max: usize },
    #[error("n_step should be >= 1")]
    BadStep,
    #[error("{field} should be in (0, 1); got {value}")]
    RateOutOfBounds { field: &'static str, value: f64 },
    #[error("{field} should be > 0; got {value}")]
    BadPrior { field: &'static str, value: f64 },
    #[error("n_simulations should be >= {min}; got {got}")]
    TooFewSimulations { min: u32, got: u32 },
    #[error("count should be <= trials; got count {k}, trials {n}")]
    CountExceedsTrials { k: u64, n: u64 },
    #[error("trials should be > 0")]
    ZeroTrials,
    #[error("confidence should be in (0, 1); got {0}")]
    BadConfidence(f64),
}

impl Into<CtdesignErr> for SearchErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::Search(self)
    }
}
