//----------------------------------------
// sequential errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequentialErr {
    #[error("n_per_look was empty")]
    NoLooks,
    #[error("n_per_look should be strictly increasing and > 0; got {value} at look {index}")]
    BadLookSize { index: usize, value: u64 },
    #[error("{field} should be in (0, 1); got {value}")]
    ThresholdOutOfBounds { field: &'static str, value: f64 },
    #[error("futility_threshold should be below efficacy_threshold; got {futility} >= {efficacy}")]
    FutilityNotBelowEfficacy { futility: f64, efficacy: f64 },
    #[error("data_variance should be > 0; got {0}")]
    BadDataVariance(f64),
}

impl Into<CtdesignErr> for SequentialErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::Sequential(self)
    }
}

#[derive(Error, Debug)]
pub enum SpendingFcnErr {
    #[error("arguments to spending function should be in [0, 1]; got {0}")]
    OutOfBounds(f64),
    #[error("look fraction vector should end with 1.0; got {0}")]
    BadLastFraction(f64),
    #[error("look fraction vector was empty")]
    TimeVectorEmpty,
    #[error("total alpha spent should be in (0, 1); got {0}")]
    BadAlpha(f64),
}

impl Into<CtdesignErr> for SpendingFcnErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::SpendingFcn(self)
    }
}
