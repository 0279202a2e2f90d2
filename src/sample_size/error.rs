//----------------------------------------
// sample_size errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleSizeErr {
    #[error("hazard_ratio of exactly 1 has no defined event count (log hazard ratio is zero)")]
    UnitHazardRatio,
    #[error("hazard_ratio should be > 0; got {0}")]
    BadHazardRatio(f64),
    #[error("allocation_ratio should be > 0; got {0}")]
    BadAllocationRatio(f64),
    #[error("{field} should be in (0, 1); got {value}")]
    RateOutOfBounds { field: &'static str, value: f64 },
    #[error("correlation should be in [-1, 1]; got {0}")]
    CorrelationOutOfBounds(f64),
    #[error("correlation of +/-1 leaves zero adjusted variance; got {0}")]
    PerfectCorrelation(f64),
    #[error("{field} should be > 0; got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

impl Into<CtdesignErr> for SampleSizeErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::SampleSize(self)
    }
}
