//----------------------------------------
// elicitation errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElicitationErr {
    #[error("mean should be in (0, 1); got {0}")]
    MeanOutOfBounds(f64),
    #[error("ess should be > 0; got {0}")]
    BadEss(f64),
    #[error("discount_factor should be in [0, 1]; got {0}")]
    DiscountOutOfBounds(f64),
    #[error("n_events should be <= n_total; got n_events {n_events}, n_total {n_total}")]
    EventsExceedTotal { n_events: u64, n_total: u64 },
    #[error("n_total should be > 0")]
    EmptyStudy,
    #[error("quantiles was empty")]
    QuantilesEmpty,
    #[error("quantiles and quantile_values should have equal length; got {quantiles} and {values}")]
    MismatchedQuantileLengths { quantiles: usize, values: usize },
    #[error("quantiles should be strictly increasing within (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("quantile_values should be strictly increasing within (0, 1); got {0}")]
    QuantileValueOutOfBounds(f64),
    #[error("quantile matching search failed to produce a usable optimum")]
    NoConvergence,
}

impl Into<CtdesignErr> for ElicitationErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::Elicitation(self)
    }
}
