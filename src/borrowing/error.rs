//----------------------------------------
// borrowing errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BorrowingErr {
    #[error("discount_factor should be in [0, 1]; got {0}")]
    DiscountOutOfBounds(f64),
    #[error("studies should contain at least 2 entries; got {0}")]
    TooFewStudies(usize),
    #[error("study {index}: n_events should be <= n_total; got n_events {n_events}, n_total {n_total}")]
    EventsExceedTotal {
        index: usize,
        n_events: u64,
        n_total: u64,
    },
    #[error("study {index}: n_total should be > 0")]
    EmptyStudy { index: usize },
    #[error("robust_weight should be in [0, 1]; got {0}")]
    RobustWeightOutOfBounds(f64),
    #[error("{field} should be > 0; got {value}")]
    BadBasePrior { field: &'static str, value: f64 },
}

impl Into<CtdesignErr> for BorrowingErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::Borrowing(self)
    }
}
