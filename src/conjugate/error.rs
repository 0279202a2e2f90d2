//----------------------------------------
// conjugate errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConjugateErr {
    #[error("events should be <= n; got events {events}, n {n}")]
    EventsExceedTotal { events: u64, n: u64 },
    #[error("{field} should be > 0; got {value}")]
    NonPositiveVariance { field: &'static str, value: f64 },
}

impl Into<CtdesignErr> for ConjugateErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::Conjugate(self)
    }
}
