//----------------------------------------
// dist errors
//----------------------------------------
use crate::error::CtdesignErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("variance should be > 0; got {0}")]
    BadVariance(f64),
}

impl Into<CtdesignErr> for NormalDistErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::NormalDist(self)
    }
}

#[derive(Error, Debug)]
pub enum BetaDistErr {
    #[error("alpha should be > 0; got {0}")]
    BadAlpha(f64),
    #[error("beta should be > 0; got {0}")]
    BadBeta(f64),
}

impl Into<CtdesignErr> for BetaDistErr {
    fn into(self) -> CtdesignErr {
        CtdesignErr::BetaDist(self)
    }
}
