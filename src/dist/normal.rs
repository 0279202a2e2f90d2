use crate::dist::error::NormalDistErr;
use crate::error::CtdesignErr;
use serde::Serialize;

/// Parameters of a Normal(mean, variance) distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalParams {
    pub mean: f64,
    pub variance: f64,
}

impl NormalParams {
    pub fn new(mean: f64, variance: f64) -> Result<Self, CtdesignErr> {
        if !(variance > 0.0) || !variance.is_finite() {
            return Err(NormalDistErr::BadVariance(variance).into());
        }
        Ok(NormalParams { mean, variance })
    }

    pub fn precision(&self) -> f64 {
        1.0 / self.variance
    }
}
