use crate::dist::error::BetaDistErr;
use crate::error::CtdesignErr;
use serde::Serialize;
use statrs::distribution::{Beta, ContinuousCDF};

/// Parameters of a Beta(alpha, beta) distribution, the prior/posterior
/// family for every binary-endpoint calculation in this crate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BetaParams {
    pub alpha: f64,
    pub beta: f64,
}

impl BetaParams {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, CtdesignErr> {
        if !(alpha > 0.0) || !alpha.is_finite() {
            return Err(BetaDistErr::BadAlpha(alpha).into());
        }
        if !(beta > 0.0) || !beta.is_finite() {
            return Err(BetaDistErr::BadBeta(beta).into());
        }
        Ok(BetaParams { alpha, beta })
    }

    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Effective sample size of the prior, alpha + beta
    pub fn ess(&self) -> f64 {
        self.alpha + self.beta
    }

    pub fn variance(&self) -> f64 {
        let ess = self.ess();
        self.alpha * self.beta / (ess * ess * (ess + 1.0))
    }

    /// Defined only for alpha > 1 and beta > 1
    pub fn mode(&self) -> Option<f64> {
        if self.alpha > 1.0 && self.beta > 1.0 {
            Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
        } else {
            None
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        let dist = Beta::new(self.alpha, self.beta).unwrap();
        dist.cdf(x)
    }

    pub fn quantile(&self, p: f64) -> f64 {
        let dist = Beta::new(self.alpha, self.beta).unwrap();
        dist.inverse_cdf(p)
    }
}
