use crate::dist::std_normal::std_normal_quantile;
use crate::error::CtdesignErr;
use crate::sample_size::error::SampleSizeErr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CupedInputs {
    pub baseline_mean: f64,
    pub baseline_std: f64,
    /// Minimum detectable effect relative to the baseline mean, e.g. 0.05
    /// for a 5% lift
    pub mde: f64,
    /// Correlation between the pre-experiment covariate and the metric
    pub correlation: f64,
    pub alpha: f64,
    pub power: f64,
}

impl CupedInputs {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if !(self.baseline_mean > 0.0) || !self.baseline_mean.is_finite() {
            return Err(SampleSizeErr::NonPositive {
                field: "baseline_mean",
                value: self.baseline_mean,
            }
            .into());
        }
        if !(self.baseline_std > 0.0) || !self.baseline_std.is_finite() {
            return Err(SampleSizeErr::NonPositive {
                field: "baseline_std",
                value: self.baseline_std,
            }
            .into());
        }
        if !(self.mde > 0.0) || !self.mde.is_finite() {
            return Err(SampleSizeErr::NonPositive {
                field: "mde",
                value: self.mde,
            }
            .into());
        }
        if !(-1.0..=1.0).contains(&self.correlation) || !self.correlation.is_finite() {
            return Err(SampleSizeErr::CorrelationOutOfBounds(self.correlation).into());
        }
        if self.correlation.abs() == 1.0 {
            return Err(SampleSizeErr::PerfectCorrelation(self.correlation).into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(SampleSizeErr::RateOutOfBounds {
                field: "alpha",
                value: self.alpha,
            }
            .into());
        }
        if self.power <= 0.0 || self.power >= 1.0 {
            return Err(SampleSizeErr::RateOutOfBounds {
                field: "power",
                value: self.power,
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CupedAdjustment {
    pub n_original: u64,
    pub n_adjusted: u64,
    pub variance_reduction_factor: f64,
    pub inputs: CupedInputs,
}

/// CUPED covariate adjustment: regressing out a pre-experiment covariate
/// with correlation rho shrinks the metric variance by 1 - rho^2, so the
/// per-arm sample size of the standard two-sample z formula shrinks by the
/// same factor. Only |rho| matters.
pub fn cuped_adjustment(inputs: &CupedInputs) -> Result<CupedAdjustment, CtdesignErr> {
    inputs.validate()?;

    let delta = inputs.baseline_mean * inputs.mde;
    let z_alpha = std_normal_quantile(1.0 - inputs.alpha / 2.0)?;
    let z_beta = std_normal_quantile(inputs.power)?;

    let n_of_std = |std: f64| 2.0 * ((z_alpha + z_beta) * std / delta).powi(2);

    let variance_reduction_factor = 1.0 - inputs.correlation * inputs.correlation;
    let n_original = n_of_std(inputs.baseline_std);
    let n_adjusted = n_of_std(inputs.baseline_std * variance_reduction_factor.sqrt());

    Ok(CupedAdjustment {
        n_original: n_original.ceil() as u64,
        n_adjusted: n_adjusted.ceil() as u64,
        variance_reduction_factor,
        inputs: *inputs,
    })
}
