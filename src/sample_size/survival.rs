use crate::dist::std_normal::std_normal_quantile;
use crate::error::CtdesignErr;
use crate::sample_size::error::SampleSizeErr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurvivalInputs {
    pub hazard_ratio: f64,
    pub alpha: f64,
    pub power: f64,
    /// Treatment : control allocation ratio r, so a fraction r / (1 + r)
    /// of subjects is randomized to treatment
    pub allocation_ratio: f64,
}

impl SurvivalInputs {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if !(self.hazard_ratio > 0.0) || !self.hazard_ratio.is_finite() {
            return Err(SampleSizeErr::BadHazardRatio(self.hazard_ratio).into());
        }
        if self.hazard_ratio == 1.0 {
            return Err(SampleSizeErr::UnitHazardRatio.into());
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
        if !(self.allocation_ratio > 0.0) || !self.allocation_ratio.is_finite() {
            return Err(SampleSizeErr::BadAllocationRatio(self.allocation_ratio).into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurvivalEvents {
    pub events_required: u64,
    pub log_hr: f64,
    pub z_alpha: f64,
    pub z_beta: f64,
    pub inputs: SurvivalInputs,
}

/// Schoenfeld approximation to the number of events a log-rank test needs:
/// events = ((z_alpha + z_beta) / ln(HR))^2 * (1 + r)^2 / r, with
/// two-sided z_alpha. A hazard ratio of 1 is rejected up front rather than
/// letting the division blow up.
pub fn schoenfeld_events(inputs: &SurvivalInputs) -> Result<SurvivalEvents, CtdesignErr> {
    inputs.validate()?;

    let z_alpha = std_normal_quantile(1.0 - inputs.alpha / 2.0)?;
    let z_beta = std_normal_quantile(inputs.power)?;
    let log_hr = inputs.hazard_ratio.ln();
    let r = inputs.allocation_ratio;

    let events = ((z_alpha + z_beta) / log_hr).powi(2) * (1.0 + r) * (1.0 + r) / r;

    Ok(SurvivalEvents {
        events_required: events.ceil() as u64,
        log_hr,
        z_alpha,
        z_beta,
        inputs: *inputs,
    })
}
