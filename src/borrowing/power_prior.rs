use crate::borrowing::error::BorrowingErr;
use crate::dist::beta::BetaParams;
use crate::error::CtdesignErr;
use serde::Serialize;

/// Power prior discounting of a single historical study. `discount_factor`
/// of 0 keeps the base prior untouched; 1 pools the historical data fully.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PowerPriorInputs {
    pub historical_events: u64,
    pub historical_n: u64,
    pub discount_factor: f64,
    pub base_alpha: f64,
    pub base_beta: f64,
}

impl PowerPriorInputs {
    /// Power prior on a flat Beta(1, 1) base
    pub fn flat_base(historical_events: u64, historical_n: u64, discount_factor: f64) -> Self {
        PowerPriorInputs {
            historical_events,
            historical_n,
            discount_factor,
            base_alpha: 1.0,
            base_beta: 1.0,
        }
    }

    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if !(0.0..=1.0).contains(&self.discount_factor) || !self.discount_factor.is_finite() {
            return Err(BorrowingErr::DiscountOutOfBounds(self.discount_factor).into());
        }
        if self.historical_n == 0 {
            return Err(BorrowingErr::EmptyStudy { index: 0 }.into());
        }
        if self.historical_events > self.historical_n {
            return Err(BorrowingErr::EventsExceedTotal {
                index: 0,
                n_events: self.historical_events,
                n_total: self.historical_n,
            }
            .into());
        }
        if !(self.base_alpha > 0.0) {
            return Err(BorrowingErr::BadBasePrior {
                field: "base_alpha",
                value: self.base_alpha,
            }
            .into());
        }
        if !(self.base_beta > 0.0) {
            return Err(BorrowingErr::BadBasePrior {
                field: "base_beta",
                value: self.base_beta,
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BorrowingSummary {
    pub effective_alpha: f64,
    pub effective_beta: f64,
    pub ess_total: f64,
    pub ess_from_historical: f64,
    pub prior_mean: f64,
    pub inputs: PowerPriorInputs,
}

/// Discounted borrowing: alpha = base_alpha + discount * events,
/// beta = base_beta + discount * (n - events). The borrowed effective
/// sample size is discount * n by construction.
pub fn power_prior(inputs: &PowerPriorInputs) -> Result<BorrowingSummary, CtdesignErr> {
    inputs.validate()?;

    let events = inputs.historical_events as f64;
    let non_events = (inputs.historical_n - inputs.historical_events) as f64;
    let effective = BetaParams::new(
        inputs.base_alpha + inputs.discount_factor * events,
        inputs.base_beta + inputs.discount_factor * non_events,
    )?;

    Ok(BorrowingSummary {
        effective_alpha: effective.alpha,
        effective_beta: effective.beta,
        ess_total: effective.ess(),
        ess_from_historical: inputs.discount_factor * inputs.historical_n as f64,
        prior_mean: effective.mean(),
        inputs: *inputs,
    })
}
