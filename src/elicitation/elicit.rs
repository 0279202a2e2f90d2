use crate::dist::beta::BetaParams;
use crate::elicitation::error::ElicitationErr;
use crate::elicitation::types::{
    elicited_from, ElicitationInputs, ElicitedPrior, EssBasedInputs, HistoricalInputs,
    DEFAULT_REPORT_QUANTILES,
};
use crate::error::CtdesignErr;

/// Elicit a Beta prior from a stated mean and effective sample size:
/// alpha = mean * ess, beta = (1 - mean) * ess
pub fn ess_based_prior(inputs: &EssBasedInputs) -> Result<ElicitedPrior, CtdesignErr> {
    if inputs.mean <= 0.0 || inputs.mean >= 1.0 || !inputs.mean.is_finite() {
        return Err(ElicitationErr::MeanOutOfBounds(inputs.mean).into());
    }
    if !(inputs.ess > 0.0) || !inputs.ess.is_finite() {
        return Err(ElicitationErr::BadEss(inputs.ess).into());
    }
    let prior = BetaParams::new(inputs.mean * inputs.ess, (1.0 - inputs.mean) * inputs.ess)?;
    Ok(elicited_from(
        prior,
        &DEFAULT_REPORT_QUANTILES,
        ElicitationInputs::EssBased(*inputs),
    ))
}

/// Elicit a Beta prior from one historical study via power-prior
/// discounting of a flat base: alpha = 1 + discount * events,
/// beta = 1 + discount * (n - events)
pub fn historical_prior(inputs: &HistoricalInputs) -> Result<ElicitedPrior, CtdesignErr> {
    if !(0.0..=1.0).contains(&inputs.discount_factor) || !inputs.discount_factor.is_finite() {
        return Err(ElicitationErr::DiscountOutOfBounds(inputs.discount_factor).into());
    }
    if inputs.n_total == 0 {
        return Err(ElicitationErr::EmptyStudy.into());
    }
    if inputs.n_events > inputs.n_total {
        return Err(ElicitationErr::EventsExceedTotal {
            n_events: inputs.n_events,
            n_total: inputs.n_total,
        }
        .into());
    }
    let events = inputs.n_events as f64;
    let non_events = (inputs.n_total - inputs.n_events) as f64;
    let prior = BetaParams::new(
        1.0 + inputs.discount_factor * events,
        1.0 + inputs.discount_factor * non_events,
    )?;
    Ok(elicited_from(
        prior,
        &DEFAULT_REPORT_QUANTILES,
        ElicitationInputs::Historical(*inputs),
    ))
}
