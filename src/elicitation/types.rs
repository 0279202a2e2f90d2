use crate::dist::beta::BetaParams;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EssBasedInputs {
    pub mean: f64,
    pub ess: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HistoricalInputs {
    pub n_events: u64,
    pub n_total: u64,
    pub discount_factor: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuantileMatchingInputs {
    pub quantiles: Vec<f64>,
    pub quantile_values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub enum ElicitationInputs {
    EssBased(EssBasedInputs),
    Historical(HistoricalInputs),
    QuantileMatching(QuantileMatchingInputs),
}

/// An elicited Beta prior with its summary statistics and a table of
/// fitted quantiles keyed "q05"-style
#[derive(Debug, Clone, Serialize)]
pub struct ElicitedPrior {
    pub alpha: f64,
    pub beta: f64,
    pub mean: f64,
    pub variance: f64,
    pub ess: f64,
    pub quantiles: BTreeMap<String, f64>,
    pub inputs: ElicitationInputs,
}

pub(crate) fn quantile_key(q: f64) -> String {
    format!("q{:02}", (q * 100.0).round() as u32)
}

pub(crate) fn elicited_from(
    prior: BetaParams,
    report_quantiles: &[f64],
    inputs: ElicitationInputs,
) -> ElicitedPrior {
    let quantiles = report_quantiles
        .iter()
        .map(|&q| (quantile_key(q), prior.quantile(q)))
        .collect();
    ElicitedPrior {
        alpha: prior.alpha,
        beta: prior.beta,
        mean: prior.mean(),
        variance: prior.variance(),
        ess: prior.ess(),
        quantiles,
        inputs,
    }
}

/// Quantiles reported when the caller did not name any
pub(crate) const DEFAULT_REPORT_QUANTILES: [f64; 5] = [0.05, 0.25, 0.50, 0.75, 0.95];
