use crate::dist::normal::NormalParams;
use crate::dist::std_normal::std_normal_quantile;
use crate::error::CtdesignErr;
use crate::sequential::error::SequentialErr;
use serde::Serialize;

/// A continuous-endpoint sequential monitoring plan: cumulative sample
/// sizes at each look, a normal prior on the effect, and posterior
/// probability thresholds for stopping
#[derive(Debug, Clone, Serialize)]
pub struct SequentialInputs {
    pub n_per_look: Vec<u64>,
    pub prior: NormalParams,
    pub data_variance: f64,
    pub efficacy_threshold: f64,
    pub futility_threshold: Option<f64>,
}

impl SequentialInputs {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if self.n_per_look.is_empty() {
            return Err(SequentialErr::NoLooks.into());
        }
        let mut previous = 0;
        for (index, &n_k) in self.n_per_look.iter().enumerate() {
            if n_k <= previous {
                return Err(SequentialErr::BadLookSize { index, value: n_k }.into());
            }
            previous = n_k;
        }
        if !(self.data_variance > 0.0) || !self.data_variance.is_finite() {
            return Err(SequentialErr::BadDataVariance(self.data_variance).into());
        }
        if self.efficacy_threshold <= 0.0 || self.efficacy_threshold >= 1.0 {
            return Err(SequentialErr::ThresholdOutOfBounds {
                field: "efficacy_threshold",
                value: self.efficacy_threshold,
            }
            .into());
        }
        if let Some(futility) = self.futility_threshold {
            if futility <= 0.0 || futility >= 1.0 {
                return Err(SequentialErr::ThresholdOutOfBounds {
                    field: "futility_threshold",
                    value: futility,
                }
                .into());
            }
            if futility >= self.efficacy_threshold {
                return Err(SequentialErr::FutilityNotBelowEfficacy {
                    futility,
                    efficacy: self.efficacy_threshold,
                }
                .into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SequentialDesign {
    pub efficacy_boundaries: Vec<f64>,
    pub futility_boundaries: Vec<f64>,
    pub information_fractions: Vec<f64>,
    pub n_looks: usize,
    pub inputs: SequentialInputs,
}

/// Z-score stopping boundary at one look, from the posterior-probability
/// threshold formula of Zhou & Ji (2024):
///
/// c_k = Phi^-1(gamma) * sqrt(1 + sigma^2 / (n_k * nu^2))
///       - mu * sqrt(sigma^2) / (sqrt(n_k) * nu^2)
///
/// As nu^2 grows the prior washes out and c_k approaches Phi^-1(gamma),
/// the fixed-sample frequentist critical value.
pub fn z_boundary(
    prior: &NormalParams,
    data_variance: f64,
    n_k: u64,
    gamma: f64,
) -> Result<f64, CtdesignErr> {
    let n_k = n_k as f64;
    let inflation = (1.0 + data_variance / (n_k * prior.variance)).sqrt();
    let prior_pull = prior.mean * data_variance.sqrt() / (n_k.sqrt() * prior.variance);
    Ok(std_normal_quantile(gamma)? * inflation - prior_pull)
}

/// Efficacy (and optionally futility) z-boundaries at every look, plus
/// the information fraction of each look relative to the final one
pub fn monitoring_boundaries(inputs: &SequentialInputs) -> Result<SequentialDesign, CtdesignErr> {
    inputs.validate()?;

    let efficacy_boundaries = inputs
        .n_per_look
        .iter()
        .map(|&n_k| {
            z_boundary(
                &inputs.prior,
                inputs.data_variance,
                n_k,
                inputs.efficacy_threshold,
            )
        })
        .collect::<Result<Vec<f64>, CtdesignErr>>()?;

    let futility_boundaries = match inputs.futility_threshold {
        Some(futility) => inputs
            .n_per_look
            .iter()
            .map(|&n_k| z_boundary(&inputs.prior, inputs.data_variance, n_k, futility))
            .collect::<Result<Vec<f64>, CtdesignErr>>()?,
        None => Vec::new(),
    };

    let n_final = *inputs.n_per_look.last().unwrap() as f64;
    let information_fractions = inputs
        .n_per_look
        .iter()
        .map(|&n_k| n_k as f64 / n_final)
        .collect();

    Ok(SequentialDesign {
        efficacy_boundaries,
        futility_boundaries,
        information_fractions,
        n_looks: inputs.n_per_look.len(),
        inputs: inputs.clone(),
    })
}
