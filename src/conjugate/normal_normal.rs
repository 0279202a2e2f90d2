use crate::conjugate::error::ConjugateErr;
use crate::dist::normal::NormalParams;
use crate::dist::std_normal::std_normal_quantile;
use crate::error::CtdesignErr;
use serde::Serialize;

/// Posterior of a Normal-Normal conjugate update, with the central 95%
/// credible interval of the effect
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NormalPosterior {
    pub posterior_mean: f64,
    pub posterior_var: f64,
    pub credible_interval_lower: f64,
    pub credible_interval_upper: f64,
}

/// Normal-Normal conjugate update by precision weighting:
/// posterior precision is the sum of prior and data precisions, and the
/// posterior mean is the precision-weighted average of the two means
pub fn normal_normal_update(
    prior: &NormalParams,
    data_mean: f64,
    data_variance: f64,
) -> Result<NormalPosterior, CtdesignErr> {
    if !(data_variance > 0.0) || !data_variance.is_finite() {
        return Err(ConjugateErr::NonPositiveVariance {
            field: "data_variance",
            value: data_variance,
        }
        .into());
    }

    let posterior_precision = prior.precision() + 1.0 / data_variance;
    let posterior_var = 1.0 / posterior_precision;
    let posterior_mean =
        posterior_var * (prior.mean * prior.precision() + data_mean / data_variance);

    let z = std_normal_quantile(0.975)?;
    Ok(NormalPosterior {
        posterior_mean,
        posterior_var,
        credible_interval_lower: posterior_mean - z * posterior_var.sqrt(),
        credible_interval_upper: posterior_mean + z * posterior_var.sqrt(),
    })
}
