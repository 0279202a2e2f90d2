use crate::dist::beta::BetaParams;
use crate::elicitation::error::ElicitationErr;
use crate::elicitation::types::{elicited_from, ElicitationInputs, ElicitedPrior, QuantileMatchingInputs};
use crate::error::CtdesignErr;
use argmin::core::{CostFunction, Error as ArgminError, Executor, State};
use argmin::solver::neldermead::NelderMead;
use statrs::distribution::{Beta, ContinuousCDF};

// Out-of-domain simplex proposals get a large finite cost instead of an
// error so the solver walks back into alpha, beta > 0
const PENALTY: f64 = 1e12;

const MAX_ITERS: u64 = 10_000;

struct QuantileLoss<'a> {
    quantiles: &'a [f64],
    values: &'a [f64],
}

impl CostFunction for QuantileLoss<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, ArgminError> {
        let (alpha, beta) = (param[0], param[1]);
        if !(alpha > 0.0) || !(beta > 0.0) || !alpha.is_finite() || !beta.is_finite() {
            return Ok(PENALTY);
        }
        let dist = match Beta::new(alpha, beta) {
            Ok(dist) => dist,
            Err(_) => return Ok(PENALTY),
        };
        let loss = self
            .quantiles
            .iter()
            .zip(self.values.iter())
            .map(|(&q, &v)| {
                let fitted = dist.inverse_cdf(q);
                (fitted - v) * (fitted - v)
            })
            .sum();
        Ok(loss)
    }
}

fn validate(inputs: &QuantileMatchingInputs) -> Result<(), CtdesignErr> {
    if inputs.quantiles.is_empty() {
        return Err(ElicitationErr::QuantilesEmpty.into());
    }
    if inputs.quantiles.len() != inputs.quantile_values.len() {
        return Err(ElicitationErr::MismatchedQuantileLengths {
            quantiles: inputs.quantiles.len(),
            values: inputs.quantile_values.len(),
        }
        .into());
    }
    let mut previous = 0.0;
    for &q in &inputs.quantiles {
        if q <= previous || q >= 1.0 || !q.is_finite() {
            return Err(ElicitationErr::QuantileOutOfBounds(q).into());
        }
        previous = q;
    }
    let mut previous = 0.0;
    for &v in &inputs.quantile_values {
        if v <= previous || v >= 1.0 || !v.is_finite() {
            return Err(ElicitationErr::QuantileValueOutOfBounds(v).into());
        }
        previous = v;
    }
    Ok(())
}

/// Fit Beta(alpha, beta) so its quantiles match the elicited targets, by
/// Nelder-Mead on the summed squared quantile deviations from a simplex
/// around (2, 2). The loss surface is nearly flat along a ridge of
/// almost-equivalent fits, so two runs can land on different (alpha, beta)
/// that reproduce the target quantiles equally well; compare the fitted
/// quantiles, not the raw parameters.
pub fn fit_beta_to_quantiles(inputs: &QuantileMatchingInputs) -> Result<BetaParams, CtdesignErr> {
    validate(inputs)?;

    let cost = QuantileLoss {
        quantiles: &inputs.quantiles,
        values: &inputs.quantile_values,
    };
    let simplex = vec![vec![2.0, 2.0], vec![2.5, 2.0], vec![2.0, 2.5]];
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(1e-12)
        .map_err(|_| Into::<CtdesignErr>::into(ElicitationErr::NoConvergence))?;

    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
        .map_err(|_| Into::<CtdesignErr>::into(ElicitationErr::NoConvergence))?;

    let best = result
        .state()
        .get_best_param()
        .ok_or_else(|| Into::<CtdesignErr>::into(ElicitationErr::NoConvergence))?;

    BetaParams::new(best[0], best[1])
}

/// Quantile-matching elicitation: the fitted prior plus its quantile table
/// evaluated at the requested quantiles
pub fn quantile_matched_prior(
    inputs: &QuantileMatchingInputs,
) -> Result<ElicitedPrior, CtdesignErr> {
    let prior = fit_beta_to_quantiles(inputs)?;
    Ok(elicited_from(
        prior,
        &inputs.quantiles,
        ElicitationInputs::QuantileMatching(inputs.clone()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elicitation::types::quantile_key;

    fn fitted_quantiles_close(prior: &BetaParams, quantiles: &[f64], values: &[f64], tol: f64) {
        for (&q, &v) in quantiles.iter().zip(values.iter()) {
            let fitted = prior.quantile(q);
            assert!(
                (fitted - v).abs() < tol,
                "quantile {q}: fitted {fitted}, target {v}"
            );
        }
    }

    // Berry et al. (2010)-style elicitation: median about 0.25 with a
    // 90% interval of [0.10, 0.40]
    #[test]
    fn berry_phase_ii_prior() {
        let inputs = QuantileMatchingInputs {
            quantiles: vec![0.05, 0.50, 0.95],
            quantile_values: vec![0.10, 0.25, 0.40],
        };
        let prior = fit_beta_to_quantiles(&inputs).unwrap();
        fitted_quantiles_close(&prior, &inputs.quantiles, &inputs.quantile_values, 0.02);
    }

    #[test]
    fn tight_symmetric_prior() {
        let inputs = QuantileMatchingInputs {
            quantiles: vec![0.05, 0.50, 0.95],
            quantile_values: vec![0.40, 0.50, 0.60],
        };
        let prior = fit_beta_to_quantiles(&inputs).unwrap();
        fitted_quantiles_close(&prior, &inputs.quantiles, &inputs.quantile_values, 0.02);
        // A symmetric target should give a near-symmetric fit
        assert!((prior.mean() - 0.5).abs() < 0.02);
    }

    #[test]
    fn exact_beta_quantiles_recovered() {
        // Targets generated from Beta(3, 7); the fit should reproduce its
        // quantile table even if (alpha, beta) land elsewhere on the ridge
        let generator = BetaParams::new(3.0, 7.0).unwrap();
        let quantiles = vec![0.05, 0.25, 0.50, 0.75, 0.95];
        let values: Vec<f64> = quantiles.iter().map(|&q| generator.quantile(q)).collect();
        let inputs = QuantileMatchingInputs {
            quantiles: quantiles.clone(),
            quantile_values: values.clone(),
        };
        let prior = fit_beta_to_quantiles(&inputs).unwrap();
        fitted_quantiles_close(&prior, &quantiles, &values, 0.01);
    }

    #[test]
    fn elicited_response_reports_requested_quantiles() {
        let inputs = QuantileMatchingInputs {
            quantiles: vec![0.05, 0.50, 0.95],
            quantile_values: vec![0.10, 0.25, 0.40],
        };
        let elicited = quantile_matched_prior(&inputs).unwrap();
        assert_eq!(elicited.quantiles.len(), 3);
        assert!(elicited.quantiles.contains_key(&quantile_key(0.05)));
        assert!(elicited.quantiles.contains_key(&quantile_key(0.50)));
        assert!(elicited.quantiles.contains_key(&quantile_key(0.95)));
        assert!(elicited.ess > 0.0);
    }

    #[test]
    fn mismatched_lengths_error() {
        let inputs = QuantileMatchingInputs {
            quantiles: vec![0.05, 0.50, 0.95],
            quantile_values: vec![0.10, 0.25],
        };
        if let Err(e) = fit_beta_to_quantiles(&inputs) {
            assert_eq!(
                String::from(
                    "while eliciting prior: quantiles and quantile_values \
                     should have equal length; got 3 and 2"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn non_increasing_quantiles_error() {
        let inputs = QuantileMatchingInputs {
            quantiles: vec![0.50, 0.05],
            quantile_values: vec![0.25, 0.40],
        };
        assert!(fit_beta_to_quantiles(&inputs).is_err());
    }
}
