use crate::conjugate::beta_binomial::beta_binomial_update;
use crate::dist::beta::BetaParams;
use crate::error::CtdesignErr;
use crate::search::engine::search_grid;
use crate::search::error::SearchErr;
use crate::search::types::{Hypothesis, SearchGrid, SearchTargets, MIN_SIMULATIONS};
use rand::distributions::Distribution;
use rand::{rngs, SeedableRng};
use serde::Serialize;
use statrs::distribution::Binomial;

/// Single-arm binary design with a posterior-probability decision rule:
/// declare success when P(theta > null_rate | data) >= decision_threshold
#[derive(Debug, Clone, Serialize)]
pub struct SingleArmInputs {
    pub prior_alpha: f64,
    pub prior_beta: f64,
    pub null_rate: f64,
    pub alternative_rate: f64,
    pub decision_threshold: f64,
    pub target_type1_error: f64,
    pub target_power: f64,
    pub n_simulations: u32,
    pub grid: SearchGrid,
    pub seed: Option<u64>,
}

impl SingleArmInputs {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        for (field, value) in [
            ("prior_alpha", self.prior_alpha),
            ("prior_beta", self.prior_beta),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SearchErr::BadPrior { field, value }.into());
            }
        }
        for (field, value) in [
            ("null_rate", self.null_rate),
            ("alternative_rate", self.alternative_rate),
            ("decision_threshold", self.decision_threshold),
        ] {
            if value <= 0.0 || value >= 1.0 || !value.is_finite() {
                return Err(SearchErr::RateOutOfBounds { field, value }.into());
            }
        }
        if self.n_simulations < MIN_SIMULATIONS {
            return Err(SearchErr::TooFewSimulations {
                min: MIN_SIMULATIONS,
                got: self.n_simulations,
            }
            .into());
        }
        self.grid.validate()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleArmDesignSummary {
    pub recommended_n: usize,
    pub type1_error: f64,
    pub power: f64,
    pub constraints_met: bool,
    /// Analytical posterior at the recommended n assuming the alternative
    /// rate generates round(alternative_rate * n) events
    pub posterior_at_alt_alpha: f64,
    pub posterior_at_alt_beta: f64,
    pub n_simulations: u32,
    pub seed: u64,
    pub inputs: SingleArmInputs,
}

/// Smallest n in the grid whose simulated type I error and power clear the
/// targets. No closed-form power exists for the posterior-probability
/// rule, so both rates come from seeded Monte Carlo.
pub fn single_arm_sample_size(
    inputs: &SingleArmInputs,
) -> Result<SingleArmDesignSummary, CtdesignErr> {
    inputs.validate()?;

    let prior = BetaParams::new(inputs.prior_alpha, inputs.prior_beta)?;
    let targets = SearchTargets {
        type1_error: inputs.target_type1_error,
        power: inputs.target_power,
    };

    let simulate = |hypothesis: Hypothesis, n: usize, trial_seed: u64| {
        let rate = match hypothesis {
            Hypothesis::Null => inputs.null_rate,
            Hypothesis::Alternative => inputs.alternative_rate,
        };
        let mut rng = rngs::StdRng::seed_from_u64(trial_seed);
        let events = Binomial::new(rate, n as u64).unwrap().sample(&mut rng) as u64;
        // events <= n by construction, so the update cannot fail
        let posterior = beta_binomial_update(&prior, events, n as u64).unwrap();
        let prob_superior = 1.0 - posterior.cdf(inputs.null_rate);
        prob_superior >= inputs.decision_threshold
    };

    let outcome = search_grid(
        &inputs.grid,
        &targets,
        inputs.n_simulations,
        inputs.seed,
        simulate,
    )?;

    let expected_events = (inputs.alternative_rate * outcome.recommended_n as f64).round() as u64;
    let posterior_at_alt =
        beta_binomial_update(&prior, expected_events, outcome.recommended_n as u64)?;

    Ok(SingleArmDesignSummary {
        recommended_n: outcome.recommended_n,
        type1_error: outcome.type1_error,
        power: outcome.power,
        constraints_met: outcome.constraints_met,
        posterior_at_alt_alpha: posterior_at_alt.alpha,
        posterior_at_alt_beta: posterior_at_alt.beta,
        n_simulations: outcome.n_simulations,
        seed: outcome.seed,
        inputs: inputs.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::binomial_ci::{mc_rate_lower_bound, mc_rate_upper_bound};

    fn berry_phase_ii(seed: u64) -> SingleArmInputs {
        // Berry et al. (2010)-style phase II: null 0.10, alternative 0.25
        SingleArmInputs {
            prior_alpha: 1.0,
            prior_beta: 1.0,
            null_rate: 0.10,
            alternative_rate: 0.25,
            decision_threshold: 0.95,
            target_type1_error: 0.05,
            target_power: 0.80,
            n_simulations: 2000,
            grid: SearchGrid {
                n_min: 10,
                n_max: 120,
                n_step: 5,
            },
            seed: Some(seed),
        }
    }

    #[test]
    fn berry_design_meets_constraints() {
        let summary = single_arm_sample_size(&berry_phase_ii(12345)).unwrap();
        assert!(summary.constraints_met);
        assert!(summary.recommended_n >= 15 && summary.recommended_n <= 120);
        // Certify the estimates through the Clopper-Pearson gates rather
        // than trusting raw MC noise
        let type1_ub = mc_rate_upper_bound(summary.type1_error, 2000).unwrap();
        let power_lb = mc_rate_lower_bound(summary.power, 2000).unwrap();
        assert!(type1_ub <= 0.05 + 0.02);
        assert!(power_lb >= 0.80 - 0.08);
    }

    #[test]
    fn fixed_seed_reproduces_bit_for_bit() {
        let first = single_arm_sample_size(&berry_phase_ii(12345)).unwrap();
        let second = single_arm_sample_size(&berry_phase_ii(12345)).unwrap();
        assert_eq!(first.recommended_n, second.recommended_n);
        assert_eq!(first.type1_error, second.type1_error);
        assert_eq!(first.power, second.power);
        assert_eq!(first.constraints_met, second.constraints_met);
    }

    #[test]
    fn posterior_at_alt_matches_conjugate_update() {
        let summary = single_arm_sample_size(&berry_phase_ii(12345)).unwrap();
        let expected_events = (0.25 * summary.recommended_n as f64).round();
        assert!((summary.posterior_at_alt_alpha - (1.0 + expected_events)).abs() < 1e-12);
        assert!(
            (summary.posterior_at_alt_beta
                - (1.0 + summary.recommended_n as f64 - expected_events))
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn higher_target_power_needs_no_fewer_subjects() {
        let mut lenient = berry_phase_ii(99);
        lenient.alternative_rate = 0.30;
        lenient.n_simulations = 1000;
        lenient.grid = SearchGrid {
            n_min: 10,
            n_max: 200,
            n_step: 5,
        };
        let mut strict = lenient.clone();
        lenient.target_power = 0.70;
        strict.target_power = 0.90;
        let low = single_arm_sample_size(&lenient).unwrap();
        let high = single_arm_sample_size(&strict).unwrap();
        assert!(high.recommended_n >= low.recommended_n);
    }

    #[test]
    fn larger_effect_needs_no_more_subjects() {
        let mut small_effect = berry_phase_ii(99);
        small_effect.n_simulations = 1000;
        small_effect.grid = SearchGrid {
            n_min: 10,
            n_max: 200,
            n_step: 5,
        };
        let mut large_effect = small_effect.clone();
        small_effect.alternative_rate = 0.20;
        large_effect.alternative_rate = 0.40;
        let small = single_arm_sample_size(&small_effect).unwrap();
        let large = single_arm_sample_size(&large_effect).unwrap();
        assert!(large.recommended_n <= small.recommended_n);
    }

    #[test]
    fn higher_threshold_needs_no_fewer_subjects() {
        let mut base = berry_phase_ii(7);
        base.alternative_rate = 0.30;
        base.n_simulations = 1000;
        let mut strict = base.clone();
        base.decision_threshold = 0.95;
        strict.decision_threshold = 0.99;
        let low = single_arm_sample_size(&base).unwrap();
        let high = single_arm_sample_size(&strict).unwrap();
        assert!(high.recommended_n >= low.recommended_n);
    }

    #[test]
    fn strong_prior_boundary_case_runs() {
        let summary = single_arm_sample_size(&SingleArmInputs {
            prior_alpha: 100.0,
            prior_beta: 100.0,
            null_rate: 0.30,
            alternative_rate: 0.60,
            decision_threshold: 0.95,
            target_type1_error: 0.05,
            target_power: 0.80,
            n_simulations: 500,
            grid: SearchGrid {
                n_min: 10,
                n_max: 50,
                n_step: 10,
            },
            seed: Some(5),
        })
        .unwrap();
        assert!(summary.recommended_n >= 10);
    }

    #[test]
    fn weak_prior_boundary_case_runs() {
        let summary = single_arm_sample_size(&SingleArmInputs {
            prior_alpha: 0.01,
            prior_beta: 0.01,
            null_rate: 0.10,
            alternative_rate: 0.30,
            decision_threshold: 0.95,
            target_type1_error: 0.05,
            target_power: 0.80,
            n_simulations: 500,
            grid: SearchGrid {
                n_min: 10,
                n_max: 100,
                n_step: 10,
            },
            seed: Some(5),
        })
        .unwrap();
        assert!(summary.recommended_n >= 10);
    }

    #[test]
    fn negative_prior_error_names_field() {
        let mut inputs = berry_phase_ii(1);
        inputs.prior_alpha = -1.0;
        if let Err(e) = single_arm_sample_size(&inputs) {
            assert_eq!(
                String::from(
                    "while running sample size search: prior_alpha should be > 0; got -1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn degenerate_null_rate_error_names_field() {
        let mut inputs = berry_phase_ii(1);
        inputs.null_rate = 1.0;
        if let Err(e) = single_arm_sample_size(&inputs) {
            assert_eq!(
                String::from("while running sample size search: null_rate should be in (0, 1); got 1"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn too_few_simulations_error() {
        let mut inputs = berry_phase_ii(1);
        inputs.n_simulations = 10;
        if let Err(e) = single_arm_sample_size(&inputs) {
            assert_eq!(
                String::from(
                    "while running sample size search: n_simulations should be >= 100; got 10"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
