use crate::conjugate::beta_binomial::beta_binomial_update;
use crate::dist::beta::BetaParams;
use crate::dist::std_normal::std_normal_cdf;
use crate::error::CtdesignErr;
use crate::search::engine::search_grid;
use crate::search::error::SearchErr;
use crate::search::types::{Hypothesis, SearchGrid, SearchTargets, MIN_SIMULATIONS};
use rand::distributions::Distribution;
use rand::{rngs, SeedableRng};
use serde::Serialize;
use statrs::distribution::Binomial;

/// Two-arm binary design: declare superiority when
/// P(theta_treatment > theta_control | data) >= decision_threshold.
/// Under the null both arms share the control rate.
#[derive(Debug, Clone, Serialize)]
pub struct TwoArmInputs {
    pub treatment_prior_alpha: f64,
    pub treatment_prior_beta: f64,
    pub control_prior_alpha: f64,
    pub control_prior_beta: f64,
    pub control_rate: f64,
    pub treatment_rate: f64,
    pub decision_threshold: f64,
    pub target_type1_error: f64,
    pub target_power: f64,
    pub n_simulations: u32,
    pub grid: SearchGrid,
    pub seed: Option<u64>,
}

impl TwoArmInputs {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        for (field, value) in [
            ("treatment_prior_alpha", self.treatment_prior_alpha),
            ("treatment_prior_beta", self.treatment_prior_beta),
            ("control_prior_alpha", self.control_prior_alpha),
            ("control_prior_beta", self.control_prior_beta),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SearchErr::BadPrior { field, value }.into());
            }
        }
        for (field, value) in [
            ("control_rate", self.control_rate),
            ("treatment_rate", self.treatment_rate),
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
pub struct TwoArmDesignSummary {
    pub recommended_n_per_arm: usize,
    pub n_total: usize,
    pub type1_error: f64,
    pub power: f64,
    pub constraints_met: bool,
    pub n_simulations: u32,
    pub seed: u64,
    pub inputs: TwoArmInputs,
}

// P(theta_t > theta_c) for independent Beta posteriors, by moment-matched
// normal approximation of the difference. Posterior variances are
// strictly positive, so the denominator never vanishes.
fn prob_treatment_superior(treatment: &BetaParams, control: &BetaParams) -> f64 {
    let mean_difference = treatment.mean() - control.mean();
    let variance = treatment.variance() + control.variance();
    std_normal_cdf(mean_difference / variance.sqrt())
}

/// Smallest per-arm n in the grid whose simulated operating
/// characteristics clear both targets
pub fn two_arm_sample_size(inputs: &TwoArmInputs) -> Result<TwoArmDesignSummary, CtdesignErr> {
    inputs.validate()?;

    let treatment_prior =
        BetaParams::new(inputs.treatment_prior_alpha, inputs.treatment_prior_beta)?;
    let control_prior = BetaParams::new(inputs.control_prior_alpha, inputs.control_prior_beta)?;
    let targets = SearchTargets {
        type1_error: inputs.target_type1_error,
        power: inputs.target_power,
    };

    let simulate = |hypothesis: Hypothesis, n: usize, trial_seed: u64| {
        let treatment_rate = match hypothesis {
            Hypothesis::Null => inputs.control_rate,
            Hypothesis::Alternative => inputs.treatment_rate,
        };
        let mut rng = rngs::StdRng::seed_from_u64(trial_seed);
        let treatment_events = Binomial::new(treatment_rate, n as u64)
            .unwrap()
            .sample(&mut rng) as u64;
        let control_events = Binomial::new(inputs.control_rate, n as u64)
            .unwrap()
            .sample(&mut rng) as u64;
        let treatment_posterior =
            beta_binomial_update(&treatment_prior, treatment_events, n as u64).unwrap();
        let control_posterior =
            beta_binomial_update(&control_prior, control_events, n as u64).unwrap();
        prob_treatment_superior(&treatment_posterior, &control_posterior)
            >= inputs.decision_threshold
    };

    let outcome = search_grid(
        &inputs.grid,
        &targets,
        inputs.n_simulations,
        inputs.seed,
        simulate,
    )?;

    Ok(TwoArmDesignSummary {
        recommended_n_per_arm: outcome.recommended_n,
        n_total: 2 * outcome.recommended_n,
        type1_error: outcome.type1_error,
        power: outcome.power,
        constraints_met: outcome.constraints_met,
        n_simulations: outcome.n_simulations,
        seed: outcome.seed,
        inputs: inputs.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::binomial_ci::{mc_rate_lower_bound, mc_rate_upper_bound};

    fn superiority_design(seed: u64) -> TwoArmInputs {
        TwoArmInputs {
            treatment_prior_alpha: 1.0,
            treatment_prior_beta: 1.0,
            control_prior_alpha: 1.0,
            control_prior_beta: 1.0,
            control_rate: 0.30,
            treatment_rate: 0.50,
            decision_threshold: 0.975,
            target_type1_error: 0.05,
            target_power: 0.80,
            n_simulations: 1000,
            grid: SearchGrid {
                n_min: 20,
                n_max: 200,
                n_step: 20,
            },
            seed: Some(seed),
        }
    }

    #[test]
    fn superiority_design_meets_constraints() {
        let summary = two_arm_sample_size(&superiority_design(2024)).unwrap();
        assert!(summary.constraints_met);
        assert!(summary.recommended_n_per_arm >= 20);
        assert!(summary.recommended_n_per_arm <= 180);
        assert_eq!(summary.n_total, 2 * summary.recommended_n_per_arm);
        let type1_ub = mc_rate_upper_bound(summary.type1_error, 1000).unwrap();
        let power_lb = mc_rate_lower_bound(summary.power, 1000).unwrap();
        assert!(type1_ub <= 0.08);
        assert!(power_lb >= 0.70);
    }

    #[test]
    fn fixed_seed_reproduces_bit_for_bit() {
        let first = two_arm_sample_size(&superiority_design(2024)).unwrap();
        let second = two_arm_sample_size(&superiority_design(2024)).unwrap();
        assert_eq!(
            first.recommended_n_per_arm,
            second.recommended_n_per_arm
        );
        assert_eq!(first.type1_error, second.type1_error);
        assert_eq!(first.power, second.power);
    }

    #[test]
    fn larger_effect_needs_no_more_subjects() {
        let mut small_effect = superiority_design(31);
        small_effect.grid = SearchGrid {
            n_min: 20,
            n_max: 300,
            n_step: 10,
        };
        let mut large_effect = small_effect.clone();
        small_effect.treatment_rate = 0.40;
        large_effect.treatment_rate = 0.55;
        let small = two_arm_sample_size(&small_effect).unwrap();
        let large = two_arm_sample_size(&large_effect).unwrap();
        assert!(large.recommended_n_per_arm <= small.recommended_n_per_arm);
    }

    #[test]
    fn lower_threshold_needs_no_more_subjects() {
        let mut strict = superiority_design(31);
        strict.grid = SearchGrid {
            n_min: 20,
            n_max: 300,
            n_step: 10,
        };
        let mut lenient = strict.clone();
        strict.decision_threshold = 0.995;
        lenient.decision_threshold = 0.975;
        let high = two_arm_sample_size(&strict).unwrap();
        let low = two_arm_sample_size(&lenient).unwrap();
        assert!(low.recommended_n_per_arm <= high.recommended_n_per_arm);
    }

    #[test]
    fn null_design_keeps_type1_in_check() {
        // With treatment_rate == control_rate there is no effect to find:
        // power stays near the type I error and the grid exhausts
        let mut null_design = superiority_design(8);
        null_design.treatment_rate = 0.30 + 1e-9;
        null_design.grid = SearchGrid {
            n_min: 20,
            n_max: 60,
            n_step: 20,
        };
        null_design.n_simulations = 500;
        let summary = two_arm_sample_size(&null_design).unwrap();
        assert!(!summary.constraints_met);
        assert_eq!(summary.recommended_n_per_arm, 60);
        let type1_ub = mc_rate_upper_bound(summary.type1_error, 500).unwrap();
        assert!(type1_ub <= 0.10);
    }

    #[test]
    fn prob_superior_is_half_for_identical_posteriors() {
        let posterior = BetaParams::new(10.0, 10.0).unwrap();
        let p = prob_treatment_superior(&posterior, &posterior);
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn prob_superior_tracks_separation() {
        let control = BetaParams::new(10.0, 20.0).unwrap();
        let close = BetaParams::new(12.0, 18.0).unwrap();
        let far = BetaParams::new(20.0, 10.0).unwrap();
        assert!(prob_treatment_superior(&far, &control) > prob_treatment_superior(&close, &control));
        assert!(prob_treatment_superior(&far, &control) > 0.99);
    }

    #[test]
    fn control_prior_error_names_field() {
        let mut inputs = superiority_design(1);
        inputs.control_prior_beta = 0.0;
        if let Err(e) = two_arm_sample_size(&inputs) {
            assert_eq!(
                String::from(
                    "while running sample size search: control_prior_beta should be > 0; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
