use crate::dist::beta::BetaParams;
use crate::error::CtdesignErr;
use crate::search::error::SearchErr;
use serde::Serialize;

/// Confidence level used when certifying Monte Carlo rate estimates
pub const MC_CONFIDENCE: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Clopper-Pearson exact confidence interval for k successes in n trials,
/// via the Beta inverse-CDF relationship:
/// lower = BetaPPF(a/2; k, n-k+1), upper = BetaPPF(1-a/2; k+1, n-k),
/// with the closed-form edges at k = 0 and k = n.
pub fn binomial_ci(k: u64, n: u64, confidence: f64) -> Result<ConfidenceInterval, CtdesignErr> {
    if n == 0 {
        return Err(SearchErr::ZeroTrials.into());
    }
    if k > n {
        return Err(SearchErr::CountExceedsTrials { k, n }.into());
    }
    if confidence <= 0.0 || confidence >= 1.0 {
        return Err(SearchErr::BadConfidence(confidence).into());
    }

    let alpha = 1.0 - confidence;
    let lower = if k == 0 {
        0.0
    } else {
        BetaParams::new(k as f64, (n - k + 1) as f64)?.quantile(alpha / 2.0)
    };
    let upper = if k == n {
        1.0
    } else {
        BetaParams::new((k + 1) as f64, (n - k) as f64)?.quantile(1.0 - alpha / 2.0)
    };

    Ok(ConfidenceInterval { lower, upper })
}

fn rate_to_count(rate: f64, n_sims: u64) -> u64 {
    let k = (rate * n_sims as f64).round();
    (k.max(0.0) as u64).min(n_sims)
}

/// Upper Clopper-Pearson bound for an MC-estimated rate. Type I error is
/// gated against this bound so noise cannot produce a false pass.
pub fn mc_rate_upper_bound(rate: f64, n_sims: u64) -> Result<f64, CtdesignErr> {
    Ok(binomial_ci(rate_to_count(rate, n_sims), n_sims, MC_CONFIDENCE)?.upper)
}

/// Lower Clopper-Pearson bound for an MC-estimated rate; the power gate.
pub fn mc_rate_lower_bound(rate: f64, n_sims: u64) -> Result<f64, CtdesignErr> {
    Ok(binomial_ci(rate_to_count(rate, n_sims), n_sims, MC_CONFIDENCE)?.lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_rate_interval_brackets_half() {
        let ci = binomial_ci(50, 100, 0.95).unwrap();
        assert!(ci.lower < 0.5 && 0.5 < ci.upper);
        assert!(ci.lower > 0.35 && ci.lower < 0.65);
        assert!(ci.upper > 0.35 && ci.upper < 0.65);
    }

    #[test]
    fn reference_values_against_scipy() {
        // scipy.stats.beta.ppf(0.025, 50, 51) = 0.39832
        // scipy.stats.beta.ppf(0.975, 51, 50) = 0.60168
        let ci = binomial_ci(50, 100, 0.95).unwrap();
        assert!((ci.lower - 0.39832).abs() < 0.001);
        assert!((ci.upper - 0.60168).abs() < 0.001);
    }

    #[test]
    fn zero_count_edge() {
        let ci = binomial_ci(0, 100, 0.95).unwrap();
        assert_eq!(ci.lower, 0.0);
        assert!(ci.upper > 0.0 && ci.upper < 0.06);
    }

    #[test]
    fn full_count_edge() {
        let ci = binomial_ci(100, 100, 0.95).unwrap();
        assert_eq!(ci.upper, 1.0);
        assert!(ci.lower > 0.94 && ci.lower < 1.0);
    }

    #[test]
    fn interval_ordering_holds() {
        for k in [0, 1, 10, 250, 499, 500] {
            let ci = binomial_ci(k, 500, 0.99).unwrap();
            assert!(0.0 <= ci.lower);
            assert!(ci.lower <= ci.upper);
            assert!(ci.upper <= 1.0);
        }
    }

    #[test]
    fn more_sims_tighten_the_interval() {
        let coarse = binomial_ci(50, 100, 0.99).unwrap();
        let fine = binomial_ci(2500, 5000, 0.99).unwrap();
        assert!(fine.upper - fine.lower < coarse.upper - coarse.lower);
    }

    #[test]
    fn bound_wrappers_round_rates() {
        let upper = mc_rate_upper_bound(0.05, 5000).unwrap();
        let lower = mc_rate_lower_bound(0.05, 5000).unwrap();
        assert!(lower < 0.05 && 0.05 < upper);
        // 0.99 confidence keeps the band tight at 5000 sims
        assert!(upper < 0.06);
        assert!(lower > 0.04);
    }

    #[test]
    fn rate_rounding_clamps_to_trials() {
        // A rate estimate of exactly 1.0 must not overflow the count
        assert_eq!(mc_rate_upper_bound(1.0, 100).unwrap(), 1.0);
        assert_eq!(mc_rate_lower_bound(0.0, 100).unwrap(), 0.0);
    }

    #[test]
    fn count_exceeds_trials_error() {
        if let Err(e) = binomial_ci(101, 100, 0.95) {
            assert_eq!(
                String::from(
                    "while running sample size search: count should be <= trials; \
                     got count 101, trials 100"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
