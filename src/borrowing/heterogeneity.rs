use crate::borrowing::error::BorrowingErr;
use crate::dist::beta::BetaParams;
use crate::error::CtdesignErr;
use itertools::izip;
use serde::Serialize;

/// Event counts from one historical study
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudyRecord {
    pub n_events: u64,
    pub n_total: u64,
}

impl StudyRecord {
    pub fn rate(&self) -> f64 {
        self.n_events as f64 / self.n_total as f64
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPriorInputs {
    pub studies: Vec<StudyRecord>,
    pub robust_weight: f64,
}

impl MapPriorInputs {
    pub fn validate(&self) -> Result<(), CtdesignErr> {
        if self.studies.len() < 2 {
            return Err(BorrowingErr::TooFewStudies(self.studies.len()).into());
        }
        for (index, study) in self.studies.iter().enumerate() {
            if study.n_total == 0 {
                return Err(BorrowingErr::EmptyStudy { index }.into());
            }
            if study.n_events > study.n_total {
                return Err(BorrowingErr::EventsExceedTotal {
                    index,
                    n_events: study.n_events,
                    n_total: study.n_total,
                }
                .into());
            }
        }
        if !(0.0..=1.0).contains(&self.robust_weight) || !self.robust_weight.is_finite() {
            return Err(BorrowingErr::RobustWeightOutOfBounds(self.robust_weight).into());
        }
        Ok(())
    }
}

/// Fixed-effect pooling diagnostics across studies
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeterogeneityStats {
    pub q: f64,
    pub i_squared: f64,
    pub pooled_rate: f64,
}

/// Inverse-variance pooled rate, Cochran's Q, and the I-squared
/// heterogeneity percentage across k >= 2 studies. A study rate of exactly
/// 0 or 1 would give a zero-variance weight, so its binomial variance
/// falls back to 0.25 / n.
pub fn heterogeneity(studies: &[StudyRecord]) -> Result<HeterogeneityStats, CtdesignErr> {
    if studies.len() < 2 {
        return Err(BorrowingErr::TooFewStudies(studies.len()).into());
    }

    let rates: Vec<f64> = studies.iter().map(|s| s.rate()).collect();
    let weights: Vec<f64> = studies
        .iter()
        .zip(rates.iter())
        .map(|(s, &r)| {
            let n = s.n_total as f64;
            let variance = if r > 0.0 && r < 1.0 {
                r * (1.0 - r) / n
            } else {
                0.25 / n
            };
            1.0 / variance
        })
        .collect();

    let total_weight: f64 = weights.iter().sum();
    let pooled_rate = izip!(&weights, &rates).map(|(w, r)| w * r).sum::<f64>() / total_weight;

    let q: f64 = izip!(&weights, &rates)
        .map(|(w, r)| w * (r - pooled_rate) * (r - pooled_rate))
        .sum();

    let df = (studies.len() - 1) as f64;
    let i_squared = if q > 0.0 {
        ((q - df) / q * 100.0).max(0.0)
    } else {
        0.0
    };

    Ok(HeterogeneityStats {
        q,
        i_squared,
        pooled_rate,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPriorSummary {
    pub effective_alpha: f64,
    pub effective_beta: f64,
    pub ess_total: f64,
    pub ess_from_historical: f64,
    pub prior_mean: f64,
    pub i_squared: f64,
    pub pooled_rate: f64,
    pub inputs: MapPriorInputs,
}

/// Meta-analytic-predictive borrowing prior. The pooled historical
/// information is discounted by the observed heterogeneity (higher
/// I-squared borrows less), moment-matched to a Beta at the pooled rate,
/// then blended with a vague Beta(1, 1) at `robust_weight`.
pub fn map_prior(inputs: &MapPriorInputs) -> Result<MapPriorSummary, CtdesignErr> {
    inputs.validate()?;

    let stats = heterogeneity(&inputs.studies)?;
    let total_n: u64 = inputs.studies.iter().map(|s| s.n_total).sum();

    // A pooled rate of exactly 0 or 1 cannot be moment-matched to a
    // proper Beta; shift by half an event in that case
    let pooled = if stats.pooled_rate > 0.0 && stats.pooled_rate < 1.0 {
        stats.pooled_rate
    } else {
        let total_events: u64 = inputs.studies.iter().map(|s| s.n_events).sum();
        (total_events as f64 + 0.5) / (total_n as f64 + 1.0)
    };

    let ess_map = total_n as f64 * (1.0 - stats.i_squared / 100.0);
    let w = inputs.robust_weight;
    let effective = BetaParams::new(
        (1.0 - w) * pooled * ess_map + w * 1.0,
        (1.0 - w) * (1.0 - pooled) * ess_map + w * 1.0,
    )?;

    Ok(MapPriorSummary {
        effective_alpha: effective.alpha,
        effective_beta: effective.beta,
        ess_total: effective.ess(),
        ess_from_historical: (1.0 - w) * ess_map,
        prior_mean: effective.mean(),
        i_squared: stats.i_squared,
        pooled_rate: stats.pooled_rate,
        inputs: inputs.clone(),
    })
}
