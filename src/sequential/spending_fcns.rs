use crate::dist::std_normal::{std_normal_cdf, std_normal_quantile};
use crate::error::CtdesignErr;
use crate::sequential::error::SpendingFcnErr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpendingFcn {
    OBrienFleming,
    Pocock,
}

/// Cumulative alpha spent by information fraction t. Both families are
/// pinned to exactly alpha at t = 1 to sidestep numerical precision at
/// the final look.
pub fn alpha_spent(fcn: SpendingFcn, t: f64, alpha: f64) -> Result<f64, CtdesignErr> {
    if !(0.0..=1.0).contains(&t) || !t.is_finite() {
        return Err(SpendingFcnErr::OutOfBounds(t).into());
    }
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(SpendingFcnErr::BadAlpha(alpha).into());
    }
    if t == 0.0 {
        return Ok(0.0);
    }
    if t == 1.0 {
        return Ok(alpha);
    }
    let spent = match fcn {
        SpendingFcn::OBrienFleming => {
            let z_alpha = std_normal_quantile(1.0 - alpha)?;
            2.0 - 2.0 * std_normal_cdf(z_alpha / t.sqrt())
        }
        SpendingFcn::Pocock => alpha * (1.0 + (std::f64::consts::E - 1.0) * t).ln(),
    };
    Ok(spent.min(alpha))
}

/// Cumulative alpha spend at each look. The last look fraction must be
/// exactly 1.0 so the full alpha is spent by trial end.
pub fn spending_vec(
    look_fractions: &[f64],
    alpha: f64,
    fcn: SpendingFcn,
) -> Result<Vec<f64>, CtdesignErr> {
    if look_fractions.is_empty() {
        return Err(SpendingFcnErr::TimeVectorEmpty.into());
    }
    let last = *look_fractions.last().unwrap();
    if last != 1.0 {
        return Err(SpendingFcnErr::BadLastFraction(last).into());
    }
    look_fractions
        .iter()
        .map(|&t| alpha_spent(fcn, t, alpha))
        .collect()
}
