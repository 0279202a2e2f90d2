use crate::conjugate::error::ConjugateErr;
use crate::dist::beta::BetaParams;
use crate::error::CtdesignErr;

/// Beta-Binomial conjugate update: observing `events` successes out of `n`
/// turns Beta(a, b) into Beta(a + events, b + n - events)
pub fn beta_binomial_update(
    prior: &BetaParams,
    events: u64,
    n: u64,
) -> Result<BetaParams, CtdesignErr> {
    if events > n {
        return Err(ConjugateErr::EventsExceedTotal { events, n }.into());
    }
    BetaParams::new(
        prior.alpha + events as f64,
        prior.beta + (n - events) as f64,
    )
}
