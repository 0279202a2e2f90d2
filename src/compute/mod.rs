//----------------------------------------
// computation mod
//----------------------------------------
pub mod types;

pub use types::{evaluate, DesignOutcome, DesignSpec};

pub use crate::borrowing::heterogeneity::{
    heterogeneity, map_prior, HeterogeneityStats, MapPriorInputs, MapPriorSummary, StudyRecord,
};
pub use crate::borrowing::power_prior::{power_prior, BorrowingSummary, PowerPriorInputs};
pub use crate::conjugate::beta_binomial::beta_binomial_update;
pub use crate::conjugate::normal_normal::{normal_normal_update, NormalPosterior};
pub use crate::dist::beta::BetaParams;
pub use crate::dist::normal::NormalParams;
pub use crate::dist::std_normal::{std_normal_cdf, std_normal_quantile};
pub use crate::elicitation::elicit::{ess_based_prior, historical_prior};
pub use crate::elicitation::quantile_match::{fit_beta_to_quantiles, quantile_matched_prior};
pub use crate::elicitation::types::{
    ElicitationInputs, ElicitedPrior, EssBasedInputs, HistoricalInputs, QuantileMatchingInputs,
};
pub use crate::sample_size::cuped::{cuped_adjustment, CupedAdjustment, CupedInputs};
pub use crate::sample_size::survival::{schoenfeld_events, SurvivalEvents, SurvivalInputs};
pub use crate::search::binomial_ci::{
    binomial_ci, mc_rate_lower_bound, mc_rate_upper_bound, ConfidenceInterval, MC_CONFIDENCE,
};
pub use crate::search::engine::search_grid;
pub use crate::search::single_arm::{
    single_arm_sample_size, SingleArmDesignSummary, SingleArmInputs,
};
pub use crate::search::two_arm::{two_arm_sample_size, TwoArmDesignSummary, TwoArmInputs};
pub use crate::search::types::{
    Hypothesis, SearchGrid, SearchOutcome, SearchTargets, MIN_SIMULATIONS,
};
pub use crate::sequential::boundary::{
    monitoring_boundaries, z_boundary, SequentialDesign, SequentialInputs,
};
pub use crate::sequential::spending_fcns::{alpha_spent, spending_vec, SpendingFcn};
