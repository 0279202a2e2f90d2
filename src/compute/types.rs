//----------------------------------------
// compute mod types
//----------------------------------------
use crate::borrowing::heterogeneity::{map_prior, MapPriorInputs, MapPriorSummary};
use crate::borrowing::power_prior::{power_prior, BorrowingSummary, PowerPriorInputs};
use crate::contract::{check_contract, contract_for, Contract, ResponseKind};
use crate::elicitation::elicit::{ess_based_prior, historical_prior};
use crate::elicitation::quantile_match::quantile_matched_prior;
use crate::elicitation::types::{ElicitedPrior, EssBasedInputs, HistoricalInputs, QuantileMatchingInputs};
use crate::error::CtdesignErr;
use crate::search::single_arm::{single_arm_sample_size, SingleArmDesignSummary, SingleArmInputs};
use crate::search::two_arm::{two_arm_sample_size, TwoArmDesignSummary, TwoArmInputs};
use crate::sequential::boundary::{monitoring_boundaries, SequentialDesign, SequentialInputs};
use serde::Serialize;

/// One variant per supported design family, each carrying only its own
/// parameters so an illegal combination cannot be expressed
#[derive(Debug, Clone, Serialize)]
pub enum DesignSpec {
    PowerPrior(PowerPriorInputs),
    MapPrior(MapPriorInputs),
    EssBased(EssBasedInputs),
    Historical(HistoricalInputs),
    QuantileMatching(QuantileMatchingInputs),
    SingleArmBinary(SingleArmInputs),
    TwoArmBinary(TwoArmInputs),
    SequentialContinuous(SequentialInputs),
}

#[derive(Debug, Clone, Serialize)]
pub enum DesignOutcome {
    Borrowing(BorrowingSummary),
    MapBorrowing(MapPriorSummary),
    Elicited(ElicitedPrior),
    SingleArm(SingleArmDesignSummary),
    TwoArm(TwoArmDesignSummary),
    Sequential(SequentialDesign),
}

impl DesignOutcome {
    pub fn kind(&self) -> ResponseKind {
        match self {
            DesignOutcome::Borrowing(_) => ResponseKind::BorrowingPowerPrior,
            DesignOutcome::MapBorrowing(_) => ResponseKind::BorrowingMapPrior,
            DesignOutcome::Elicited(_) => ResponseKind::PriorElicitation,
            DesignOutcome::SingleArm(_) => ResponseKind::SampleSizeSingleArm,
            DesignOutcome::TwoArm(_) => ResponseKind::SampleSizeTwoArm,
            DesignOutcome::Sequential(_) => ResponseKind::SequentialContinuous,
        }
    }

    pub fn contract(&self) -> &'static Contract {
        contract_for(self.kind())
    }

    /// Checks this outcome against its declared contract. Violations are
    /// reportable data, so this never errors.
    pub fn contract_violations(&self) -> Vec<String> {
        let value = match self {
            DesignOutcome::Borrowing(summary) => serde_json::to_value(summary),
            DesignOutcome::MapBorrowing(summary) => serde_json::to_value(summary),
            DesignOutcome::Elicited(elicited) => serde_json::to_value(elicited),
            DesignOutcome::SingleArm(summary) => serde_json::to_value(summary),
            DesignOutcome::TwoArm(summary) => serde_json::to_value(summary),
            DesignOutcome::Sequential(design) => serde_json::to_value(design),
        };
        match value {
            Ok(value) => check_contract(&value, self.contract()),
            Err(e) => vec![format!("serialization: {e}")],
        }
    }
}

/// Evaluates one design specification: exact formulas where they exist,
/// Monte Carlo search where they do not
pub fn evaluate(spec: &DesignSpec) -> Result<DesignOutcome, CtdesignErr> {
    match spec {
        DesignSpec::PowerPrior(inputs) => Ok(DesignOutcome::Borrowing(power_prior(inputs)?)),
        DesignSpec::MapPrior(inputs) => Ok(DesignOutcome::MapBorrowing(map_prior(inputs)?)),
        DesignSpec::EssBased(inputs) => Ok(DesignOutcome::Elicited(ess_based_prior(inputs)?)),
        DesignSpec::Historical(inputs) => Ok(DesignOutcome::Elicited(historical_prior(inputs)?)),
        DesignSpec::QuantileMatching(inputs) => {
            Ok(DesignOutcome::Elicited(quantile_matched_prior(inputs)?))
        }
        DesignSpec::SingleArmBinary(inputs) => {
            Ok(DesignOutcome::SingleArm(single_arm_sample_size(inputs)?))
        }
        DesignSpec::TwoArmBinary(inputs) => Ok(DesignOutcome::TwoArm(two_arm_sample_size(inputs)?)),
        DesignSpec::SequentialContinuous(inputs) => {
            Ok(DesignOutcome::Sequential(monitoring_boundaries(inputs)?))
        }
    }
}
