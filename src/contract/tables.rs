//----------------------------------------
// contract tables
//----------------------------------------
// One declarative contract per response family. These tables are the
// source of truth for what downstream consumers may rely on; the checker
// in check.rs interprets them.
use crate::contract::types::{Contract, FieldBound, FieldType, ResponseKind};

pub const BORROWING_POWER_PRIOR: Contract = Contract {
    name: "borrowing_power_prior",
    required: &[
        "effective_alpha",
        "effective_beta",
        "ess_total",
        "ess_from_historical",
        "prior_mean",
        "inputs",
    ],
    types: &[
        ("effective_alpha", FieldType::Number),
        ("effective_beta", FieldType::Number),
        ("ess_total", FieldType::Number),
        ("ess_from_historical", FieldType::Number),
        ("prior_mean", FieldType::Number),
        ("inputs", FieldType::Map),
    ],
    bounds: &[
        ("effective_alpha", FieldBound::above(1e-10)),
        ("effective_beta", FieldBound::above(1e-10)),
        ("ess_total", FieldBound::above(1e-10)),
        ("ess_from_historical", FieldBound::at_least(0.0)),
        ("prior_mean", FieldBound::unit_interval()),
    ],
};

pub const BORROWING_MAP_PRIOR: Contract = Contract {
    name: "borrowing_map_prior",
    required: &[
        "effective_alpha",
        "effective_beta",
        "ess_total",
        "ess_from_historical",
        "prior_mean",
        "i_squared",
        "pooled_rate",
        "inputs",
    ],
    types: &[
        ("effective_alpha", FieldType::Number),
        ("effective_beta", FieldType::Number),
        ("ess_total", FieldType::Number),
        ("ess_from_historical", FieldType::Number),
        ("prior_mean", FieldType::Number),
        ("i_squared", FieldType::Number),
        ("pooled_rate", FieldType::Number),
        ("inputs", FieldType::Map),
    ],
    bounds: &[
        ("effective_alpha", FieldBound::above(1e-10)),
        ("effective_beta", FieldBound::above(1e-10)),
        ("ess_total", FieldBound::above(1e-10)),
        ("ess_from_historical", FieldBound::at_least(0.0)),
        ("prior_mean", FieldBound::unit_interval()),
        (
            "i_squared",
            FieldBound {
                lo: Some(0.0),
                hi: Some(100.0),
                strict_lower: false,
            },
        ),
        ("pooled_rate", FieldBound::unit_interval()),
    ],
};

pub const PRIOR_ELICITATION: Contract = Contract {
    name: "prior_elicitation",
    required: &["alpha", "beta", "mean", "variance", "ess", "quantiles", "inputs"],
    types: &[
        ("alpha", FieldType::Number),
        ("beta", FieldType::Number),
        ("mean", FieldType::Number),
        ("variance", FieldType::Number),
        ("ess", FieldType::Number),
        ("quantiles", FieldType::Map),
        ("inputs", FieldType::Map),
    ],
    bounds: &[
        ("alpha", FieldBound::above(1e-10)),
        ("beta", FieldBound::above(1e-10)),
        ("mean", FieldBound::unit_interval()),
        ("variance", FieldBound::at_least(0.0)),
        ("ess", FieldBound::above(1e-10)),
    ],
};

pub const SAMPLE_SIZE_SINGLE_ARM: Contract = Contract {
    name: "sample_size_single_arm",
    required: &[
        "recommended_n",
        "type1_error",
        "power",
        "constraints_met",
        "posterior_at_alt_alpha",
        "posterior_at_alt_beta",
        "inputs",
    ],
    types: &[
        ("recommended_n", FieldType::Integer),
        ("type1_error", FieldType::Number),
        ("power", FieldType::Number),
        ("constraints_met", FieldType::Boolean),
        ("posterior_at_alt_alpha", FieldType::Number),
        ("posterior_at_alt_beta", FieldType::Number),
        ("inputs", FieldType::Map),
    ],
    bounds: &[
        ("recommended_n", FieldBound::above(0.0)),
        ("type1_error", FieldBound::unit_interval()),
        ("power", FieldBound::unit_interval()),
        ("posterior_at_alt_alpha", FieldBound::above(1e-10)),
        ("posterior_at_alt_beta", FieldBound::above(1e-10)),
    ],
};

pub const SAMPLE_SIZE_TWO_ARM: Contract = Contract {
    name: "sample_size_two_arm",
    required: &[
        "recommended_n_per_arm",
        "n_total",
        "type1_error",
        "power",
        "constraints_met",
        "inputs",
    ],
    types: &[
        ("recommended_n_per_arm", FieldType::Integer),
        ("n_total", FieldType::Integer),
        ("type1_error", FieldType::Number),
        ("power", FieldType::Number),
        ("constraints_met", FieldType::Boolean),
        ("inputs", FieldType::Map),
    ],
    bounds: &[
        ("recommended_n_per_arm", FieldBound::above(0.0)),
        ("n_total", FieldBound::above(0.0)),
        ("type1_error", FieldBound::unit_interval()),
        ("power", FieldBound::unit_interval()),
    ],
};

pub const SEQUENTIAL_CONTINUOUS: Contract = Contract {
    name: "sequential_continuous",
    required: &[
        "efficacy_boundaries",
        "futility_boundaries",
        "information_fractions",
        "n_looks",
        "inputs",
    ],
    types: &[
        ("efficacy_boundaries", FieldType::List),
        ("futility_boundaries", FieldType::List),
        ("information_fractions", FieldType::List),
        ("n_looks", FieldType::Integer),
        ("inputs", FieldType::Map),
    ],
    bounds: &[("n_looks", FieldBound::above(0.0))],
};

pub fn contract_for(kind: ResponseKind) -> &'static Contract {
    match kind {
        ResponseKind::BorrowingPowerPrior => &BORROWING_POWER_PRIOR,
        ResponseKind::BorrowingMapPrior => &BORROWING_MAP_PRIOR,
        ResponseKind::PriorElicitation => &PRIOR_ELICITATION,
        ResponseKind::SampleSizeSingleArm => &SAMPLE_SIZE_SINGLE_ARM,
        ResponseKind::SampleSizeTwoArm => &SAMPLE_SIZE_TWO_ARM,
        ResponseKind::SequentialContinuous => &SEQUENTIAL_CONTINUOUS,
    }
}
