/// JSON-level type a contract field must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    Integer,
    Boolean,
    Text,
    List,
    Map,
}

/// Numeric bounds on a contract field. `strict_lower = true` rejects
/// values equal to the lower bound (an effective sample size must be
/// strictly positive); `false` admits the boundary (a probability may
/// legitimately be 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBound {
    pub lo: Option<f64>,
    pub hi: Option<f64>,
    pub strict_lower: bool,
}

impl FieldBound {
    pub const fn above(lo: f64) -> Self {
        FieldBound {
            lo: Some(lo),
            hi: None,
            strict_lower: true,
        }
    }

    pub const fn unit_interval() -> Self {
        FieldBound {
            lo: Some(0.0),
            hi: Some(1.0),
            strict_lower: false,
        }
    }

    pub const fn at_least(lo: f64) -> Self {
        FieldBound {
            lo: Some(lo),
            hi: None,
            strict_lower: false,
        }
    }
}

/// A declarative response contract: which fields must be present, what
/// type each carries, and which numeric bounds apply. Configuration data,
/// not behavior; the checker interprets it.
#[derive(Debug, Clone, Copy)]
pub struct Contract {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub types: &'static [(&'static str, FieldType)],
    pub bounds: &'static [(&'static str, FieldBound)],
}

/// The response families the engine produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    BorrowingPowerPrior,
    BorrowingMapPrior,
    PriorElicitation,
    SampleSizeSingleArm,
    SampleSizeTwoArm,
    SequentialContinuous,
}
