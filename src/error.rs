//----------------------------------------
// Crate error type
//----------------------------------------
use crate::borrowing::error::*;
use crate::conjugate::error::*;
use crate::dist::error::*;
use crate::elicitation::error::*;
use crate::sample_size::error::*;
use crate::search::error::*;
use crate::sequential::error::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtdesignErr {
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while constructing beta distribution: {0}")]
    BetaDist(BetaDistErr),
    #[error("while computing conjugate update: {0}")]
    Conjugate(ConjugateErr),
    #[error("while computing historical borrowing: {0}")]
    Borrowing(BorrowingErr),
    #[error("while computing monitoring boundaries: {0}")]
    Sequential(SequentialErr),
    #[error("while evaluating spending function: {0}")]
    SpendingFcn(SpendingFcnErr),
    #[error("while computing sample size: {0}")]
    SampleSize(SampleSizeErr),
    #[error("while eliciting prior: {0}")]
    Elicitation(ElicitationErr),
    #[error("while running sample size search: {0}")]
    Search(SearchErr),
}
