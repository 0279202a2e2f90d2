//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide the statistical engine behind
//! a clinical trial design service: conjugate Bayesian updates, historical
//! data borrowing, sequential monitoring boundaries, alpha spending,
//! CUPED variance reduction, prior elicitation, and Monte Carlo sample
//! size search with Clopper-Pearson certification of the estimated
//! operating characteristics.

mod borrowing;
/// This module houses the public API: the design specification variants,
/// the dispatching `evaluate` entry point, and re-exports of every
/// calculator
pub mod compute;
mod conjugate;
/// This module contains the declarative response contracts and the checker
pub mod contract;
mod dist;
mod elicitation;
/// This module contains error types
pub mod error;
mod sample_size;
mod search;
mod sequential;
