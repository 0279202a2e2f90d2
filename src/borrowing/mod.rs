//----------------------------------------
// borrowing mod
//----------------------------------------
pub mod error;
pub mod heterogeneity;
pub mod power_prior;
