//----------------------------------------
// contract mod
//----------------------------------------
pub mod check;
pub mod tables;
pub mod types;

pub use check::check_contract;
pub use tables::contract_for;
pub use types::{Contract, FieldBound, FieldType, ResponseKind};
