pub mod account;
pub mod ledger;
pub mod number;
