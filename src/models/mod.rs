#[macro_use]
mod lib;

// kind of trying to load based on dependency order here
pub mod account;
pub mod amount;
pub mod currency;
pub mod balance;
