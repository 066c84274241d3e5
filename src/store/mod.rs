//! The two keyed stores the core persists: currencies and balances. Each
//! store exclusively owns its records; all cross-store orchestration lives
//! in the [service](../service/index.html) module.

pub mod ledger;
pub mod registry;
