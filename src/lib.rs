//! A fungible-token accounting core.
//!
//! This crate tracks one or more token denominations ("currencies"), each
//! with an issuer-controlled supply ceiling, and per-account balances of
//! those currencies, under three operations: define a currency, issue new
//! units, and transfer units between accounts. The arithmetic is typed
//! (amounts carry their currency identity and never mix across currencies),
//! overflow-checked, and every operation either commits fully or leaves the
//! persisted records untouched.
//!
//! The core deliberately implements *only* the accounting. Authorization,
//! account existence, transfer notification, storage billing, and durable
//! persistence are services a host provides through the collaborator traits
//! in [host](host/index.html); this is what lets the whole thing be driven
//! by a chain runtime in production and by a fake in tests.

pub mod error;
pub mod models;
pub mod util;
pub mod host;
pub mod store;
pub mod service;

pub use crate::{
    error::{Error, Result},
    host::{AccountDirectory, Authorizer, Host, NotificationRelay, StorageBilling, StorageCharge, TransferNotice},
    models::{
        account::AccountID,
        amount::{CurrencyCode, CurrencyIdentity, TypedAmount},
        balance::Balance,
        currency::Currency,
    },
    service::TokenService,
    store::{ledger::BalanceLedger, registry::CurrencyRegistry},
};
