//! The host module defines the collaborator interfaces the token core calls
//! into but does not implement: authorization, account existence, transfer
//! notification, and storage billing. The host (a chain runtime, a test
//! fake, whatever) implements these and hands them to
//! [TokenService](../service/struct.TokenService.html) as one value.
//!
//! Making these explicit traits (instead of baking host checks into the
//! mutation calls) is what keeps the core testable with fakes.

use crate::models::{account::AccountID, amount::TypedAmount};
use getset::Getters;
use serde::{Deserialize, Serialize};

/// Answers whether the current caller is authorized to act as an account.
pub trait Authorizer {
    fn is_authorized(&self, account: &AccountID) -> bool;
}

/// Answers whether an account exists at all. The core never creates
/// accounts, it only refuses to move value to or from unknown ones.
pub trait AccountDirectory {
    fn account_exists(&self, account: &AccountID) -> bool;
}

/// A fire-and-forget informational hook, called for both parties of a
/// transfer. Whatever the notified party does (or fails to do) with the
/// notice has no effect on the ledger outcome.
pub trait NotificationRelay {
    fn notify(&mut self, account: &AccountID, notice: &TransferNotice);
}

/// Accepts the storage-cost attribution produced whenever a credit lazily
/// creates a new balance record. The core performs no billing itself; this
/// is a pass-through accounting hint.
pub trait StorageBilling {
    fn bill_storage(&mut self, charge: &StorageCharge);
}

/// The full collaborator bundle a host hands to the service.
pub trait Host: Authorizer + AccountDirectory + NotificationRelay + StorageBilling {}
impl<T: Authorizer + AccountDirectory + NotificationRelay + StorageBilling> Host for T {}

/// The operation summary handed to the notification relay for each party of
/// a transfer.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct TransferNotice {
    /// The debited account.
    from: AccountID,
    /// The credited account.
    to: AccountID,
    /// How much moved.
    value: TypedAmount,
}

impl TransferNotice {
    pub fn new(from: AccountID, to: AccountID, value: TypedAmount) -> Self {
        Self { from, to, value }
    }
}

/// Produced when a credit creates a new balance record, naming the account
/// that gets attributed the new record's storage cost.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct StorageCharge {
    /// The account paying for the new record.
    payer: AccountID,
}

impl StorageCharge {
    pub(crate) fn new(payer: AccountID) -> Self {
        Self { payer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::amount::CurrencyIdentity;

    // notices cross the host boundary, so make sure they serialize sanely
    #[test]
    fn notices_serialize() {
        let notice = TransferNotice::new(
            "jerry".into(),
            "larry".into(),
            TypedAmount::new(300_000, CurrencyIdentity::new("TOK", 4)),
        );
        let json = serde_json::to_string(&notice).unwrap();
        let notice2: TransferNotice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice, notice2);
        assert_eq!(notice2.from(), &AccountID::from("jerry"));
        assert_eq!(notice2.value().units(), 300_000);
    }
}
