//! The balance ledger is the keyed store of per-(account, currency)
//! balances. It exclusively owns the `Balance` records, partitioned by
//! account, with each partition keyed by currency identity. Records are
//! created lazily by the first credit and never deleted.

use crate::{
    error::{Error, Result},
    host::StorageCharge,
    models::{
        account::AccountID,
        amount::{CurrencyIdentity, TypedAmount},
        balance::Balance,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered keyed table of balances: one partition per account, each
/// partition keyed by currency identity. The nesting mirrors the persisted
/// layout hosts are expected to provide for range queries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceLedger {
    accounts: BTreeMap<AccountID, BTreeMap<CurrencyIdentity, Balance>>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Default::default()
    }

    /// Look up one account's balance record in one currency.
    pub fn balance(&self, account: &AccountID, identity: &CurrencyIdentity) -> Option<&Balance> {
        self.accounts.get(account).and_then(|partition| partition.get(identity))
    }

    /// Look up one account's held amount in one currency. `None` means no
    /// record exists (which an account cannot distinguish from zero until
    /// it is first credited).
    pub fn amount(&self, account: &AccountID, identity: &CurrencyIdentity) -> Option<&TypedAmount> {
        self.balance(account, identity).map(|balance| balance.amount())
    }

    /// Iterate one account's balance records in currency-identity order.
    pub fn balances_for<'a>(&'a self, account: &AccountID) -> impl Iterator<Item = &'a Balance> {
        self.accounts
            .get(account)
            .into_iter()
            .flat_map(|partition| partition.values())
    }

    /// Sum every balance held in the given currency across all accounts.
    /// This is the left side of the conservation invariant: the total must
    /// always equal the currency's recorded supply.
    pub fn total_issued(&self, identity: &CurrencyIdentity) -> Result<TypedAmount> {
        let mut total = TypedAmount::zero(identity.clone());
        for partition in self.accounts.values() {
            if let Some(balance) = partition.get(identity) {
                total = total.checked_add(balance.amount())?;
            }
        }
        Ok(total)
    }

    /// Add `value` to an account's balance in `value`'s currency. If no
    /// record exists yet, one is created holding `value`, and the returned
    /// `StorageCharge` attributes the new record's storage cost to
    /// `storage_payer` (the caller forwards it to the billing collaborator).
    /// An existing record is grown in place (overflow propagates).
    pub(crate) fn credit(&mut self, account: &AccountID, value: &TypedAmount, storage_payer: &AccountID, now: &DateTime<Utc>) -> Result<Option<StorageCharge>> {
        let partition = self.accounts.entry(account.clone()).or_insert_with(BTreeMap::new);
        match partition.get_mut(value.identity()) {
            Some(balance) => {
                balance.credit(value)?;
                balance.set_updated(now.clone());
                Ok(None)
            }
            None => {
                let model = Balance::builder()
                    .account(account.clone())
                    .amount(value.clone())
                    .created(now.clone())
                    .updated(now.clone())
                    .build()
                    .map_err(|e| Error::BuilderFailed(e))?;
                partition.insert(value.identity().clone(), model);
                Ok(Some(StorageCharge::new(storage_payer.clone())))
            }
        }
    }

    /// Remove `value` from an account's balance in `value`'s currency.
    /// Fails with `AccountHasNoBalance` if the record doesn't exist and
    /// with `InsufficientBalance` if it holds less than `value`.
    pub(crate) fn debit(&mut self, account: &AccountID, value: &TypedAmount, now: &DateTime<Utc>) -> Result<()> {
        let balance = self
            .accounts
            .get_mut(account)
            .and_then(|partition| partition.get_mut(value.identity()))
            .ok_or(Error::AccountHasNoBalance)?;
        balance.debit(value)?;
        balance.set_updated(now.clone());
        Ok(())
    }
}
