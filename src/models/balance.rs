//! The balance model holds one account's position in one currency. Balances
//! are created lazily by the first credit, mutated by credit/debit, and
//! never deleted, even once they hit zero. A balance can never go negative.

use crate::{
    error::{Error, Result},
    models::{account::AccountID, amount::TypedAmount},
};
use std::cmp::Ordering;

ledger_model! {
    /// One account's holdings of one currency, keyed in the ledger by
    /// (account, currency identity).
    pub struct Balance {
        /// The account this balance belongs to.
        account: AccountID,
        /// The held amount, denominated in the key's currency identity.
        amount: TypedAmount,
    }
    BalanceBuilder
}

impl Balance {
    /// Add `value` to this balance (overflow-checked). Returns the updated
    /// amount on success.
    pub(crate) fn credit(&mut self, value: &TypedAmount) -> Result<&TypedAmount> {
        let new_amount = self.amount().checked_add(value)?;
        self.set_amount(new_amount);
        Ok(self.amount())
    }

    /// Remove `value` from this balance. Fails with `InsufficientBalance`
    /// if the held amount is smaller than `value`, which is also what keeps
    /// balances non-negative. Returns the updated amount on success.
    pub(crate) fn debit(&mut self, value: &TypedAmount) -> Result<&TypedAmount> {
        if self.amount().compare(value)? == Ordering::Less {
            Err(Error::InsufficientBalance)?;
        }
        let new_amount = self.amount().checked_sub(value)?;
        self.set_amount(new_amount);
        Ok(self.amount())
    }
}
