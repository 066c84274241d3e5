//! The currency model describes one token denomination: who may issue it,
//! how much has been issued so far, and the immutable ceiling issuance may
//! never pass. A currency is created exactly once per identity and is never
//! deleted.

use crate::{
    error::{Error, Result},
    models::{
        account::AccountID,
        amount::{CurrencyIdentity, TypedAmount},
    },
};
use std::cmp::Ordering;

ledger_model! {
    /// One token denomination, keyed in the registry by its identity.
    ///
    /// Invariants: `supply` and `max_supply` are denominated in the key's
    /// identity, `max_supply` is strictly positive and fixed at creation,
    /// and `0 <= supply <= max_supply` at all times.
    pub struct Currency {
        /// The identity this currency is keyed under.
        identity: CurrencyIdentity,
        /// How many units have been issued so far.
        supply: TypedAmount,
        /// The issuance ceiling, fixed at creation.
        max_supply: TypedAmount,
        /// The account allowed to issue new units of this currency.
        issuer: AccountID,
    }
    CurrencyBuilder
}

impl Currency {
    /// Grow the supply by `value`, holding the ceiling invariant: fails with
    /// `SupplyCeilingExceeded` unless `supply + value <= max_supply`. The
    /// sum is overflow-checked. Returns the updated supply on success.
    pub(crate) fn add_supply(&mut self, value: &TypedAmount) -> Result<&TypedAmount> {
        let new_supply = self.supply().checked_add(value)?;
        if new_supply.compare(self.max_supply())? == Ordering::Greater {
            Err(Error::SupplyCeilingExceeded)?;
        }
        self.set_supply(new_supply);
        Ok(self.supply())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{self, test::*};

    #[test]
    fn supply_respects_ceiling() {
        let now = util::time::now();
        let mut currency = make_currency("issuer", make_amount(1_000, "TOK", 4), &now);
        assert!(currency.supply().is_zero());

        let supply = currency.add_supply(&make_amount(400, "TOK", 4)).unwrap();
        assert_eq!(supply, &make_amount(400, "TOK", 4));
        let supply = currency.add_supply(&make_amount(600, "TOK", 4)).unwrap();
        assert_eq!(supply, &make_amount(1_000, "TOK", 4));

        let res = currency.add_supply(&make_amount(1, "TOK", 4));
        assert_eq!(res, Err(Error::SupplyCeilingExceeded));
        assert_eq!(currency.supply(), &make_amount(1_000, "TOK", 4));
    }

    #[test]
    fn supply_addition_is_identity_checked() {
        let now = util::time::now();
        let mut currency = make_currency("issuer", make_amount(1_000, "TOK", 4), &now);
        let res = currency.add_supply(&make_amount(10, "USD", 4));
        assert_eq!(res, Err(Error::CurrencyIdentityMismatch));
    }

    #[test]
    fn supply_addition_is_overflow_checked() {
        let now = util::time::now();
        let mut currency = make_currency("issuer", make_amount(i64::MAX, "TOK", 4), &now);
        currency.add_supply(&make_amount(i64::MAX - 1, "TOK", 4)).unwrap();
        let res = currency.add_supply(&make_amount(2, "TOK", 4));
        assert_eq!(res, Err(Error::AmountOverflow));
    }
}
