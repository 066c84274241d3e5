//! The currency registry is the keyed store of currency definitions. It
//! exclusively owns the `Currency` records and is the only place the
//! creation-once and supply-ceiling invariants are enforced.

use crate::{
    error::{Error, Result},
    models::{
        account::AccountID,
        amount::{CurrencyIdentity, TypedAmount},
        currency::Currency,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered keyed table of currencies, keyed by currency identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<CurrencyIdentity, Currency>,
}

impl CurrencyRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Look up a currency by identity.
    pub fn get(&self, identity: &CurrencyIdentity) -> Option<&Currency> {
        self.currencies.get(identity)
    }

    /// Iterate the registered currencies in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Register a new currency with a zero starting supply. The identity is
    /// taken from `max_supply`. Fails with `CurrencyAlreadyExists` if a
    /// record with that identity was created before; the first record stays
    /// untouched in that case.
    pub(crate) fn create(&mut self, issuer: AccountID, max_supply: TypedAmount, now: &DateTime<Utc>) -> Result<&Currency> {
        let identity = max_supply.identity().clone();
        if self.currencies.contains_key(&identity) {
            Err(Error::CurrencyAlreadyExists)?;
        }
        let model = Currency::builder()
            .identity(identity.clone())
            .supply(TypedAmount::zero(identity.clone()))
            .max_supply(max_supply)
            .issuer(issuer)
            .created(now.clone())
            .updated(now.clone())
            .build()
            .map_err(|e| Error::BuilderFailed(e))?;
        Ok(self.currencies.entry(identity).or_insert(model))
    }

    /// Grow a currency's supply by `value`, looked up by `value`'s identity.
    /// Fails with `CurrencyNotFound` if no such currency exists and with
    /// `SupplyCeilingExceeded` if the ceiling check fails.
    pub(crate) fn add_supply(&mut self, value: &TypedAmount, now: &DateTime<Utc>) -> Result<()> {
        let currency = self
            .currencies
            .get_mut(value.identity())
            .ok_or(Error::CurrencyNotFound)?;
        currency.add_supply(value)?;
        currency.set_updated(now.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{self, test::*};

    #[test]
    fn creates_once() {
        let now = util::time::now();
        let mut registry = CurrencyRegistry::new();
        let max_supply = make_amount(10_000_000, "TOK", 4);

        let currency = registry.create("jerry".into(), max_supply.clone(), &now).unwrap();
        assert_eq!(currency.identity(), &make_identity("TOK", 4));
        assert_eq!(currency.supply(), &TypedAmount::zero(make_identity("TOK", 4)));
        assert_eq!(currency.max_supply(), &max_supply);
        assert_eq!(currency.issuer(), &AccountID::from("jerry"));
        assert_eq!(currency.created(), &now);
        assert_eq!(currency.updated(), &now);

        // second creation fails and leaves the first record unchanged, even
        // with a different issuer/ceiling
        let now2 = util::time::now();
        let res = registry.create("larry".into(), make_amount(5, "TOK", 4), &now2);
        assert_eq!(res, Err(Error::CurrencyAlreadyExists));
        let currency = registry.get(&make_identity("TOK", 4)).unwrap();
        assert_eq!(currency.issuer(), &AccountID::from("jerry"));
        assert_eq!(currency.max_supply(), &max_supply);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_identities_coexist() {
        let now = util::time::now();
        let mut registry = CurrencyRegistry::new();
        registry.create("jerry".into(), make_amount(100, "TOK", 4), &now).unwrap();
        registry.create("jerry".into(), make_amount(100, "TOK", 2), &now).unwrap();
        registry.create("larry".into(), make_amount(100, "USD", 2), &now).unwrap();
        assert_eq!(registry.len(), 3);
        // iteration is ordered by identity
        let identities = registry.iter().map(|c| c.identity().clone()).collect::<Vec<_>>();
        let mut sorted = identities.clone();
        sorted.sort();
        assert_eq!(identities, sorted);
    }

    #[test]
    fn add_supply_requires_existing_currency() {
        let now = util::time::now();
        let mut registry = CurrencyRegistry::new();
        registry.create("jerry".into(), make_amount(1_000, "TOK", 4), &now).unwrap();

        let res = registry.add_supply(&make_amount(10, "USD", 4), &now);
        assert_eq!(res, Err(Error::CurrencyNotFound));

        let now2 = util::time::now();
        registry.add_supply(&make_amount(10, "TOK", 4), &now2).unwrap();
        let currency = registry.get(&make_identity("TOK", 4)).unwrap();
        assert_eq!(currency.supply(), &make_amount(10, "TOK", 4));
        assert_eq!(currency.created(), &now);
        assert_eq!(currency.updated(), &now2);

        let res = registry.add_supply(&make_amount(991, "TOK", 4), &now2);
        assert_eq!(res, Err(Error::SupplyCeilingExceeded));
        let currency = registry.get(&make_identity("TOK", 4)).unwrap();
        assert_eq!(currency.supply(), &make_amount(10, "TOK", 4));
    }
}
