//! The token service is the public face of the core: it owns the two keyed
//! stores and exposes the three mutating operations (create a currency,
//! issue units, transfer units) on top of them. Authorization, account
//! existence, notification, and storage billing are all delegated to the
//! injected [host collaborators](../host/index.html).
//!
//! Every operation has exactly two outcomes: committed, or aborted with the
//! stores byte-for-byte unchanged. The service checkpoints the stores around
//! each mutating phase and restores them on any error, which stands in for
//! the all-or-nothing guarantee a host execution engine would provide.

use crate::{
    error::{Error, Result},
    host::{Host, TransferNotice},
    models::{account::AccountID, amount::TypedAmount},
    store::{ledger::BalanceLedger, registry::CurrencyRegistry},
};
use chrono::{DateTime, Utc};
use getset::{Getters, MutGetters};

/// Orchestrates the three public token operations over the currency
/// registry and the balance ledger.
#[derive(Clone, Debug, Getters, MutGetters)]
pub struct TokenService<H: Host> {
    /// The contract owner: the only account allowed to create currencies.
    #[getset(get = "pub")]
    owner: AccountID,
    /// The injected host collaborators.
    #[getset(get = "pub", get_mut = "pub")]
    host: H,
    /// The currency definitions store.
    #[getset(get = "pub")]
    currencies: CurrencyRegistry,
    /// The per-(account, currency) balance store.
    #[getset(get = "pub")]
    balances: BalanceLedger,
}

impl<H: Host> TokenService<H> {
    /// Stand up a service with empty stores.
    pub fn new(owner: AccountID, host: H) -> Self {
        Self {
            owner,
            host,
            currencies: CurrencyRegistry::new(),
            balances: BalanceLedger::new(),
        }
    }

    /// Define a new currency with a zero starting supply and a fixed
    /// issuance ceiling. The currency's identity is taken from `max_supply`.
    /// Only the contract owner may call this, and `issuer` must be a known
    /// account.
    pub fn create_currency(&mut self, issuer: &AccountID, max_supply: TypedAmount, now: &DateTime<Utc>) -> Result<()> {
        if !self.host.is_authorized(&self.owner) {
            Err(Error::UnauthorizedCaller)?;
        }
        max_supply.validate()?;
        if !self.host.account_exists(issuer) {
            Err(Error::AccountUnknown)?;
        }
        self.currencies.create(issuer.clone(), max_supply, now)?;
        Ok(())
    }

    /// Issue new units of an existing currency to `to`. Only the currency's
    /// issuer may call this, and the grown supply must stay at or under the
    /// ceiling. The units land in the issuer's balance first; issuing to a
    /// third party then relays a transfer issuer→to, reusing the transfer
    /// invariants and notification behavior.
    pub fn issue(&mut self, to: &AccountID, value: TypedAmount, now: &DateTime<Utc>) -> Result<()> {
        value.validate()?;
        if !self.host.account_exists(to) {
            Err(Error::AccountUnknown)?;
        }
        let issuer = self
            .currencies
            .get(value.identity())
            .ok_or(Error::CurrencyNotFound)?
            .issuer()
            .clone();
        if !self.host.is_authorized(&issuer) {
            Err(Error::UnauthorizedIssuer)?;
        }
        self.atomically(|service| {
            service.currencies.add_supply(&value, now)?;
            let charge = service.balances.credit(&issuer, &value, &issuer, now)?;
            if let Some(charge) = charge {
                service.host.bill_storage(&charge);
            }
            if to != &issuer {
                // the relay runs inside the same atomic unit, sequentially
                // after the issuer's own supply/balance update
                service.transfer_from(&issuer, to, &value, now)?;
            }
            Ok(())
        })
    }

    /// Move units from one account to another. Only `from` may authorize
    /// the debit; `to` must be a known account; both parties get notified.
    pub fn transfer(&mut self, from: &AccountID, to: &AccountID, value: TypedAmount, now: &DateTime<Utc>) -> Result<()> {
        if !self.host.is_authorized(from) {
            Err(Error::UnauthorizedCaller)?;
        }
        self.atomically(|service| service.transfer_from(from, to, &value, now))
    }

    /// The transfer body, shared by the public `transfer` (which has already
    /// authorized `from`) and by `issue`'s relay (where authorization as the
    /// issuer was just required). Debit strictly precedes credit, so a
    /// failed debit can never leave a stray credit behind.
    fn transfer_from(&mut self, from: &AccountID, to: &AccountID, value: &TypedAmount, now: &DateTime<Utc>) -> Result<()> {
        value.validate()?;
        if from == to {
            Err(Error::SelfTransfer)?;
        }
        if !self.host.account_exists(to) {
            Err(Error::AccountUnknown)?;
        }
        let notice = TransferNotice::new(from.clone(), to.clone(), value.clone());
        self.host.notify(from, &notice);
        self.host.notify(to, &notice);
        self.balances.debit(from, value, now)?;
        let charge = self.balances.credit(to, value, from, now)?;
        if let Some(charge) = charge {
            self.host.bill_storage(&charge);
        }
        Ok(())
    }

    /// Run `op` with the aborted-no-effect guarantee: on any error both
    /// stores are restored to their state from before the call. Host-side
    /// notifications/billing already delivered are the host's concern (it
    /// discards them if its enclosing transaction aborts).
    fn atomically<F>(&mut self, op: F) -> Result<()>
        where F: FnOnce(&mut Self) -> Result<()>,
    {
        let currencies = self.currencies.clone();
        let balances = self.balances.clone();
        let res = op(self);
        if res.is_err() {
            self.currencies = currencies;
            self.balances = balances;
        }
        res
    }
}
