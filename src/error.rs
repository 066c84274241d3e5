//! The errors the token core can produce. Every error aborts the enclosing
//! operation; none of them is retried internally. The caller (the invoking
//! transaction) decides whether to retry with corrected input.

use thiserror::Error;

/// The error enum for the token core. All operation failures carry one of
/// these kinds so callers can distinguish them.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A model builder was driven incorrectly. This is an internal error and
    /// should never surface from a well-formed operation call.
    #[error("failed to build object: {0}")]
    BuilderFailed(String),
    /// The currency code or precision fails the well-formedness check.
    #[error("currency code or precision is malformed")]
    InvalidCurrencyIdentity,
    /// An amount was required to be strictly positive and wasn't.
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    /// Amount arithmetic left the representable range.
    #[error("amount arithmetic overflowed")]
    AmountOverflow,
    /// Two amounts denominated in different currencies met in an operation.
    #[error("operands are denominated in different currencies")]
    CurrencyIdentityMismatch,
    /// A currency with this identity has already been created.
    #[error("a currency with this identity already exists")]
    CurrencyAlreadyExists,
    /// No currency with this identity has been created.
    #[error("no currency with this identity exists")]
    CurrencyNotFound,
    /// The caller is not authorized as the currency's issuer.
    #[error("caller is not the issuer of this currency")]
    UnauthorizedIssuer,
    /// Issuing the requested amount would push supply past the ceiling.
    #[error("issuance would exceed the currency's maximum supply")]
    SupplyCeilingExceeded,
    /// The account is not known to the host's account directory.
    #[error("account does not exist")]
    AccountUnknown,
    /// The account holds no balance record in this currency.
    #[error("account holds no balance in this currency")]
    AccountHasNoBalance,
    /// The account's balance is smaller than the debit amount.
    #[error("account balance is insufficient")]
    InsufficientBalance,
    /// A transfer named the same account on both sides.
    #[error("cannot transfer from an account to itself")]
    SelfTransfer,
    /// The caller is not authorized to perform this action.
    #[error("caller is not authorized to perform this action")]
    UnauthorizedCaller,
}

/// Our result type, bound to [Error](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;
