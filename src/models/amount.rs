//! Typed amounts are the arithmetic backbone of the core: a fixed-point
//! value that knows which currency it is denominated in. Every binary
//! operation between two amounts checks that their currency identities
//! match, and every addition/subtraction is overflow-checked. There is no
//! implicit precision conversion anywhere, which keeps "1.00 USD plus
//! 1.0000 TOK" a hard error instead of a silent bug.

use crate::error::{Error, Result};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The longest well-formed currency code, in bytes.
const CODE_MAX_LEN: usize = 7;
/// The largest number of decimal digits a currency may carry.
const PRECISION_MAX: u8 = 18;

/// A short symbol string naming a currency, eg "TOK" or "USD".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new<T: Into<String>>(code: T) -> Self {
        Self(code.into())
    }

    /// Return a string ref for this code
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// A code is well-formed if it's 1-7 bytes of uppercase ASCII letters.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self.0.len() <= CODE_MAX_LEN
            && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl std::convert::From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl std::convert::From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The (code, precision) pair that uniquely names a token denomination.
/// Two currencies with the same code but different precisions are distinct
/// and their amounts never mix.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, Serialize, Deserialize)]
pub struct CurrencyIdentity {
    /// The currency's symbol string.
    #[getset(get = "pub")]
    code: CurrencyCode,
    /// How many decimal digits amounts in this currency carry.
    #[getset(get_copy = "pub")]
    precision: u8,
}

impl CurrencyIdentity {
    pub fn new<T: Into<CurrencyCode>>(code: T, precision: u8) -> Self {
        Self {
            code: code.into(),
            precision,
        }
    }

    /// Check this identity for well-formedness.
    pub fn validate(&self) -> Result<()> {
        if !self.code.is_well_formed() || self.precision > PRECISION_MAX {
            Err(Error::InvalidCurrencyIdentity)?;
        }
        Ok(())
    }
}

impl fmt::Display for CurrencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

/// A signed fixed-point value bound to a currency identity. The magnitude is
/// stored as a count of smallest representable units (so `100.0000 TOK` at
/// precision 4 is `units == 1_000_000`), which makes all arithmetic exact
/// integer arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct TypedAmount {
    /// The count of smallest units.
    #[getset(get_copy = "pub")]
    units: i64,
    /// The currency this amount is denominated in.
    #[getset(get = "pub")]
    identity: CurrencyIdentity,
}

impl TypedAmount {
    pub fn new(units: i64, identity: CurrencyIdentity) -> Self {
        Self { units, identity }
    }

    /// The zero amount of the given currency.
    pub fn zero(identity: CurrencyIdentity) -> Self {
        Self::new(0, identity)
    }

    /// Build an amount from a decimal value, scaling it into smallest units.
    /// Digits beyond the identity's precision are truncated. Fails with
    /// `AmountOverflow` if the scaled value doesn't fit the representable
    /// range.
    pub fn from_decimal(amount: Decimal, identity: CurrencyIdentity) -> Result<Self> {
        identity.validate()?;
        let scale = Decimal::from(10i64.pow(identity.precision() as u32));
        let units = amount
            .checked_mul(scale)
            .ok_or(Error::AmountOverflow)?
            .trunc()
            .to_i64()
            .ok_or(Error::AmountOverflow)?;
        Ok(Self::new(units, identity))
    }

    /// Render this amount as a decimal value (eg for display or reporting).
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.units, self.identity.precision() as u32)
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    pub fn is_positive(&self) -> bool {
        self.units > 0
    }

    /// Validate this amount where positivity is required: the identity must
    /// be well-formed and the magnitude strictly greater than zero.
    pub fn validate(&self) -> Result<()> {
        self.identity.validate()?;
        if !self.is_positive() {
            Err(Error::NonPositiveAmount)?;
        }
        Ok(())
    }

    fn require_same_identity(&self, other: &TypedAmount) -> Result<()> {
        if self.identity != other.identity {
            Err(Error::CurrencyIdentityMismatch)?;
        }
        Ok(())
    }

    /// Add two amounts of the same currency, checking for overflow.
    pub fn checked_add(&self, other: &TypedAmount) -> Result<TypedAmount> {
        self.require_same_identity(other)?;
        let units = self
            .units
            .checked_add(other.units)
            .ok_or(Error::AmountOverflow)?;
        Ok(Self::new(units, self.identity.clone()))
    }

    /// Subtract an amount of the same currency, checking for overflow.
    pub fn checked_sub(&self, other: &TypedAmount) -> Result<TypedAmount> {
        self.require_same_identity(other)?;
        let units = self
            .units
            .checked_sub(other.units)
            .ok_or(Error::AmountOverflow)?;
        Ok(Self::new(units, self.identity.clone()))
    }

    /// Compare two amounts of the same currency. Comparing across
    /// currencies is a defined error, not an ordering.
    pub fn compare(&self, other: &TypedAmount) -> Result<Ordering> {
        self.require_same_identity(other)?;
        Ok(self.units.cmp(&other.units))
    }
}

impl fmt::Display for TypedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.identity.code())
    }
}
