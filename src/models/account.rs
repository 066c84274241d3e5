//! Accounts are the parties that hold balances, issue currencies, and
//! authorize operations. The core never creates accounts; whether an account
//! exists is the host's business (see the
//! [AccountDirectory](../../host/trait.AccountDirectory.html) collaborator),
//! so all we keep here is the identifier type.

use std::fmt;

/// An opaque account identifier, assigned by the host.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AccountID(String);

impl AccountID {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    /// Return a string ref for this ID
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::convert::Into<String> for AccountID {
    fn into(self) -> String {
        let AccountID(val) = self;
        val
    }
}

impl std::convert::From<String> for AccountID {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::convert::From<&str> for AccountID {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for AccountID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
