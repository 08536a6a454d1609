//! Account domain models.

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Owner of an account. Immutable once embedded in an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    /// National identification number (CPF), e.g. "12345678900"
    pub national_id: String,
    pub email: String,
}

/// Client fields supplied when opening an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub national_id: String,
    pub email: String,
}

impl From<NewClient> for Client {
    fn from(data: NewClient) -> Self {
        Self {
            name: data.name,
            national_id: data.national_id,
            email: data.email,
        }
    }
}

/// Input model for opening a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Caller-supplied account number
    pub number: i32,
    pub client: NewClient,
}

/// Domain model representing a bank account.
///
/// Two accounts are the same account when their numbers match; the other
/// fields are a snapshot of its state and do not take part in equality or
/// hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub number: i32,
    pub balance: Decimal,
    pub owner: Client,
    pub is_active: bool,
}

impl Account {
    /// Builds a freshly opened account: active with a zero balance.
    pub fn open(new_account: NewAccount) -> Self {
        Self {
            number: new_account.number,
            balance: Decimal::ZERO,
            owner: new_account.client.into(),
            is_active: true,
        }
    }

    /// Returns true unless the balance is exactly zero.
    pub fn has_balance(&self) -> bool {
        !self.balance.is_zero()
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}
