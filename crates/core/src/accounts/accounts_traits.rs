//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use rust_decimal::Decimal;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations acquire their own connection for every call and release
/// it before returning, whether the call succeeds or fails. No connection or
/// transaction is held across calls.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Persists a newly opened account (active, zero balance).
    fn create(&self, new_account: NewAccount) -> Result<()>;

    /// Lists every active account, ordered by account number.
    fn list_active(&self) -> Result<Vec<Account>>;

    /// Finds the active account with the given number.
    ///
    /// If the backend yields more than one row for the number, the last row
    /// scanned is returned.
    fn find_by_number(&self, number: i32) -> Result<Option<Account>>;

    /// Overwrites the balance inside a transaction.
    ///
    /// The transaction is committed before this returns `Ok`. On failure it
    /// is rolled back; if the rollback fails too, the rollback failure is
    /// returned with the original failure as context.
    fn update_balance(&self, number: i32, new_balance: Decimal) -> Result<()>;

    /// Permanently removes the account record.
    fn delete(&self, number: i32) -> Result<()>;

    /// Marks the account as inactive.
    fn deactivate(&self, number: i32) -> Result<()>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer enforces the account rules and is the only entry point
/// for callers.
pub trait AccountServiceTrait: Send + Sync {
    /// Lists all active accounts.
    fn list_open_accounts(&self) -> Result<Vec<Account>>;

    /// Returns the current balance of an account.
    fn get_balance(&self, number: i32) -> Result<Decimal>;

    /// Opens a new account.
    fn open(&self, new_account: NewAccount) -> Result<()>;

    /// Withdraws a positive amount not larger than the balance.
    fn withdraw(&self, number: i32, amount: Decimal) -> Result<()>;

    /// Deposits a positive amount.
    fn deposit(&self, number: i32, amount: Decimal) -> Result<()>;

    /// Moves an amount between two accounts as a withdrawal followed by a
    /// deposit. The two steps are not atomic.
    fn transfer(&self, from_number: i32, to_number: i32, amount: Decimal) -> Result<()>;

    /// Deletes an account with a zero balance.
    fn close(&self, number: i32) -> Result<()>;

    /// Deactivates an account with a zero balance.
    fn deactivate(&self, number: i32) -> Result<()>;

    /// Retrieves an account by number, failing if none is registered.
    fn get_account(&self, number: i32) -> Result<Account>;
}
