use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::accounts_constants::{
    ACCOUNT_NOT_ACTIVE, ACCOUNT_NOT_FOUND, AMOUNT_NOT_REPRESENTABLE, CLOSE_WITH_BALANCE,
    DEACTIVATE_WITH_BALANCE, DEPOSIT_AMOUNT_NOT_POSITIVE, INSUFFICIENT_BALANCE,
    WITHDRAWAL_AMOUNT_NOT_POSITIVE,
};
use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing accounts
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

/// Applies a signed change to a balance, refusing results that overflow or
/// that would round away part of the amount.
fn apply_exactly(balance: Decimal, delta: Decimal) -> Result<Decimal> {
    balance
        .checked_add(delta)
        .filter(|new_balance| new_balance.checked_sub(balance) == Some(delta))
        .ok_or_else(|| Error::business_rule(AMOUNT_NOT_REPRESENTABLE))
}

impl AccountServiceTrait for AccountService {
    /// Lists all active accounts
    fn list_open_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list_active()
    }

    fn get_balance(&self, number: i32) -> Result<Decimal> {
        Ok(self.get_account(number)?.balance)
    }

    fn open(&self, new_account: NewAccount) -> Result<()> {
        debug!("Opening account {}", new_account.number);
        self.repository.create(new_account)
    }

    fn withdraw(&self, number: i32, amount: Decimal) -> Result<()> {
        let account = self.get_account(number)?;

        if amount <= Decimal::ZERO {
            return Err(Error::business_rule(WITHDRAWAL_AMOUNT_NOT_POSITIVE));
        }
        if amount > account.balance {
            return Err(Error::business_rule(INSUFFICIENT_BALANCE));
        }
        if !account.is_active {
            return Err(Error::business_rule(ACCOUNT_NOT_ACTIVE));
        }

        let new_balance = apply_exactly(account.balance, -amount)?;
        debug!("Withdrawing {} from account {}", amount, number);
        self.repository.update_balance(account.number, new_balance)
    }

    fn deposit(&self, number: i32, amount: Decimal) -> Result<()> {
        let account = self.get_account(number)?;

        if amount <= Decimal::ZERO {
            return Err(Error::business_rule(DEPOSIT_AMOUNT_NOT_POSITIVE));
        }
        if !account.is_active {
            return Err(Error::business_rule(ACCOUNT_NOT_ACTIVE));
        }

        let new_balance = apply_exactly(account.balance, amount)?;
        debug!("Depositing {} into account {}", amount, number);
        self.repository.update_balance(account.number, new_balance)
    }

    /// Withdraws from the source, then deposits into the destination.
    ///
    /// If the deposit fails the withdrawal is not undone.
    fn transfer(&self, from_number: i32, to_number: i32, amount: Decimal) -> Result<()> {
        debug!(
            "Transferring {} from account {} to account {}",
            amount, from_number, to_number
        );
        self.withdraw(from_number, amount)?;
        self.deposit(to_number, amount)
    }

    fn close(&self, number: i32) -> Result<()> {
        let account = self.get_account(number)?;
        if account.has_balance() {
            return Err(Error::business_rule(CLOSE_WITH_BALANCE));
        }

        debug!("Closing account {}", number);
        self.repository.delete(number)
    }

    fn deactivate(&self, number: i32) -> Result<()> {
        let account = self.get_account(number)?;
        if account.has_balance() {
            return Err(Error::business_rule(DEACTIVATE_WITH_BALANCE));
        }

        debug!("Deactivating account {}", number);
        self.repository.deactivate(number)
    }

    fn get_account(&self, number: i32) -> Result<Account> {
        self.repository
            .find_by_number(number)?
            .ok_or_else(|| Error::business_rule(ACCOUNT_NOT_FOUND))
    }
}
