use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use bytebank_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use bytebank_core::errors::Result;

use super::model::AccountDB;
use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use crate::schema::conta;
use crate::schema::conta::dsl::*;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

fn into_accounts(rows: Vec<AccountDB>) -> Result<Vec<Account>> {
    rows.into_iter()
        .map(Account::try_from)
        .collect::<std::result::Result<Vec<_>, StorageError>>()
        .into_core()
}

fn warn_if_missing(operation: &str, number: i32, affected_rows: usize) {
    if affected_rows == 0 {
        warn!("{}: no account row with number {}", operation, number);
    }
}

/// Runs `statement` inside an explicit `BEGIN IMMEDIATE` ... `COMMIT`.
///
/// A failed statement is rolled back. If the rollback fails too, the rollback
/// failure is returned with the statement failure as its cause.
fn execute_in_transaction<F>(
    conn: &mut SqliteConnection,
    statement: F,
) -> std::result::Result<usize, StorageError>
where
    F: FnOnce(&mut SqliteConnection) -> QueryResult<usize>,
{
    // Take the write lock up front so concurrent writers wait on busy_timeout.
    AnsiTransactionManager::begin_transaction_sql(conn, "BEGIN IMMEDIATE")?;

    match statement(conn) {
        Ok(affected_rows) => {
            AnsiTransactionManager::commit_transaction(conn)?;
            Ok(affected_rows)
        }
        Err(cause) => match AnsiTransactionManager::rollback_transaction(conn) {
            Ok(()) => Err(StorageError::QueryFailed(cause)),
            Err(rollback) => Err(StorageError::RollbackFailed {
                rollback,
                cause: Box::new(StorageError::QueryFailed(cause)),
            }),
        },
    }
}

impl AccountRepositoryTrait for AccountRepository {
    fn create(&self, new_account: NewAccount) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let account_db: AccountDB = Account::open(new_account).into();
        debug!("Inserting account {}", account_db.numero);

        diesel::insert_into(conta::table)
            .values(&account_db)
            .execute(&mut conn)
            .into_core()?;

        Ok(())
    }

    /// Lists active accounts ordered by number
    fn list_active(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = conta
            .filter(esta_ativa.eq(true))
            .select(AccountDB::as_select())
            .order(numero.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        into_accounts(rows)
    }

    fn find_by_number(&self, number: i32) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = conta
            .filter(numero.eq(number))
            .filter(esta_ativa.eq(true))
            .select(AccountDB::as_select())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        // Last row scanned wins.
        rows.into_iter()
            .last()
            .map(Account::try_from)
            .transpose()
            .into_core()
    }

    fn update_balance(&self, number: i32, new_balance: Decimal) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected_rows = execute_in_transaction(&mut conn, |conn| {
            diesel::update(conta.find(number))
                .set(saldo.eq(new_balance.to_string()))
                .execute(conn)
        })
        .map_err(|e| {
            error!("Balance update of account {} failed: {}", number, e);
            e
        })
        .into_core()?;

        warn_if_missing("update_balance", number, affected_rows);
        debug!("Balance of account {} set to {}", number, new_balance);
        Ok(())
    }

    fn delete(&self, number: i32) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected_rows = diesel::delete(conta.find(number))
            .execute(&mut conn)
            .into_core()?;
        warn_if_missing("delete", number, affected_rows);

        Ok(())
    }

    fn deactivate(&self, number: i32) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected_rows = diesel::update(conta.find(number))
            .set(esta_ativa.eq(false))
            .execute(&mut conn)
            .into_core()?;
        warn_if_missing("deactivate", number, affected_rows);

        Ok(())
    }
}
