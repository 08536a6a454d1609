//! Database model for accounts.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;

use bytebank_core::accounts::{Account, Client};

use crate::errors::StorageError;

/// Database model for the `conta` table.
///
/// Field order follows the column order, which `Queryable` decodes
/// positionally.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::conta)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub numero: i32,
    pub saldo: String,
    pub cliente_nome: String,
    pub cliente_cpf: String,
    pub cliente_email: String,
    pub esta_ativa: bool,
}

impl From<Account> for AccountDB {
    fn from(domain: Account) -> Self {
        Self {
            numero: domain.number,
            saldo: domain.balance.to_string(),
            cliente_nome: domain.owner.name,
            cliente_cpf: domain.owner.national_id,
            cliente_email: domain.owner.email,
            esta_ativa: domain.is_active,
        }
    }
}

impl TryFrom<AccountDB> for Account {
    type Error = StorageError;

    fn try_from(db: AccountDB) -> Result<Self, Self::Error> {
        let balance =
            Decimal::from_str(&db.saldo).map_err(|e| StorageError::InvalidBalance {
                number: db.numero,
                value: db.saldo.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            number: db.numero,
            balance,
            owner: Client {
                name: db.cliente_nome,
                national_id: db.cliente_cpf,
                email: db.cliente_email,
            },
            is_active: db.esta_ativa,
        })
    }
}
