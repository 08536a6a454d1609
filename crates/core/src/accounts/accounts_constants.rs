//! Business rule messages returned by the account service.
//!
//! Callers and tests match on these, so they are kept stable.

pub const WITHDRAWAL_AMOUNT_NOT_POSITIVE: &str = "Withdrawal amount must be greater than zero";

pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance";

pub const ACCOUNT_NOT_ACTIVE: &str = "Account is not active";

pub const DEPOSIT_AMOUNT_NOT_POSITIVE: &str = "Deposit amount must be greater than zero";

pub const CLOSE_WITH_BALANCE: &str = "Account cannot be closed while it still holds a balance";

pub const DEACTIVATE_WITH_BALANCE: &str =
    "Account cannot be deactivated while it still holds a balance";

pub const ACCOUNT_NOT_FOUND: &str = "No account registered with that number";

pub const AMOUNT_NOT_REPRESENTABLE: &str =
    "Amount cannot be applied to the balance without overflow or loss of precision";
