//! Rejection types for account operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an account operation was refused
///
/// The account's public contract collapses rejections into a bare `false`
/// or a silent no-op; this enum is what the `try_` variants return and
/// what the advisory warnings carry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Deposit, withdrawal, or transfer called with a zero or negative amount
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// Withdrawal or transfer larger than the current balance
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Transfer where source and target share an account number
    #[error("cannot transfer to the same account")]
    SameAccount,

    /// Interest accrual on a zero or negative balance
    #[error("no interest accrues on a non-positive balance")]
    NonPositiveBalance,
}
