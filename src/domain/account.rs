//! Account domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::result::Rejection;

/// A bank account: an opaque number plus a running balance
///
/// The account number is fixed at construction, and the balance only moves
/// through [`deposit`](Account::deposit), [`withdraw`](Account::withdraw),
/// [`transfer_to`](Account::transfer_to), and
/// [`accrue_interest`](Account::accrue_interest) or their `try_` variants,
/// so the fields stay private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    ///
    /// The opening balance is accepted as-is; zero and negative openings
    /// are valid.
    pub fn new(number: impl Into<String>, opening_balance: Decimal) -> Self {
        let now = Utc::now();
        Self {
            number: number.into(),
            balance: opening_balance,
            created_at: now,
            updated_at: now,
        }
    }

    /// The account number (fixed at construction)
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// When the account was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the balance last moved
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check if the account has a positive balance
    pub fn is_positive(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// Check if the account is overdrawn (negative balance)
    pub fn is_overdrawn(&self) -> bool {
        self.balance < Decimal::ZERO
    }

    /// Deposit an amount into the account
    ///
    /// Non-positive amounts are refused with an advisory warning; the
    /// balance is left unchanged.
    pub fn deposit(&mut self, amount: Decimal) {
        if let Err(reason) = self.try_deposit(amount) {
            warn!(account = %self.number, %amount, %reason, "deposit rejected");
        }
    }

    /// Checked deposit: returns the rejection cause instead of warning
    pub fn try_deposit(&mut self, amount: Decimal) -> Result<(), Rejection> {
        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }
        self.balance += amount;
        self.touch();
        Ok(())
    }

    /// Withdraw an amount from the account
    ///
    /// Returns true on success. A non-positive amount and insufficient
    /// funds both come back as `false`; callers that need to tell the two
    /// apart use [`try_withdraw`](Account::try_withdraw).
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        match self.try_withdraw(amount) {
            Ok(()) => true,
            Err(reason) => {
                warn!(account = %self.number, %amount, %reason, "withdrawal rejected");
                false
            }
        }
    }

    /// Checked withdrawal: returns the rejection cause instead of warning
    pub fn try_withdraw(&mut self, amount: Decimal) -> Result<(), Rejection> {
        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }
        if self.balance < amount {
            return Err(Rejection::InsufficientFunds);
        }
        self.balance -= amount;
        self.touch();
        Ok(())
    }

    /// Transfer an amount from this account into `target`
    ///
    /// A transfer into the same account is refused outright, before any
    /// withdrawal is attempted. Otherwise the transfer succeeds exactly
    /// when the withdrawal on this account succeeds.
    pub fn transfer_to(&mut self, target: &mut Account, amount: Decimal) -> bool {
        match self.try_transfer_to(target, amount) {
            Ok(()) => true,
            Err(reason) => {
                warn!(
                    from = %self.number,
                    to = %target.number,
                    %amount,
                    %reason,
                    "transfer rejected"
                );
                false
            }
        }
    }

    /// Checked transfer: returns the rejection cause instead of warning
    ///
    /// Identity is the account number. The borrow rules already rule out
    /// passing one account as both source and target, so the number
    /// comparison is what stands in for the same-instance check.
    pub fn try_transfer_to(
        &mut self,
        target: &mut Account,
        amount: Decimal,
    ) -> Result<(), Rejection> {
        if self.number == target.number {
            return Err(Rejection::SameAccount);
        }
        self.try_withdraw(amount)?;
        // The withdrawal proves amount > 0, so this deposit cannot be refused.
        target.try_deposit(amount)
    }

    /// Apply simple interest at an annual percentage rate (5.0 means 5%)
    ///
    /// One non-compounding accrual per call. Accounts at or below zero
    /// earn nothing; the refusal is advisory and the balance is left
    /// unchanged. The rate itself is not validated.
    pub fn accrue_interest(&mut self, annual_rate_percent: Decimal) {
        if let Err(reason) = self.try_accrue_interest(annual_rate_percent) {
            warn!(
                account = %self.number,
                rate = %annual_rate_percent,
                %reason,
                "interest accrual skipped"
            );
        }
    }

    /// Checked interest accrual: returns the amount credited
    pub fn try_accrue_interest(
        &mut self,
        annual_rate_percent: Decimal,
    ) -> Result<Decimal, Rejection> {
        if !self.is_positive() {
            return Err(Rejection::NonPositiveBalance);
        }
        let interest = self.balance * annual_rate_percent / Decimal::ONE_HUNDRED;
        self.balance += interest;
        self.touch();
        Ok(interest)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
