use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::common::{Displayable, Identifiable};
use crate::domain::movement::{Movement, MovementKind};
use crate::domain::policy::AccountPolicy;

/// Balance-holding entity that validates and records movements.
///
/// The movement sequence is append-only and owned exclusively by the
/// account; callers only mutate it through [`Account::deposit`] and
/// [`Account::withdraw`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    balance: f64,
    movements: Vec<Movement>,
    #[serde(default)]
    pub policy: AccountPolicy,
}

/// Validation failures for deposit and withdrawal operations.
///
/// Checks run fully before any movement is recorded, so a returned error
/// means the account state is unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("{0}: the amount must be a positive value")]
    InvalidAmount(f64),
    #[error("already reached the {0} daily deposits")]
    DepositLimitExceeded(u32),
    #[error("cannot withdraw more than the {0} balance")]
    InsufficientBalance(f64),
    #[error("cannot withdraw more than {cap} per day, remaining today: {remaining}")]
    DailyWithdrawalLimitExceeded { cap: f64, remaining: f64 },
}

impl Account {
    /// Creates a new account with a zero balance and default limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: 0.0,
            movements: Vec::new(),
            policy: AccountPolicy::default(),
        }
    }

    /// Creates an account from an opening balance and pre-existing
    /// movements, for migrations and imports.
    pub fn with_history(
        name: impl Into<String>,
        opening_balance: f64,
        movements: Vec<Movement>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: opening_balance,
            movements,
            policy: AccountPolicy::default(),
        }
    }

    /// Replaces the default limits with a custom policy.
    pub fn with_policy(mut self, policy: AccountPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Records a deposit dated today, increasing the balance.
    pub fn deposit(&mut self, amount: f64, clock: &impl Clock) -> Result<(), AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::InvalidAmount(amount));
        }
        let today = clock.today();
        let deposits_today = self.movements_deposited_on(today).count() as u32;
        if deposits_today >= self.policy.daily_deposit_limit {
            return Err(AccountError::DepositLimitExceeded(
                self.policy.daily_deposit_limit,
            ));
        }
        self.record(Movement::new(today, amount, MovementKind::Deposit));
        tracing::debug!(account = %self.id, amount, "deposit recorded");
        Ok(())
    }

    /// Records a withdrawal dated today, decreasing the balance.
    pub fn withdraw(&mut self, amount: f64, clock: &impl Clock) -> Result<(), AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::InvalidAmount(amount));
        }
        if self.balance - amount < 0.0 {
            return Err(AccountError::InsufficientBalance(self.balance));
        }
        let today = clock.today();
        let remaining = self.policy.daily_withdrawal_cap - self.amount_withdrawn_on(today);
        if amount > remaining {
            return Err(AccountError::DailyWithdrawalLimitExceeded {
                cap: self.policy.daily_withdrawal_cap,
                remaining,
            });
        }
        self.record(Movement::new(today, amount, MovementKind::Withdrawal));
        tracing::debug!(account = %self.id, amount, "withdrawal recorded");
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Read-only view over the insertion-ordered movement sequence.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Total amount withdrawn on the given date, 0 if none.
    pub fn amount_withdrawn_on(&self, date: NaiveDate) -> f64 {
        self.movements_withdrawn_on(date)
            .map(|movement| movement.amount)
            .sum()
    }

    /// Amount still withdrawable today under the daily cap.
    pub fn remaining_daily_allowance(&self, clock: &impl Clock) -> f64 {
        self.policy.daily_withdrawal_cap - self.amount_withdrawn_on(clock.today())
    }

    /// Deposits recorded on the given date, re-evaluated on each call.
    pub fn movements_deposited_on(
        &self,
        date: NaiveDate,
    ) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| movement.was_deposited_on(date))
    }

    /// Withdrawals recorded on the given date, re-evaluated on each call.
    pub fn movements_withdrawn_on(
        &self,
        date: NaiveDate,
    ) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| movement.was_withdrawn_on(date))
    }

    fn record(&mut self, movement: Movement) {
        self.balance += movement.signed_amount();
        self.movements.push(movement);
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.name, self.balance)
    }
}
