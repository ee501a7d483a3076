use serde::{Deserialize, Serialize};

pub const DEFAULT_DAILY_DEPOSIT_LIMIT: u32 = 3;
pub const DEFAULT_DAILY_WITHDRAWAL_CAP: f64 = 1000.0;

/// Per-account limits applied by deposit and withdrawal validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AccountPolicy {
    /// Maximum count of deposit movements permitted per calendar date.
    pub daily_deposit_limit: u32,
    /// Ceiling on total withdrawn amount per calendar date.
    pub daily_withdrawal_cap: f64,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            daily_deposit_limit: DEFAULT_DAILY_DEPOSIT_LIMIT,
            daily_withdrawal_cap: DEFAULT_DAILY_WITHDRAWAL_CAP,
        }
    }
}
