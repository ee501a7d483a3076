use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// One recorded deposit or withdrawal event.
///
/// Immutable once constructed; the owning account validates the amount
/// before creating it, so no validation happens here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: MovementKind,
}

/// Direction of a movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl Movement {
    pub fn new(date: NaiveDate, amount: f64, kind: MovementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            kind,
        }
    }

    pub fn is_deposit(&self) -> bool {
        matches!(self.kind, MovementKind::Deposit)
    }

    /// True iff this is a deposit recorded on the given date.
    pub fn was_deposited_on(&self, date: NaiveDate) -> bool {
        self.is_deposit() && self.date == date
    }

    /// True iff this is a withdrawal recorded on the given date.
    pub fn was_withdrawn_on(&self, date: NaiveDate) -> bool {
        !self.is_deposit() && self.date == date
    }

    /// Amount with the sign the movement applies to a balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }
}

impl Identifiable for Movement {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Movement {
    fn display_label(&self) -> String {
        format!("{} {:?} {:.2}", self.date, self.kind, self.amount)
    }
}
