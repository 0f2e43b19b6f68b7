//! Dashboard rules: expiry windows and the completed-cycle criterion.

use crate::error::CoreError;
use crate::status::ContractStatus;
use crate::types::Date;

/// Contracts an intern must have before their cycle can count as completed.
pub const COMPLETED_CYCLE_CONTRACTS: i64 = 4;

/// Look-ahead windows offered for the expiring-contracts view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryWindow {
    OneWeek,
    ThirtyDays,
    SixtyDays,
}

impl ExpiryWindow {
    /// Default window when the caller does not choose one.
    pub const DEFAULT: Self = Self::ThirtyDays;

    /// Parse a window from its length in days (7, 30 or 60).
    pub fn from_days(days: i64) -> Result<Self, CoreError> {
        match days {
            7 => Ok(Self::OneWeek),
            30 => Ok(Self::ThirtyDays),
            60 => Ok(Self::SixtyDays),
            other => Err(CoreError::Validation(format!(
                "Invalid expiry window {other}. Must be one of: 7, 30, 60"
            ))),
        }
    }

    /// Window length in days.
    pub fn days(self) -> i64 {
        match self {
            Self::OneWeek => 7,
            Self::ThirtyDays => 30,
            Self::SixtyDays => 60,
        }
    }

    /// Last date (inclusive) covered by the window starting at `today`.
    pub fn horizon(self, today: Date) -> Date {
        today + chrono::Duration::days(self.days())
    }
}

/// Whole days from `today` until `target` (negative if `target` is past).
pub fn days_until(target: Date, today: Date) -> i64 {
    (target - today).num_days()
}

/// An intern has completed the cycle when they hold at least
/// [`COMPLETED_CYCLE_CONTRACTS`] contracts and every one of them is closed.
pub fn is_completed_cycle(statuses: &[ContractStatus]) -> bool {
    statuses.len() as i64 >= COMPLETED_CYCLE_CONTRACTS
        && statuses.iter().all(|s| *s == ContractStatus::Closed)
}
