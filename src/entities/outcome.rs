// 🧾 Operation Outcomes - what a deposit/withdraw/interest call did
//
// Account operations never panic and never print. They report back:
// - Ok(Outcome::Applied)  → balance changed
// - Ok(Outcome::Ignored)  → silent no-op (non-positive deposit)
// - Err(Rejection)        → named policy rejection, Display = user-visible notice

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Outcome {
    /// Balance moved by `amount`; `balance` is the new balance
    Applied { amount: f64, balance: f64 },

    /// Nothing happened and nothing should be reported
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

// ============================================================================
// REJECTION
// ============================================================================

/// Policy rejections. The error text is the notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Rejection {
    #[error("Insufficient funds or invalid amount.")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Withdrawal exceeds overdraft limit or invalid amount.")]
    OverdraftExceeded { requested: f64, available: f64 },

    #[error("Deposits are not allowed in Fixed Deposit accounts.")]
    DepositsNotAllowed,

    #[error("Withdrawals are not allowed in Fixed Deposit accounts.")]
    WithdrawalsNotAllowed,
}

/// Result of a deposit or withdrawal
pub type OperationResult = Result<Outcome, Rejection>;
