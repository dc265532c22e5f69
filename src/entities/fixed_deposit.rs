// 🔒 Fixed Deposit Account - balance is locked, only interest moves it
//
// Public deposit/withdraw always reject. Interest is credited through the
// core's unguarded credit path, so it still lands.

use serde::{Deserialize, Serialize};

use super::account::{AccountCore, AccountType, BankAccount, InterestBearing};
use super::outcome::{OperationResult, Outcome, Rejection};

/// Flat percentage per month of term
pub const FIXED_DEPOSIT_RATE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositAccount {
    core: AccountCore,

    /// Term in months
    term_months: i32,
}

impl FixedDepositAccount {
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        balance: f64,
        term_months: i32,
    ) -> Self {
        FixedDepositAccount {
            core: AccountCore::new(account_number, holder_name, balance),
            term_months,
        }
    }

    pub fn term_months(&self) -> i32 {
        self.term_months
    }
}

impl BankAccount for FixedDepositAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::FixedDeposit
    }

    fn deposit(&mut self, _amount: f64) -> OperationResult {
        Err(Rejection::DepositsNotAllowed)
    }

    fn withdraw(&mut self, _amount: f64) -> OperationResult {
        Err(Rejection::WithdrawalsNotAllowed)
    }

    fn display_info(&self) -> String {
        format!(
            "{}Term: {} months\n",
            self.core.display_info(),
            self.term_months
        )
    }
}

impl InterestBearing for FixedDepositAccount {
    /// balance * 5% * term / 100, applied unconditionally
    fn calculate_interest(&mut self) -> Outcome {
        let interest =
            self.core.balance() * FIXED_DEPOSIT_RATE * f64::from(self.term_months) / 100.0;
        self.core.credit(interest)
    }
}
