// 🐷 Savings Account - base movement rules plus percentage interest

use serde::{Deserialize, Serialize};

use super::account::{AccountCore, AccountType, BankAccount, InterestBearing};
use super::outcome::{OperationResult, Outcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    core: AccountCore,

    /// Percentage applied per accrual (not validated, may be negative)
    interest_rate: f64,
}

impl SavingsAccount {
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
    ) -> Self {
        SavingsAccount {
            core: AccountCore::new(account_number, holder_name, balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }
}

impl BankAccount for SavingsAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Savings
    }

    fn deposit(&mut self, amount: f64) -> OperationResult {
        Ok(self.core.deposit(amount))
    }

    fn withdraw(&mut self, amount: f64) -> OperationResult {
        self.core.withdraw(amount)
    }

    fn display_info(&self) -> String {
        format!(
            "{}Interest Rate: {:.2}%\n",
            self.core.display_info(),
            self.interest_rate
        )
    }
}

impl InterestBearing for SavingsAccount {
    /// balance * rate / 100, through the guarded deposit: a zero or negative
    /// rate leaves the balance alone rather than withdrawing
    fn calculate_interest(&mut self) -> Outcome {
        let interest = self.core.balance() * self.interest_rate / 100.0;
        self.core.deposit(interest)
    }
}
