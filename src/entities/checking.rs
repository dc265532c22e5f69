// 🏦 Checking Account - withdrawals may dip below zero, down to the overdraft limit

use serde::{Deserialize, Serialize};

use super::account::{AccountCore, AccountType, BankAccount};
use super::outcome::{OperationResult, Rejection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckingAccount {
    core: AccountCore,

    /// How far below zero the balance may go (not validated)
    overdraft_limit: f64,
}

impl CheckingAccount {
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        balance: f64,
        overdraft_limit: f64,
    ) -> Self {
        CheckingAccount {
            core: AccountCore::new(account_number, holder_name, balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    /// Balance plus overdraft headroom
    pub fn available(&self) -> f64 {
        self.core.balance() + self.overdraft_limit
    }
}

impl BankAccount for CheckingAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Checking
    }

    fn deposit(&mut self, amount: f64) -> OperationResult {
        Ok(self.core.deposit(amount))
    }

    fn withdraw(&mut self, amount: f64) -> OperationResult {
        let available = self.available();
        if amount > 0.0 && available >= amount {
            Ok(self.core.debit(amount))
        } else {
            Err(Rejection::OverdraftExceeded {
                requested: amount,
                available,
            })
        }
    }

    fn display_info(&self) -> String {
        format!(
            "{}Overdraft Limit: ${:.2}\n",
            self.core.display_info(),
            self.overdraft_limit
        )
    }
}
