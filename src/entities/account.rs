// 💳 Account Entity - shared identity/balance plus the closed set of variants
//
// "Every account has a number, a holder and a balance; the variant decides
//  which movements of that balance are allowed"
//
// Layers:
// - AccountCore: identity + balance, the base deposit/withdraw rules
// - BankAccount: the shared contract every variant implements
// - InterestBearing: interest accrual (Savings and Fixed Deposit only)
// - Account: closed sum over the three variants, what the registry owns
// - AccountRegistry: append-only, ordered, owns every account of the session

use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, info};

use super::checking::CheckingAccount;
use super::fixed_deposit::FixedDepositAccount;
use super::outcome::{OperationResult, Outcome, Rejection};
use super::savings::SavingsAccount;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Interest-bearing, base withdraw rules
    Savings,

    /// May go negative down to the overdraft limit
    Checking,

    /// Locked balance, grows only through interest
    FixedDeposit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::FixedDeposit => "Fixed Deposit",
        }
    }
}

// ============================================================================
// ACCOUNT CORE (base fields + base rules)
// ============================================================================

/// Identity and balance shared by every variant
///
/// The account number is opaque: no format or uniqueness checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCore {
    account_number: String,
    holder_name: String,
    balance: f64,
}

impl AccountCore {
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        balance: f64,
    ) -> Self {
        AccountCore {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Guarded deposit: non-positive amounts are silently ignored
    pub fn deposit(&mut self, amount: f64) -> Outcome {
        if amount > 0.0 {
            self.credit(amount)
        } else {
            Outcome::Ignored
        }
    }

    /// Base withdraw rule: 0 < amount <= balance
    pub fn withdraw(&mut self, amount: f64) -> OperationResult {
        if amount > 0.0 && amount <= self.balance {
            Ok(self.debit(amount))
        } else {
            Err(Rejection::InsufficientFunds {
                requested: amount,
                available: self.balance,
            })
        }
    }

    /// Unguarded credit. Variants that block public deposits still land
    /// interest through here.
    pub(crate) fn credit(&mut self, amount: f64) -> Outcome {
        self.balance += amount;
        Outcome::Applied {
            amount,
            balance: self.balance,
        }
    }

    /// Unguarded debit; callers have already applied their own limit rule
    pub(crate) fn debit(&mut self, amount: f64) -> Outcome {
        self.balance -= amount;
        Outcome::Applied {
            amount,
            balance: self.balance,
        }
    }

    /// Base display block (number, holder, balance to two decimals)
    pub fn display_info(&self) -> String {
        format!(
            "Account Number: {}\nAccount Holder: {}\nBalance: ${:.2}\n",
            self.account_number, self.holder_name, self.balance
        )
    }
}

// ============================================================================
// SHARED CONTRACT
// ============================================================================

/// Contract shared by every account variant
pub trait BankAccount {
    fn core(&self) -> &AccountCore;

    fn account_type(&self) -> AccountType;

    fn deposit(&mut self, amount: f64) -> OperationResult;

    fn withdraw(&mut self, amount: f64) -> OperationResult;

    fn balance(&self) -> f64 {
        self.core().balance()
    }

    fn account_number(&self) -> &str {
        self.core().account_number()
    }

    fn holder_name(&self) -> &str {
        self.core().holder_name()
    }

    /// Base block; variants append their own lines after it
    fn display_info(&self) -> String {
        self.core().display_info()
    }
}

/// Interest accrual, deliberately outside `BankAccount`: checking accounts
/// have no interest policy.
pub trait InterestBearing: BankAccount {
    fn calculate_interest(&mut self) -> Outcome;
}

// ============================================================================
// ACCOUNT (closed sum over the variants)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "account_type")]
pub enum Account {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
    FixedDeposit(FixedDepositAccount),
}

impl Account {
    fn inner(&self) -> &dyn BankAccount {
        match self {
            Account::Savings(acc) => acc,
            Account::Checking(acc) => acc,
            Account::FixedDeposit(acc) => acc,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BankAccount {
        match self {
            Account::Savings(acc) => acc,
            Account::Checking(acc) => acc,
            Account::FixedDeposit(acc) => acc,
        }
    }

    /// Interest view of this account, `None` for checking accounts
    pub fn as_interest_bearing_mut(&mut self) -> Option<&mut dyn InterestBearing> {
        match self {
            Account::Savings(acc) => Some(acc),
            Account::FixedDeposit(acc) => Some(acc),
            Account::Checking(_) => None,
        }
    }

    /// Accrue interest if this variant has an interest policy
    pub fn calculate_interest(&mut self) -> Option<Outcome> {
        let outcome = self.as_interest_bearing_mut()?.calculate_interest();
        if let Outcome::Applied { amount, balance } = outcome {
            info!(
                account = %self.account_number(),
                kind = self.account_type().as_str(),
                interest = amount,
                balance,
                "interest credited"
            );
        }
        Some(outcome)
    }

    fn trace_result(&self, operation: &str, amount: f64, result: &OperationResult) {
        match result {
            Ok(Outcome::Applied { balance, .. }) => debug!(
                account = %self.account_number(),
                kind = self.account_type().as_str(),
                operation,
                amount,
                balance,
                "applied"
            ),
            Ok(Outcome::Ignored) => debug!(
                account = %self.account_number(),
                operation,
                amount,
                "ignored non-positive amount"
            ),
            Err(reason) => info!(
                account = %self.account_number(),
                kind = self.account_type().as_str(),
                operation,
                amount,
                %reason,
                "rejected"
            ),
        }
    }
}

impl BankAccount for Account {
    fn core(&self) -> &AccountCore {
        self.inner().core()
    }

    fn account_type(&self) -> AccountType {
        self.inner().account_type()
    }

    fn deposit(&mut self, amount: f64) -> OperationResult {
        let result = self.inner_mut().deposit(amount);
        self.trace_result("deposit", amount, &result);
        result
    }

    fn withdraw(&mut self, amount: f64) -> OperationResult {
        let result = self.inner_mut().withdraw(amount);
        self.trace_result("withdraw", amount, &result);
        result
    }

    fn display_info(&self) -> String {
        self.inner().display_info()
    }
}

impl From<SavingsAccount> for Account {
    fn from(account: SavingsAccount) -> Self {
        Account::Savings(account)
    }
}

impl From<CheckingAccount> for Account {
    fn from(account: CheckingAccount) -> Self {
        Account::Checking(account)
    }
}

impl From<FixedDepositAccount> for Account {
    fn from(account: FixedDepositAccount) -> Self {
        Account::FixedDeposit(account)
    }
}

// ============================================================================
// ACCOUNT REGISTRY
// ============================================================================

/// Stable reference to an account inside one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountHandle(usize);

impl AccountHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Every account created during the session, in creation order
///
/// Append-only: accounts are never removed, so handles never dangle.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        AccountRegistry {
            accounts: Vec::new(),
        }
    }

    /// Take ownership of an account and hand back its handle
    pub fn register(&mut self, account: impl Into<Account>) -> AccountHandle {
        let account = account.into();
        info!(
            account = %account.account_number(),
            kind = account.account_type().as_str(),
            balance = account.balance(),
            "account registered"
        );
        self.accounts.push(account);
        AccountHandle(self.accounts.len() - 1)
    }

    pub fn get(&self, handle: AccountHandle) -> Option<&Account> {
        self.accounts.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: AccountHandle) -> Option<&mut Account> {
        self.accounts.get_mut(handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Mutable pass over every account (e.g. accruing interest for all)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Account> {
        self.accounts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of all balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|acc| acc.balance()).sum()
    }

    /// Write every account's display block, each followed by a blank line
    pub fn render_all<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for account in &self.accounts {
            write!(out, "{}", account.display_info())?;
            writeln!(out)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_registry() -> AccountRegistry {
        let mut registry = AccountRegistry::new();
        registry.register(SavingsAccount::new("S1", "Alice", 1000.0, 5.0));
        registry.register(CheckingAccount::new("C1", "Bob", 100.0, 50.0));
        registry.register(FixedDepositAccount::new("F1", "Carl", 2000.0, 6));
        registry
    }

    #[test]
    fn test_core_deposit_positive() {
        let mut core = AccountCore::new("A1", "Alice", 100.0);
        let outcome = core.deposit(25.5);

        assert_eq!(outcome, Outcome::Applied { amount: 25.5, balance: 125.5 });
        assert_relative_eq!(core.balance(), 125.5);
    }

    #[test]
    fn test_core_deposit_non_positive_is_silent() {
        let mut core = AccountCore::new("A1", "Alice", 100.0);

        assert_eq!(core.deposit(0.0), Outcome::Ignored);
        assert_eq!(core.deposit(-40.0), Outcome::Ignored);
        assert_eq!(core.deposit(f64::NAN), Outcome::Ignored);
        assert_eq!(core.balance(), 100.0);
    }

    #[test]
    fn test_core_withdraw_bounds() {
        let mut core = AccountCore::new("A1", "Alice", 100.0);

        // Exactly the balance is allowed
        assert!(core.withdraw(100.0).is_ok());
        assert_eq!(core.balance(), 0.0);

        // Anything more, or a non-positive amount, is rejected
        let mut core = AccountCore::new("A2", "Alice", 100.0);
        assert_eq!(
            core.withdraw(100.01),
            Err(Rejection::InsufficientFunds { requested: 100.01, available: 100.0 })
        );
        assert!(core.withdraw(0.0).is_err());
        assert!(core.withdraw(-5.0).is_err());
        assert_eq!(core.balance(), 100.0);
    }

    #[test]
    fn test_core_credit_is_unguarded() {
        let mut core = AccountCore::new("A1", "Alice", 100.0);
        core.credit(-30.0);
        assert_relative_eq!(core.balance(), 70.0);
    }

    #[test]
    fn test_core_display_info() {
        let core = AccountCore::new("A1", "Alice Smith", 1234.5);
        assert_eq!(
            core.display_info(),
            "Account Number: A1\nAccount Holder: Alice Smith\nBalance: $1234.50\n"
        );
    }

    #[test]
    fn test_account_type_as_str() {
        assert_eq!(AccountType::Savings.as_str(), "Savings");
        assert_eq!(AccountType::Checking.as_str(), "Checking");
        assert_eq!(AccountType::FixedDeposit.as_str(), "Fixed Deposit");
    }

    #[test]
    fn test_account_dispatches_to_variant() {
        let mut checking = Account::from(CheckingAccount::new("C1", "Bob", 100.0, 50.0));
        assert_eq!(checking.account_type(), AccountType::Checking);
        assert!(checking.withdraw(120.0).is_ok());
        assert_relative_eq!(checking.balance(), -20.0);

        let mut fixed = Account::from(FixedDepositAccount::new("F1", "Carl", 2000.0, 6));
        assert_eq!(fixed.deposit(500.0), Err(Rejection::DepositsNotAllowed));
        assert_eq!(fixed.balance(), 2000.0);
    }

    #[test]
    fn test_checking_has_no_interest() {
        let mut checking = Account::from(CheckingAccount::new("C1", "Bob", 100.0, 50.0));
        assert!(checking.as_interest_bearing_mut().is_none());
        assert_eq!(checking.calculate_interest(), None);
        assert_eq!(checking.balance(), 100.0);
    }

    #[test]
    fn test_account_calculate_interest() {
        let mut savings = Account::from(SavingsAccount::new("S1", "Alice", 1000.0, 5.0));
        assert!(savings.calculate_interest().is_some_and(|o| o.is_applied()));
        assert_relative_eq!(savings.balance(), 1050.0);

        let mut fixed = Account::from(FixedDepositAccount::new("F1", "Carl", 2000.0, 6));
        fixed.calculate_interest();
        assert_relative_eq!(fixed.balance(), 2600.0);
    }

    #[test]
    fn test_account_serializes_with_type_tag() {
        let account = Account::from(SavingsAccount::new("S1", "Alice", 1000.0, 5.0));
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["account_type"], "Savings");

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = AccountRegistry::new();
        assert!(registry.is_empty());

        let first = registry.register(SavingsAccount::new("S1", "Alice", 1000.0, 5.0));
        let second = registry.register(CheckingAccount::new("C1", "Bob", 100.0, 50.0));

        assert_eq!(registry.len(), 2);
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(registry.get(first).unwrap().account_number(), "S1");
        assert_eq!(registry.get(second).unwrap().account_number(), "C1");
    }

    #[test]
    fn test_registry_mutate_through_handle() {
        let mut registry = AccountRegistry::new();
        let handle = registry.register(CheckingAccount::new("C1", "Bob", 100.0, 50.0));

        let account = registry.get_mut(handle).unwrap();
        assert!(account.withdraw(120.0).is_ok());
        assert!(account.withdraw(40.0).is_err());

        assert_relative_eq!(registry.get(handle).unwrap().balance(), -20.0);
    }

    #[test]
    fn test_registry_out_of_range_handle() {
        let registry = sample_registry();
        let mut other = AccountRegistry::new();
        for _ in 0..5 {
            other.register(SavingsAccount::new("X", "X", 0.0, 0.0));
        }
        let foreign = other.register(SavingsAccount::new("Y", "Y", 0.0, 0.0));

        assert!(registry.get(foreign).is_none());
    }

    #[test]
    fn test_registry_keeps_insertion_order() {
        let registry = sample_registry();
        let numbers: Vec<&str> = registry.iter().map(|acc| acc.account_number()).collect();
        assert_eq!(numbers, vec!["S1", "C1", "F1"]);
    }

    #[test]
    fn test_registry_allows_duplicate_numbers() {
        let mut registry = sample_registry();
        let again = registry.register(SavingsAccount::new("S1", "Alice Again", 10.0, 1.0));

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(again).unwrap().holder_name(), "Alice Again");
        assert_relative_eq!(registry.total_balance(), 3110.0);
    }

    #[test]
    fn test_registry_render_all() {
        let registry = sample_registry();
        let mut out = Vec::new();
        registry.render_all(&mut out).unwrap();

        let expected = "\
Account Number: S1
Account Holder: Alice
Balance: $1000.00
Interest Rate: 5.00%

Account Number: C1
Account Holder: Bob
Balance: $100.00
Overdraft Limit: $50.00

Account Number: F1
Account Holder: Carl
Balance: $2000.00
Term: 6 months

";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_registry_render_empty() {
        let registry = AccountRegistry::new();
        let mut out = Vec::new();
        registry.render_all(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
