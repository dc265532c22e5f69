// Account Ledger - Core Library
// In-memory bank accounts (savings, checking, fixed deposit) and the
// interactive menu that creates and lists them.

pub mod entities;
pub mod config;
pub mod menu;

// Re-export commonly used types
pub use entities::{
    Account, AccountCore, AccountHandle, AccountRegistry, AccountType,
    BankAccount, InterestBearing,
    SavingsAccount, CheckingAccount, FixedDepositAccount, FIXED_DEPOSIT_RATE,
    Outcome, Rejection, OperationResult,
};
pub use config::LedgerConfig;
pub use menu::{Menu, MenuChoice};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
