// Account Model
//
// One shared base (AccountCore + BankAccount contract) and three closed
// variants. The registry owns every account created during the session.

pub mod outcome;
pub mod account;
pub mod savings;
pub mod checking;
pub mod fixed_deposit;

pub use outcome::{Outcome, Rejection, OperationResult};
pub use account::{
    Account, AccountCore, AccountHandle, AccountRegistry, AccountType,
    BankAccount, InterestBearing,
};
pub use savings::SavingsAccount;
pub use checking::CheckingAccount;
pub use fixed_deposit::{FixedDepositAccount, FIXED_DEPOSIT_RATE};
