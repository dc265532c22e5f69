// 📋 Interactive Menu - the text front end over the account registry
//
// Reads one answer per line. Generic over reader/writer so the binary can
// hand it stdin/stdout and tests can hand it in-memory buffers.

use anyhow::{Context as AnyhowContext, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::entities::{
    Account, AccountRegistry, CheckingAccount, FixedDepositAccount, SavingsAccount,
};

const INVALID_NUMBER: &str = "Invalid input. Please enter a number.\n";

pub const MENU_TEXT: &str = "\nBank Account Menu:\n\
1. Create Savings Account\n\
2. Create Checking Account\n\
3. Create Fixed Deposit Account\n\
4. Display All Accounts\n\
5. Exit\n\
Enter your choice: ";

// ============================================================================
// MENU CHOICE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateSavings,
    CreateChecking,
    CreateFixedDeposit,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::CreateSavings),
            2 => Some(MenuChoice::CreateChecking),
            3 => Some(MenuChoice::CreateFixedDeposit),
            4 => Some(MenuChoice::DisplayAll),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Parse a raw input line; anything that is not 1-5 is `None`
    pub fn parse(line: &str) -> Option<Self> {
        line.trim().parse::<i64>().ok().and_then(Self::from_number)
    }
}

// ============================================================================
// MENU
// ============================================================================

pub struct Menu<R, W> {
    input: R,
    output: W,
    registry: AccountRegistry,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Menu {
            input,
            output,
            registry: AccountRegistry::new(),
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> AccountRegistry {
        self.registry
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write(MENU_TEXT)?;

            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu choice");

            match choice {
                Some(MenuChoice::Exit) => {
                    self.write("Exiting...\n")?;
                    return Ok(());
                }
                Some(MenuChoice::DisplayAll) => {
                    self.registry
                        .render_all(&mut self.output)
                        .context("Failed to write accounts")?;
                }
                Some(create) => {
                    if !self.create_account(create)? {
                        debug!("input closed mid-creation, leaving menu");
                        return Ok(());
                    }
                }
                None => self.write("Invalid choice. Please try again.\n")?,
            }
        }
    }

    /// Prompt for the fields of one account and register it.
    /// Returns false when input ran out before the account was complete.
    fn create_account(&mut self, choice: MenuChoice) -> Result<bool> {
        let Some(account_number) = self.prompt_text("Enter account number: ")? else {
            return Ok(false);
        };
        let Some(holder_name) = self.prompt_text("Enter account holder name: ")? else {
            return Ok(false);
        };
        let Some(balance) = self.prompt_amount("Enter balance: ")? else {
            return Ok(false);
        };

        let account: Account = match choice {
            MenuChoice::CreateSavings => {
                let Some(rate) = self.prompt_amount("Enter interest rate: ")? else {
                    return Ok(false);
                };
                SavingsAccount::new(account_number, holder_name, balance, rate).into()
            }
            MenuChoice::CreateChecking => {
                let Some(limit) = self.prompt_amount("Enter overdraft limit: ")? else {
                    return Ok(false);
                };
                CheckingAccount::new(account_number, holder_name, balance, limit).into()
            }
            MenuChoice::CreateFixedDeposit => {
                let Some(term) = self.prompt_number::<i32>("Enter term (months): ")? else {
                    return Ok(false);
                };
                FixedDepositAccount::new(account_number, holder_name, balance, term).into()
            }
            MenuChoice::DisplayAll | MenuChoice::Exit => return Ok(true),
        };

        self.registry.register(account);
        Ok(true)
    }

    fn prompt_text(&mut self, label: &str) -> Result<Option<String>> {
        self.write(label)?;
        self.read_line()
    }

    /// Re-prompts until the answer parses; `None` on end of input
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_text(label)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.write(INVALID_NUMBER)?,
            }
        }
    }

    /// Like `prompt_number`, but NaN and infinities are asked for again
    fn prompt_amount(&mut self, label: &str) -> Result<Option<f64>> {
        loop {
            match self.prompt_number::<f64>(label)? {
                Some(value) if !value.is_finite() => self.write(INVALID_NUMBER)?,
                other => return Ok(other),
            }
        }
    }

    /// One line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .context("Failed to write output")
    }
}

// ============================================================================
// TESTS
// ============================================================================
