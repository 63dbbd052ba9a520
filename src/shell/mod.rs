use std::io::{BufRead, Write};

use crate::common::error::AppError;
use crate::common::money::Money;
use crate::domain::ledger::{Ledger, LedgerError};
use crate::io::store::AccountStore;

const MAIN_MENU: &str = "\n1) Create Account  2) Login  3) Exit\nSelect an option: ";
const SESSION_MENU: &str = "\n1) Deposit  2) Withdraw  3) Transfer  4) Exit\nSelect an option: ";

/// The interactive menu surface. It collects typed input, calls into the
/// ledger, renders outcomes, and writes the ledger through the store after
/// every mutation. Generic over input/output so whole sessions can be
/// scripted in tests.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Top-level menu loop. Returns when the user exits or input ends.
    pub fn run(&mut self, ledger: &mut Ledger, store: &AccountStore) -> Result<(), AppError> {
        loop {
            let Some(choice) = self.prompt(MAIN_MENU)? else {
                break;
            };
            match choice.as_str() {
                "1" => self.create_account(ledger, store)?,
                "2" => self.login(ledger, store)?,
                "3" => break,
                other => writeln!(self.output, "Unknown option: {other}")?,
            }
        }
        Ok(())
    }

    fn create_account(&mut self, ledger: &mut Ledger, store: &AccountStore) -> Result<(), AppError> {
        let Some(holder) = self.prompt("What is your name? ")? else {
            return Ok(());
        };
        let Some(balance) = self.prompt_amount("Enter initial balance (USD): ")? else {
            return Ok(());
        };

        let account = ledger.open(&holder, balance);
        writeln!(self.output, "Account created successfully!")?;
        writeln!(self.output, "{account}")?;

        store.save(ledger.accounts())?;
        Ok(())
    }

    fn login(&mut self, ledger: &mut Ledger, store: &AccountStore) -> Result<(), AppError> {
        let Some(number) = self.prompt("Enter your account number: ")? else {
            return Ok(());
        };

        let Some(account) = ledger.find(&number) else {
            writeln!(self.output, "Account not found!")?;
            return Ok(());
        };
        writeln!(self.output, "{account}")?;

        self.session(ledger, store, &number)
    }

    /// Menu loop for one logged-in account.
    fn session(
        &mut self,
        ledger: &mut Ledger,
        store: &AccountStore,
        number: &str,
    ) -> Result<(), AppError> {
        loop {
            let Some(choice) = self.prompt(SESSION_MENU)? else {
                break;
            };
            match choice.as_str() {
                "1" => self.deposit(ledger, store, number)?,
                "2" => self.withdraw(ledger, store, number)?,
                "3" => self.transfer(ledger, store, number)?,
                "4" => break,
                other => writeln!(self.output, "Unknown option: {other}")?,
            }
        }
        Ok(())
    }

    fn deposit(
        &mut self,
        ledger: &mut Ledger,
        store: &AccountStore,
        number: &str,
    ) -> Result<(), AppError> {
        let Some(amount) = self.prompt_amount("Enter deposit amount (USD): ")? else {
            return Ok(());
        };

        match ledger.deposit(number, amount) {
            Ok(account) => {
                writeln!(self.output, "${amount} deposited successfully.")?;
                writeln!(self.output, "{account}")?;
                store.save(ledger.accounts())?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn withdraw(
        &mut self,
        ledger: &mut Ledger,
        store: &AccountStore,
        number: &str,
    ) -> Result<(), AppError> {
        let Some(amount) = self.prompt_amount("Enter withdrawal amount (USD): ")? else {
            return Ok(());
        };

        match ledger.withdraw(number, amount) {
            Ok(account) => {
                writeln!(self.output, "${amount} withdrawn successfully.")?;
                writeln!(self.output, "{account}")?;
                store.save(ledger.accounts())?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn transfer(
        &mut self,
        ledger: &mut Ledger,
        store: &AccountStore,
        number: &str,
    ) -> Result<(), AppError> {
        let Some(amount) = self.prompt_amount("Enter transfer amount (USD): ")? else {
            return Ok(());
        };
        let Some(recipient) = self.prompt("Enter recipient's account number: ")? else {
            return Ok(());
        };

        // Resolve the recipient before handing the transfer to the ledger.
        if ledger.find(&recipient).is_none() {
            writeln!(self.output, "Recipient's account not found!")?;
            return Ok(());
        }

        match ledger.transfer(number, amount, &recipient) {
            Ok(()) => {
                writeln!(
                    self.output,
                    "${amount} transferred to Account {recipient} successfully."
                )?;
                if let Some(account) = ledger.find(number) {
                    writeln!(self.output, "{account}")?;
                }
                store.save(ledger.accounts())?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn report(&mut self, err: &LedgerError) -> Result<(), AppError> {
        match err {
            LedgerError::NotFound(_) => writeln!(self.output, "Account not found!")?,
            LedgerError::InsufficientFunds => writeln!(self.output, "Insufficient funds!")?,
        }
        Ok(())
    }

    /// Writes `message`, flushes, and reads one trimmed line. `None` means
    /// input ended.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until a well-formed, non-negative amount is entered.
    /// Stricter than the untyped input handling it replaces.
    fn prompt_amount(&mut self, message: &str) -> Result<Option<Money>, AppError> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };
            match raw.parse::<Money>() {
                Ok(amount) if !amount.is_negative() => return Ok(Some(amount)),
                Ok(_) => writeln!(self.output, "Amount must not be negative.")?,
                Err(_) => writeln!(self.output, "Enter a numeric amount, e.g. 25.00")?,
            }
        }
    }
}
