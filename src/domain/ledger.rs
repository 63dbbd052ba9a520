use tracing::debug;

use crate::common::money::Money;
use crate::domain::account::Account;
use crate::domain::number::NumberGenerator;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account {0} not found")]
    NotFound(String),
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// The in-memory collection of all accounts for one session. Loaded from
/// storage once at startup, mutated in place, saved back by the caller
/// after every mutating operation.
///
/// Lookups are linear by exact account-number match; if duplicate numbers
/// ever exist, the first match wins.
pub struct Ledger {
    accounts: Vec<Account>,
    numbers: Box<dyn NumberGenerator>,
}

impl Ledger {
    pub fn new(numbers: Box<dyn NumberGenerator>) -> Self {
        Self::with_accounts(Vec::new(), numbers)
    }

    pub fn with_accounts(accounts: Vec<Account>, numbers: Box<dyn NumberGenerator>) -> Self {
        Self { accounts, numbers }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Opens a new account with a freshly generated number and an empty
    /// history, and adds it to the collection.
    pub fn open(&mut self, holder: &str, opening_balance: Money) -> &Account {
        let number = self.numbers.next_number();
        debug!(account = %number, "opening account");

        self.accounts
            .push(Account::new(holder, opening_balance, number));
        let index = self.accounts.len() - 1;
        &self.accounts[index]
    }

    pub fn find(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_number == number)
    }

    fn position(&self, number: &str) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|a| a.account_number == number)
            .ok_or_else(|| LedgerError::NotFound(number.to_string()))
    }

    pub fn deposit(&mut self, number: &str, amount: Money) -> Result<&Account, LedgerError> {
        let index = self.position(number)?;
        self.accounts[index].deposit(amount);
        debug!(account = %number, %amount, "deposit applied");
        Ok(&self.accounts[index])
    }

    pub fn withdraw(&mut self, number: &str, amount: Money) -> Result<&Account, LedgerError> {
        let index = self.position(number)?;
        self.accounts[index].withdraw(amount)?;
        debug!(account = %number, %amount, "withdrawal applied");
        Ok(&self.accounts[index])
    }

    /// Moves `amount` from `sender` to `recipient`. Both parties are
    /// resolved before any mutation, and on any error neither account
    /// changes. A transfer to the sender's own account applies both legs to
    /// the one account, leaving the balance unchanged with two history
    /// entries.
    pub fn transfer(
        &mut self,
        sender: &str,
        amount: Money,
        recipient: &str,
    ) -> Result<(), LedgerError> {
        let sender_index = self.position(sender)?;
        let recipient_index = self.position(recipient)?;

        if amount > self.accounts[sender_index].balance {
            return Err(LedgerError::InsufficientFunds);
        }

        let sender_number = self.accounts[sender_index].account_number.clone();
        let recipient_number = self.accounts[recipient_index].account_number.clone();

        self.accounts[sender_index].transfer_out(amount, &recipient_number);
        self.accounts[recipient_index].receive(amount, &sender_number);
        debug!(from = %sender_number, to = %recipient_number, %amount, "transfer applied");

        Ok(())
    }
}
