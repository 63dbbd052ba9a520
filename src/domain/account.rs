use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::money::Money;
use crate::domain::ledger::LedgerError;

/// A single bank account: holder name, current balance, and an append-only
/// transaction history. The serialized shape matches the storage file
/// records (`holder`, `balance`, `history`, `accountNumber`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub holder: String,
    pub balance: Money,
    pub history: Vec<String>,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
}

impl Account {
    pub fn new(holder: impl Into<String>, balance: Money, account_number: String) -> Self {
        Self {
            holder: holder.into(),
            balance,
            history: Vec::new(),
            account_number,
        }
    }

    /// Credits the account unconditionally and records one history entry.
    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
        self.history.push(format!("Deposited: ${amount}"));
    }

    /// Debits the account if covered, otherwise leaves balance and history
    /// untouched.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        self.history.push(format!("Withdrawn: ${amount}"));
        Ok(())
    }

    /// Outgoing leg of a transfer. Funds must already be checked by the
    /// ledger, which owns the whole two-party operation.
    pub(crate) fn transfer_out(&mut self, amount: Money, recipient_number: &str) {
        self.balance -= amount;
        self.history
            .push(format!("Transferred: ${amount} to Account {recipient_number}"));
    }

    /// Incoming leg of a transfer. Always succeeds.
    pub(crate) fn receive(&mut self, amount: Money, sender_number: &str) {
        self.balance += amount;
        self.history
            .push(format!("Received: ${amount} from Account {sender_number}"));
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Details:")?;
        writeln!(f, "  Account Holder: {}", self.holder)?;
        writeln!(f, "  Account Number: {}", self.account_number)?;
        writeln!(f, "  Balance: ${}", self.balance)?;
        write!(f, "  Account History: {}", self.history.join(", "))
    }
}
