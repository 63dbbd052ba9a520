use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::account::Account;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access accounts file: {0}")]
    Io(#[from] std::io::Error),
    #[error("accounts file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed persistence for the whole account collection.
///
/// Every save rewrites the file in full; there is no locking or
/// write-then-rename, so concurrent processes sharing one file can lose
/// updates. The store holds no account state of its own.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole accounts file. Missing, unreadable, and
    /// malformed files are distinct errors at this boundary.
    pub fn load(&self) -> Result<Vec<Account>, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load with the fallback the interactive session uses: any failure
    /// starts an empty ledger, as on a first run. The reason is logged
    /// rather than surfaced.
    pub fn load_or_default(&self) -> Vec<Account> {
        match self.load() {
            Ok(accounts) => {
                debug!(count = accounts.len(), "loaded accounts");
                accounts
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not load accounts, starting with an empty ledger"
                );
                Vec::new()
            }
        }
    }

    /// Serializes every account and overwrites the file in full.
    pub fn save(&self, accounts: &[Account]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(accounts)?;
        fs::write(&self.path, data)?;
        debug!(count = accounts.len(), "saved accounts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use std::str::FromStr;

    // Unique path per test; uuid keeps parallel test runs from colliding.
    fn temp_store() -> AccountStore {
        let path = std::env::temp_dir().join(format!("teller-test-{}.json", uuid::Uuid::new_v4()));
        AccountStore::new(path)
    }

    fn sample_accounts() -> Vec<Account> {
        let mut alice = Account::new(
            "Alice",
            Money::from_str("100").unwrap(),
            "AC-1000000001".to_string(),
        );
        alice.deposit(Money::from_str("50").unwrap());

        let bob = Account::new(
            "Bob",
            Money::from_str("0").unwrap(),
            "AC-1000000002".to_string(),
        );

        vec![alice, bob]
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let store = temp_store();
        let accounts = sample_accounts();

        store.save(&accounts).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(reloaded, accounts);
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let store = temp_store();

        store.save(&sample_accounts()).unwrap();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let store = temp_store();

        let err = store.load().unwrap_err();

        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn load_reports_malformed_contents_as_parse_error() {
        let store = temp_store();
        fs::write(store.path(), "not json at all").unwrap();

        let err = store.load().unwrap_err();

        assert!(matches!(err, StoreError::Malformed(_)));
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn load_or_default_falls_back_to_empty_on_any_failure() {
        let missing = temp_store();
        assert!(missing.load_or_default().is_empty());

        let malformed = temp_store();
        fs::write(malformed.path(), "{\"broken\":").unwrap();
        assert!(malformed.load_or_default().is_empty());
        fs::remove_file(malformed.path()).unwrap();
    }

    #[test]
    fn load_accepts_integer_balances_written_by_other_tools() {
        let store = temp_store();
        fs::write(
            store.path(),
            r#"[{"holder":"Alice","balance":100,"history":["Deposited: $50"],"accountNumber":"AC-1234567890"}]"#,
        )
        .unwrap();

        let accounts = store.load().unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance, Money::from_str("100").unwrap());
        assert_eq!(accounts[0].history, vec!["Deposited: $50"]);
        fs::remove_file(store.path()).unwrap();
    }
}
