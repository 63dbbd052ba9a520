use std::io::{BufWriter, stdin, stdout};

use tracing::info;

use crate::common::error::AppError;
use crate::domain::ledger::Ledger;
use crate::domain::number::RandomNumbers;
use crate::io::store::AccountStore;
use crate::shell::Shell;

/// Storage file used when no path is given on the command line.
pub const DEFAULT_STORE_PATH: &str = "accounts.json";

/// Loads the ledger, runs the interactive session on stdin/stdout, and
/// write-through saves happen inside the shell as operations complete.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());

    let store = AccountStore::new(&path);
    let accounts = store.load_or_default();
    info!(path = %path, count = accounts.len(), "session starting");

    let mut ledger = Ledger::with_accounts(accounts, Box::new(RandomNumbers));

    let stdin = stdin();
    let stdout = stdout();
    let mut shell = Shell::new(stdin.lock(), BufWriter::new(stdout.lock()));
    shell.run(&mut ledger, &store)
}
