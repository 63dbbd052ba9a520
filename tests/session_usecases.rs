use std::fs;
use std::io::Cursor;
use std::str::FromStr;

use teller::common::money::Money;
use teller::domain::ledger::Ledger;
use teller::domain::number::SequentialNumbers;
use teller::io::store::AccountStore;
use teller::shell::Shell;

fn temp_store() -> AccountStore {
    let path = std::env::temp_dir().join(format!("teller-case-{}.json", uuid::Uuid::new_v4()));
    AccountStore::new(path)
}

/// Runs one scripted interactive session against `store`, starting from
/// whatever the store currently holds, and returns the rendered output.
/// Account numbers are deterministic: AC-1000000001, AC-1000000002, ...
fn run_session(store: &AccountStore, script: &str) -> String {
    let mut ledger = Ledger::with_accounts(
        store.load_or_default(),
        Box::new(SequentialNumbers::starting_at(1_000_000_001)),
    );

    let mut out = Vec::<u8>::new();
    Shell::new(Cursor::new(script), &mut out)
        .run(&mut ledger, store)
        .expect("session failed");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

#[test]
fn create_deposit_withdraw_flow() {
    let store = temp_store();

    // Create Alice with 100, log in, deposit 50, then overdraw.
    let script = "\
1\nAlice\n100\n\
2\nAC-1000000001\n\
1\n50\n\
2\n1000\n\
4\n3\n";
    let output = run_session(&store, script);

    assert!(output.contains("Account created successfully!"));
    assert!(output.contains("$50 deposited successfully."));
    assert!(output.contains("Insufficient funds!"));

    let accounts = store.load().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].holder, "Alice");
    assert_eq!(accounts[0].balance, money("150"));
    assert_eq!(accounts[0].history, vec!["Deposited: $50"]);

    fs::remove_file(store.path()).unwrap();
}

#[test]
fn transfer_between_two_accounts() {
    let store = temp_store();

    let script = "\
1\nAlice\n150\n\
1\nBob\n0\n\
2\nAC-1000000001\n\
3\n100\nAC-1000000002\n\
4\n3\n";
    let output = run_session(&store, script);

    assert!(output.contains("$100 transferred to Account AC-1000000002 successfully."));

    let accounts = store.load().unwrap();
    let alice = accounts
        .iter()
        .find(|a| a.account_number == "AC-1000000001")
        .unwrap();
    let bob = accounts
        .iter()
        .find(|a| a.account_number == "AC-1000000002")
        .unwrap();

    assert_eq!(alice.balance, money("50"));
    assert_eq!(bob.balance, money("100"));
    assert!(
        alice
            .history
            .contains(&"Transferred: $100 to Account AC-1000000002".to_string())
    );
    assert!(
        bob.history
            .contains(&"Received: $100 from Account AC-1000000001".to_string())
    );

    fs::remove_file(store.path()).unwrap();
}

#[test]
fn transfer_to_unknown_recipient_is_rejected_before_any_mutation() {
    let store = temp_store();

    let script = "\
1\nAlice\n100\n\
2\nAC-1000000001\n\
3\n50\nAC-9999999999\n\
4\n3\n";
    let output = run_session(&store, script);

    assert!(output.contains("Recipient's account not found!"));

    let accounts = store.load().unwrap();
    assert_eq!(accounts[0].balance, money("100"));
    assert!(accounts[0].history.is_empty());

    fs::remove_file(store.path()).unwrap();
}

#[test]
fn login_with_unknown_number_reports_not_found() {
    let store = temp_store();

    let output = run_session(&store, "2\nAC-0000000000\n3\n");

    assert!(output.contains("Account not found!"));
}

#[test]
fn state_survives_across_separate_sessions() {
    let store = temp_store();

    run_session(&store, "1\nAlice\n100\n3\n");

    // Second run reloads from the same file and deposits into the account
    // created by the first run.
    let output = run_session(&store, "2\nAC-1000000001\n1\n25.5\n4\n3\n");
    assert!(output.contains("$25.5 deposited successfully."));

    let accounts = store.load().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].balance, money("125.5"));
    assert_eq!(accounts[0].history, vec!["Deposited: $25.5"]);

    fs::remove_file(store.path()).unwrap();
}

#[test]
fn every_mutation_is_written_through_immediately() {
    let store = temp_store();

    // The create alone must persist, even though the session keeps going
    // (input ends abruptly mid-menu).
    run_session(&store, "1\nAlice\n100\n");

    let accounts = store.load().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].balance, money("100"));

    fs::remove_file(store.path()).unwrap();
}

#[test]
fn corrupt_store_starts_an_empty_ledger_but_is_rewritten_on_next_save() {
    let store = temp_store();
    fs::write(store.path(), "{{{ definitely not json").unwrap();

    let output = run_session(&store, "1\nCarol\n10\n3\n");
    assert!(output.contains("Account created successfully!"));

    let accounts = store.load().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].holder, "Carol");

    fs::remove_file(store.path()).unwrap();
}
