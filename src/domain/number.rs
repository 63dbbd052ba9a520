use uuid::Uuid;

/// Account-number generation, kept behind a trait so the scheme can change
/// (collision checking, counters) without touching ledger logic.
pub trait NumberGenerator {
    fn next_number(&mut self) -> String;
}

/// `AC-` followed by ten digits drawn from
/// [1_000_000_000, 9_999_999_999], sourced from UUIDv4 entropy.
/// No collision check is performed against existing accounts.
#[derive(Debug, Default)]
pub struct RandomNumbers;

impl NumberGenerator for RandomNumbers {
    fn next_number(&mut self) -> String {
        let n = 1_000_000_000 + (Uuid::new_v4().as_u128() % 9_000_000_000) as u64;
        format!("AC-{n}")
    }
}

/// Deterministic generator for tests and scripted sessions.
#[derive(Debug)]
pub struct SequentialNumbers(u64);

impl SequentialNumbers {
    pub fn starting_at(first: u64) -> Self {
        Self(first)
    }
}

impl NumberGenerator for SequentialNumbers {
    fn next_number(&mut self) -> String {
        let n = self.0;
        self.0 += 1;
        format!("AC-{n:010}")
    }
}
