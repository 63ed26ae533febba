use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How list and task identifiers are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Monotonic counter, never reused within its scope
    #[default]
    Sequential,
    /// Random 63-bit values, redrawn on collision within the scope
    Random,
}

impl IdStrategy {
    /// Allocates the next raw id.
    ///
    /// `counter` is the scope's sequential counter and is only advanced by the
    /// sequential strategy. `taken` reports whether a value is already in use
    /// in the same scope.
    pub(crate) fn allocate(self, counter: &mut u64, taken: impl Fn(u64) -> bool) -> u64 {
        match self {
            Self::Sequential => {
                let mut value = *counter;
                while taken(value) {
                    value += 1;
                }
                *counter = value + 1;
                value
            }
            Self::Random => loop {
                let value = random_id();
                if !taken(value) {
                    return value;
                }
            },
        }
    }
}

fn random_id() -> u64 {
    let (high, _) = Uuid::new_v4().as_u64_pair();
    // 63 bits, so the value also fits a signed 64-bit integer.
    high >> 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_advances_counter() {
        let mut counter = 1;
        let first = IdStrategy::Sequential.allocate(&mut counter, |_| false);
        let second = IdStrategy::Sequential.allocate(&mut counter, |_| false);

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(counter, 3);
    }

    #[test]
    fn test_sequential_skips_taken_values() {
        let mut counter = 1;
        let id = IdStrategy::Sequential.allocate(&mut counter, |v| v < 4);

        assert_eq!(id, 4);
        assert_eq!(counter, 5);
    }

    #[test]
    fn test_random_leaves_counter_alone() {
        let mut counter = 7;
        let id = IdStrategy::Random.allocate(&mut counter, |_| false);

        assert_eq!(counter, 7);
        assert!(id <= i64::MAX as u64);
    }

    #[test]
    fn test_random_redraws_on_collision() {
        use std::cell::Cell;

        let mut counter = 1;
        let calls = Cell::new(0);
        IdStrategy::Random.allocate(&mut counter, |_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&IdStrategy::Random).unwrap();
        assert_eq!(json, "\"random\"");

        let parsed: IdStrategy = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(parsed, IdStrategy::Sequential);
    }
}
