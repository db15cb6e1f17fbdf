//! Dataset generation for the three scenarios plus custom input.
//!
//! A dataset is an ordered, fixed-length sequence of items with a
//! user-facing display label, a comparable value and a derived bar
//! height. Generation sorts the sequence ascending by comparable value
//! when the selected algorithm requires sorted input.

use rand::Rng;
use rand::seq::SliceRandom;
use starscan_protocol::{Scenario, Value};

use crate::error::{DatasetError, EngineError};

/// Items per generated dataset.
pub const GENERATED_LEN: usize = 24;

/// Highest roll number in the attendance pool.
pub const ROLL_POOL: u32 = 50;

/// Fixed name pool for the contacts scenario.
const NAMES: [&str; 26] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Ken",
    "Leo", "Mia", "Neo", "Olivia", "Peggy", "Quinn", "Rupert", "Sybil", "Trent", "Uma", "Victor",
    "Walter", "Xena", "Yara", "Zoe",
];

/// Whether a dataset compares numerically or as case-folded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
}

/// One searchable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// User-facing label.
    pub display: String,
    /// Value used for equality/ordering.
    pub compare: Value,
    /// Derived visual magnitude (bar height).
    pub height: u64,
}

/// Ordered sequence of items, homogeneous in comparable kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    items: Vec<Item>,
    kind: ValueKind,
}

impl Dataset {
    /// Generates a dataset for `scenario`, sorted ascending by
    /// comparable value iff `requires_sorted`.
    ///
    /// The sort is unstable over the draw values; the relative order
    /// of equal draws is not guaranteed (only the space scenario can
    /// produce duplicates, and scan correctness does not depend on it).
    pub fn generate(scenario: Scenario, requires_sorted: bool, rng: &mut impl Rng) -> Dataset {
        match scenario {
            Scenario::Space => {
                // Sector frequencies: draws with replacement, duplicates allowed.
                let mut values: Vec<u32> =
                    (0..GENERATED_LEN).map(|_| rng.random_range(1..=100)).collect();
                if requires_sorted {
                    values.sort_unstable();
                }
                let items = values
                    .into_iter()
                    .map(|v| Item {
                        display: v.to_string(),
                        compare: Value::number(v as f64),
                        height: (u64::from(v) * 3).max(20),
                    })
                    .collect();
                Dataset {
                    items,
                    kind: ValueKind::Number,
                }
            }
            Scenario::Contacts => {
                let mut pool: Vec<&str> = NAMES.to_vec();
                pool.shuffle(rng);
                let mut selected: Vec<&str> = pool.into_iter().take(GENERATED_LEN).collect();
                if requires_sorted {
                    selected.sort_by_key(|name| name.to_lowercase());
                }
                let items = selected
                    .into_iter()
                    .map(|name| Item {
                        display: name.to_string(),
                        compare: Value::text(name),
                        height: rng.random_range(50..200),
                    })
                    .collect();
                Dataset {
                    items,
                    kind: ValueKind::Text,
                }
            }
            Scenario::Attendance => {
                let mut rolls: Vec<u32> = (1..=ROLL_POOL).collect();
                rolls.shuffle(rng);
                rolls.truncate(GENERATED_LEN);
                if requires_sorted {
                    rolls.sort_unstable();
                }
                let items = rolls
                    .into_iter()
                    .map(|n| Item {
                        display: format!("Roll {n}"),
                        compare: Value::number(n as f64),
                        height: (f64::from(n) / f64::from(ROLL_POOL) * 200.0) as u64 + 40,
                    })
                    .collect();
                Dataset {
                    items,
                    kind: ValueKind::Number,
                }
            }
        }
    }

    /// Generates with the thread-local RNG.
    pub fn generate_default(scenario: Scenario, requires_sorted: bool) -> Dataset {
        Self::generate(scenario, requires_sorted, &mut rand::rng())
    }

    /// Parses a comma-separated custom list.
    ///
    /// Entries are trimmed and empties dropped; the dataset is numeric
    /// iff every remaining entry parses as a number. Fails with
    /// [`DatasetError::EmptyInput`] when nothing usable remains, in
    /// which case the caller keeps its previous dataset.
    pub fn parse_custom(raw: &str, requires_sorted: bool) -> Result<Dataset, DatasetError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(DatasetError::EmptyInput);
        }

        let numeric: Option<Vec<f64>> = entries
            .iter()
            .map(|e| e.parse::<f64>().ok())
            .collect();

        if let Some(mut values) = numeric {
            if requires_sorted {
                values.sort_by(f64::total_cmp);
            }
            let max = values.iter().copied().fold(1.0_f64, f64::max);
            let items = values
                .into_iter()
                .map(|v| Item {
                    display: Value::number(v).to_string(),
                    compare: Value::number(v),
                    height: ((v / max * 200.0) as i64).max(20) as u64,
                })
                .collect();
            Ok(Dataset {
                items,
                kind: ValueKind::Number,
            })
        } else {
            let mut words: Vec<&str> = entries;
            if requires_sorted {
                words.sort_by_key(|w| w.to_lowercase());
            }
            let mut rng = rand::rng();
            let items = words
                .into_iter()
                .map(|w| Item {
                    display: w.to_string(),
                    compare: Value::text(w),
                    height: rng.random_range(50..200),
                })
                .collect();
            Ok(Dataset {
                items,
                kind: ValueKind::Text,
            })
        }
    }

    /// Builds a dataset directly from comparable values. Primarily for
    /// tests and programmatic callers.
    pub fn from_values(values: Vec<Value>) -> Dataset {
        let kind = match values.first() {
            Some(Value::Text(_)) => ValueKind::Text,
            _ => ValueKind::Number,
        };
        let items = values
            .into_iter()
            .map(|v| Item {
                display: v.to_string(),
                compare: v,
                height: 100,
            })
            .collect();
        Dataset { items, kind }
    }

    /// Coerces raw target text to this dataset's comparable type.
    pub fn coerce_target(&self, raw: &str) -> Result<Value, EngineError> {
        let trimmed = raw.trim();
        match self.kind {
            ValueKind::Number => trimmed
                .parse::<f64>()
                .map(Value::number)
                .map_err(|_| EngineError::InvalidTarget(raw.to_string())),
            ValueKind::Text => {
                if trimmed.is_empty() {
                    Err(EngineError::InvalidTarget(raw.to_string()))
                } else {
                    Ok(Value::text(trimmed))
                }
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn compares(dataset: &Dataset) -> Vec<Value> {
        dataset.items().iter().map(|i| i.compare.clone()).collect()
    }

    #[test]
    fn space_generates_twenty_four_numbers() {
        let dataset = Dataset::generate(Scenario::Space, false, &mut rng());
        assert_eq!(dataset.len(), GENERATED_LEN);
        assert_eq!(dataset.kind(), ValueKind::Number);
        for item in dataset.items() {
            assert!(item.height >= 20);
        }
    }

    #[test]
    fn sorted_generation_is_ascending_by_compare() {
        for scenario in [Scenario::Space, Scenario::Contacts, Scenario::Attendance] {
            let dataset = Dataset::generate(scenario, true, &mut rng());
            let values = compares(&dataset);
            let mut sorted = values.clone();
            sorted.sort();
            assert_eq!(values, sorted, "{scenario:?} should be sorted");
        }
    }

    #[test]
    fn contacts_are_distinct_pool_names() {
        let dataset = Dataset::generate(Scenario::Contacts, false, &mut rng());
        assert_eq!(dataset.len(), GENERATED_LEN);
        assert_eq!(dataset.kind(), ValueKind::Text);
        let mut names: Vec<&str> = dataset.items().iter().map(|i| i.display.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GENERATED_LEN);
        for name in names {
            assert!(NAMES.contains(&name));
        }
    }

    #[test]
    fn attendance_rolls_are_distinct_and_in_pool() {
        let dataset = Dataset::generate(Scenario::Attendance, false, &mut rng());
        let mut rolls: Vec<Value> = compares(&dataset);
        rolls.sort();
        rolls.dedup();
        assert_eq!(rolls.len(), GENERATED_LEN);
        for roll in rolls {
            let Value::Number(n) = roll else {
                panic!("attendance values must be numeric")
            };
            assert!((1.0..=ROLL_POOL as f64).contains(&n));
        }
    }

    #[test]
    fn custom_numeric_input_sorts_before_any_probe() {
        let dataset = Dataset::parse_custom("10, 4, 30, 99", true).unwrap();
        assert_eq!(
            compares(&dataset),
            vec![
                Value::number(4.0),
                Value::number(10.0),
                Value::number(30.0),
                Value::number(99.0)
            ]
        );
        assert_eq!(dataset.kind(), ValueKind::Number);
    }

    #[test]
    fn custom_input_preserves_order_when_unsorted() {
        let dataset = Dataset::parse_custom("10, 4, 30, 99", false).unwrap();
        assert_eq!(
            compares(&dataset),
            vec![
                Value::number(10.0),
                Value::number(4.0),
                Value::number(30.0),
                Value::number(99.0)
            ]
        );
    }

    #[test]
    fn custom_blank_input_is_rejected() {
        assert_eq!(
            Dataset::parse_custom("   ", true).unwrap_err(),
            DatasetError::EmptyInput
        );
        assert_eq!(
            Dataset::parse_custom(", ,,  ,", false).unwrap_err(),
            DatasetError::EmptyInput
        );
    }

    #[test]
    fn custom_mixed_entries_fall_back_to_text() {
        let dataset = Dataset::parse_custom("Apple, 42, Orange", false).unwrap();
        assert_eq!(dataset.kind(), ValueKind::Text);
        assert_eq!(dataset.items()[1].display, "42");
        assert_eq!(dataset.items()[1].compare, Value::text("42"));
    }

    #[test]
    fn custom_text_sorts_by_folded_compare() {
        let dataset = Dataset::parse_custom("banana, Apple, cherry", true).unwrap();
        let names: Vec<&str> = dataset.items().iter().map(|i| i.display.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn custom_entries_are_trimmed() {
        let dataset = Dataset::parse_custom("  5 ,  , 9 ", false).unwrap();
        assert_eq!(
            compares(&dataset),
            vec![Value::number(5.0), Value::number(9.0)]
        );
    }

    #[test]
    fn target_coercion_follows_dataset_kind() {
        let numeric = Dataset::parse_custom("1, 2, 3", false).unwrap();
        assert_eq!(numeric.coerce_target(" 2 ").unwrap(), Value::number(2.0));
        assert!(numeric.coerce_target("two").is_err());
        assert!(numeric.coerce_target("   ").is_err());

        let text = Dataset::parse_custom("Ada, Grace", false).unwrap();
        assert_eq!(text.coerce_target(" GRACE ").unwrap(), Value::text("grace"));
        assert!(text.coerce_target("   ").is_err());
    }
}
