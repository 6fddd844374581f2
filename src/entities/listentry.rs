//! History list entries.

/// One line in the history list. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub text: String,
}

impl ListEntry {
    /// Entry recording that the counter reached `count` at wall-clock `time`.
    pub fn for_count(count: u64, time: &str) -> Self {
        ListEntry {
            text: format!("Count: {} added at {}", count, time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_count_formats_text() {
        let e = ListEntry::for_count(3, "10:04:59 PM");
        assert_eq!(e.text, "Count: 3 added at 10:04:59 PM");
    }
}
