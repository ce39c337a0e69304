// 🚫 Invalid-Line Collector - raw lines that failed parsing or linking
//
// Set semantics (a repeated line is stored once), but iteration follows
// first-seen order so reports are reproducible.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct InvalidLines {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl InvalidLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected line verbatim. Returns false if already present.
    pub fn insert(&mut self, line: &str) -> bool {
        if self.seen.contains(line) {
            return false;
        }
        self.seen.insert(line.to_string());
        self.ordered.push(line.to_string());
        true
    }

    pub fn contains(&self, line: &str) -> bool {
        self.seen.contains(line)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl Serialize for InvalidLines {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
