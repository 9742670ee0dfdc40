//! Set difference between the local reference list and the official one.

use std::collections::BTreeSet;

/// Words removed from and added to the reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDiff {
    /// In the reference list, missing upstream.
    pub removed: BTreeSet<String>,
    /// Upstream, missing from the reference list.
    pub added: BTreeSet<String>,
}

impl WordDiff {
    pub fn compare<A, B>(reference: A, extracted: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let reference: BTreeSet<String> = reference.into_iter().map(Into::into).collect();
        let extracted: BTreeSet<String> = extracted.into_iter().map(Into::into).collect();
        Self {
            removed: reference.difference(&extracted).cloned().collect(),
            added: extracted.difference(&reference).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    /// Report lines for the non-empty sides, e.g. `[valid] added words: foo, bar`.
    pub fn report(&self, name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.removed.is_empty() {
            lines.push(format!("[{}] removed words: {}", name, join(&self.removed)));
        }
        if !self.added.is_empty() {
            lines.push(format!("[{}] added words: {}", name, join(&self.added)));
        }
        lines
    }
}

fn join(words: &BTreeSet<String>) -> String {
    words.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
