//! Frequency Table - how many criteria recommended each strategy.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Strategy citation counts in order of first appearance.
///
/// Strategies nobody recommended are absent rather than present with zero.
/// Consumers wanting a ranking should use [`FrequencyTable::ranked`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one citation of `strategy`.
    pub fn record(&mut self, strategy: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == strategy) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((strategy.to_string(), 1)),
        }
    }

    /// Returns the count for `strategy`, if it was cited.
    pub fn get(&self, strategy: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == strategy)
            .map(|(_, count)| *count)
    }

    /// Number of distinct strategies cited.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been cited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Highest count, or 0 when empty.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Entries in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Entries by descending count; equal counts keep first-appearance order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Strategies sharing the highest count, in first-appearance order.
    pub fn leaders(&self) -> Vec<&str> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }
        self.iter()
            .filter(|(_, count)| *count == max)
            .map(|(name, _)| name)
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for strategy in iter {
            table.record(strategy);
        }
        table
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}
