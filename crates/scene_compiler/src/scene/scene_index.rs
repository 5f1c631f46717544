//! Material name lookup for one compile pass

use std::collections::HashMap;

/// Material name → compiled index
///
/// Built fresh by every [`SceneBuilder`](super::SceneBuilder) run and owned by its output;
/// there is no shared table between passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneIndex {
    indices: HashMap<String, u32>,
}

impl SceneIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` at `index`; a repeated name keeps its first index
    pub fn insert(&mut self, name: &str, index: u32) {
        self.indices.entry(name.to_string()).or_insert(index);
    }

    /// Compiled index of `name`
    pub fn get(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when no material has been recorded
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Entries sorted by index
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self
            .indices
            .iter()
            .map(|(name, index)| (name.as_str(), *index))
            .collect();
        entries.sort_by_key(|(_, index)| *index);
        entries
    }
}
