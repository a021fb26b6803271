use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::Label;
use crate::syntax::{Direction, NodePath};

/// Where a labelled leaf sits and what it says
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub text: SmolStr,
    pub path: NodePath,
}

/// Leaf labels in depth-first left-to-right order
///
/// Insertion order is label order, so iteration always yields A, B, C, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: IndexMap<Label, LabelEntry>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn insert(&mut self, label: Label, entry: LabelEntry) {
        self.entries.insert(label, entry);
    }

    pub fn get(&self, label: &str) -> Option<&LabelEntry> {
        self.entries.get(label)
    }

    /// Root-relative path of the leaf carrying `label`
    pub fn path_of(&self, label: &str) -> Option<&[Direction]> {
        self.get(label).map(|entry| entry.path.as_slice())
    }

    /// Condition text of the leaf carrying `label`
    pub fn text_of(&self, label: &str) -> Option<&str> {
        self.get(label).map(|entry| entry.text.as_str())
    }

    /// Label at position `index` in label order
    pub fn label_at(&self, index: usize) -> Option<&Label> {
        self.entries.get_index(index).map(|(label, _)| label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, &LabelEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a LabelMap {
    type Item = (&'a Label, &'a LabelEntry);
    type IntoIter = indexmap::map::Iter<'a, Label, LabelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
