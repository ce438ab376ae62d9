//! Checkbox-backed boolean mappings
//!
//! Multi-select interview answers arrive as a mapping from a fixed label set
//! to booleans. Labels are a closed enum per question; keys outside that set
//! are rejected when the mapping is deserialized.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed set of labels backing one multi-select question
pub trait CheckboxLabel: Copy + Ord + 'static {
    /// Every label, in the order the question presents them
    const ALL: &'static [Self];

    /// Human-readable label string, as it appears in the interview
    fn label(&self) -> &'static str;

    /// Look up a label by its exact string
    fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.label() == s)
    }
}

/// Typed mapping from a closed label set to booleans
///
/// Labels absent from the mapping read as unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkboxes<L: CheckboxLabel> {
    values: BTreeMap<L, bool>,
}

impl<L: CheckboxLabel> Checkboxes<L> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Build a mapping with the given labels checked
    pub fn checked(labels: impl IntoIterator<Item = L>) -> Self {
        let mut boxes = Self::new();
        for label in labels {
            boxes.set(label, true);
        }
        boxes
    }

    pub fn set(&mut self, label: L, value: bool) {
        self.values.insert(label, value);
    }

    /// Whether `label` is checked
    pub fn get(&self, label: L) -> bool {
        self.values.get(&label).copied().unwrap_or(false)
    }

    /// Labels currently checked, in declaration order
    pub fn true_values(&self) -> Vec<L> {
        self.values
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(label, _)| *label)
            .collect()
    }

    /// Label strings currently checked, in declaration order
    pub fn true_labels(&self) -> Vec<&'static str> {
        self.true_values().iter().map(|l| l.label()).collect()
    }

    pub fn any(&self) -> bool {
        self.values.values().any(|checked| *checked)
    }

    /// True if any of `labels` is checked
    pub fn any_of(&self, labels: &[L]) -> bool {
        labels.iter().any(|l| self.get(*l))
    }
}

impl<L: CheckboxLabel> Default for Checkboxes<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: CheckboxLabel> FromIterator<L> for Checkboxes<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::checked(iter)
    }
}

impl<L: CheckboxLabel> Serialize for Checkboxes<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (label, checked) in &self.values {
            map.serialize_entry(label.label(), checked)?;
        }
        map.end()
    }
}

struct CheckboxVisitor<L>(PhantomData<L>);

impl<'de, L: CheckboxLabel> Visitor<'de> for CheckboxVisitor<L> {
    type Value = Checkboxes<L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of checkbox labels to booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut boxes = Checkboxes::new();
        while let Some((key, checked)) = access.next_entry::<String, bool>()? {
            let label = L::from_label(&key).ok_or_else(|| {
                let expected: Vec<&str> = L::ALL.iter().map(|l| l.label()).collect();
                de::Error::custom(format!(
                    "unknown checkbox label `{}`, expected one of: {}",
                    key,
                    expected.join(", ")
                ))
            })?;
            boxes.set(label, checked);
        }
        Ok(boxes)
    }
}

impl<'de, L: CheckboxLabel> Deserialize<'de> for Checkboxes<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CheckboxVisitor(PhantomData))
    }
}
