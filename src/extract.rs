//! Property extraction: flattening an element's definition relationships
//! into a queryable two-level view.

use crate::types::{Definition, Element};

/// The flattened property data of one element:
/// property set name → (attribute name → rendered value).
///
/// Sets appear in first-appearance document order; a repeated set name
/// merges into the existing entry and a repeated attribute within a set
/// overwrites. Iteration order is therefore stable across runs for the
/// same snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyIndex {
    groups: Vec<FlatSet>,
}

/// One flattened property set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatSet {
    name: String,
    attributes: Vec<(String, String)>,
}

impl FlatSet {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered value of an attribute, or `None` when absent.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.get(attribute).is_some()
    }

    /// (attribute, rendered value) pairs in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl PropertyIndex {
    /// Look up a property set by name.
    pub fn group(&self, name: &str) -> Option<&FlatSet> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Rendered value at (set, attribute), or `None` when either level
    /// is absent.
    pub fn attribute(&self, pset: &str, attribute: &str) -> Option<&str> {
        self.group(pset).and_then(|g| g.get(attribute))
    }

    /// Property sets in document order.
    pub fn groups(&self) -> impl Iterator<Item = &FlatSet> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Flatten an element's definition relationships.
///
/// Walks `definitions` in snapshot order, keeps property sets, and
/// ignores every other definition kind. Properties without a value are
/// skipped. An element with no definitions yields an empty index.
pub fn extract(element: &Element) -> PropertyIndex {
    let mut index = PropertyIndex::default();

    for definition in &element.definitions {
        let Definition::PropertySet(ps) = definition else {
            continue;
        };

        let pos = match index.groups.iter().position(|g| g.name == ps.name) {
            Some(p) => p,
            None => {
                index.groups.push(FlatSet {
                    name: ps.name.clone(),
                    attributes: Vec::new(),
                });
                index.groups.len() - 1
            }
        };
        let group = &mut index.groups[pos];

        for property in &ps.properties {
            let Some(value) = &property.value else {
                continue;
            };
            let rendered = value.render();
            match group
                .attributes
                .iter_mut()
                .find(|(name, _)| *name == property.name)
            {
                Some((_, existing)) => *existing = rendered,
                None => group.attributes.push((property.name.clone(), rendered)),
            }
        }
    }

    index
}

/// Resolve an element's type key: the first non-blank rendering of the
/// designated attribute, scanning definitions and their properties in
/// document order. The result is trimmed; a value that trims to empty
/// keeps the scan going. Returns `None` when no usable value exists.
pub fn type_key(element: &Element, attribute: &str) -> Option<String> {
    for definition in &element.definitions {
        let Definition::PropertySet(ps) = definition else {
            continue;
        };
        for property in &ps.properties {
            if property.name == attribute
                && let Some(value) = &property.value
            {
                let rendered = value.render();
                let trimmed = rendered.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}
