use crate::di::value::Value;
use std::collections::HashMap;

/// A stored `(identifier, value)` pair.
#[derive(Debug, Clone)]
pub struct Entry {
    id: String,
    value: Value,
}

impl Entry {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Identifier to value store that iterates in insertion order.
///
/// Re-inserting an identifier replaces its value in place: the entry keeps
/// the position of its first insertion.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `id` and returns a reference to the stored value.
    pub fn insert(&mut self, id: impl Into<String>, value: Value) -> &Value {
        let id = id.into();
        let position = match self.index.get(&id) {
            Some(&position) => {
                self.entries[position].value = value;
                position
            }
            None => {
                let position = self.entries.len();
                self.index.insert(id.clone(), position);
                self.entries.push(Entry { id, value });
                position
            }
        };
        &self.entries[position].value
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.index.get(id).map(|&position| &self.entries[position].value)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut registry = Registry::new();
        registry.insert("answer", Value::Int(42));
        assert!(registry.contains("answer"));
        assert_eq!(registry.get("answer").and_then(Value::as_int), Some(42));
        assert!(registry.get("question").is_none());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut registry = Registry::new();
        registry.insert("a", Value::Int(1));
        registry.insert("b", Value::Int(2));
        registry.insert("a", Value::Int(3));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(registry.get("a").and_then(Value::as_int), Some(3));
    }
}
