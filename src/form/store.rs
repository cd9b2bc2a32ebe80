use super::field::Field;
use ahash::AHashMap;

/// Holds the current raw value of every form field.
///
/// Pure storage: nothing is validated or normalized here. A field that was
/// never set reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStore {
    values: AHashMap<Field, String>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Stores `value` and returns the previous value of the field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> String {
        let value = value.into();
        if value.is_empty() {
            return self.values.remove(&field).unwrap_or_default();
        }
        self.values.insert(field, value).unwrap_or_default()
    }

    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the non-empty fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.values.get(&field).map(|v| (field, v.as_str())))
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FieldStore {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut store = FieldStore::new();
        for (field, value) in iter {
            store.set(field, value);
        }
        store
    }
}
