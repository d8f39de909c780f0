//! Per-field error messages

use std::collections::BTreeMap;

use shared::{CafeField, ErrorCode};

/// Error messages keyed by field, iterated in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<CafeField, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: CafeField, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Inline error for a UNIQUE violation reported by the store
    pub fn duplicate(column: &str) -> Self {
        let (field, code) = match CafeField::from_column(column) {
            Some(CafeField::MapUrl) => (CafeField::MapUrl, ErrorCode::CafeMapUrlExists),
            _ => (CafeField::Name, ErrorCode::CafeNameExists),
        };
        let mut errors = Self::default();
        errors.add(field, format!("{}.", code.message()));
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Messages for one field (empty when it passed)
    pub fn get(&self, field: CafeField) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (CafeField, &[String])> {
        self.fields.iter().map(|(field, msgs)| (*field, msgs.as_slice()))
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field.column(), message)?;
                first = false;
            }
        }
        Ok(())
    }
}
