//! Mutable view over one catalog entry.

use toml::{Table, Value};

use super::ADDRESS_KEY;

const NAME_KEY: &str = "name";
const ICON_URL_KEY: &str = "icon_url";

/// A processable entry (a record with an `address` key) borrowed from the catalog.
#[derive(Debug)]
pub struct EntryMut<'a> {
    section: &'a str,
    key: &'a str,
    fields: &'a mut Table,
}

impl<'a> EntryMut<'a> {
    pub(crate) fn new(section: &'a str, key: &'a str, fields: &'a mut Table) -> Self {
        Self {
            section,
            key,
            fields,
        }
    }

    pub fn section(&self) -> &str {
        self.section
    }

    pub fn key(&self) -> &str {
        self.key
    }

    /// The `address` value when it is a string.
    pub fn address(&self) -> Option<&str> {
        self.fields.get(ADDRESS_KEY).and_then(Value::as_str)
    }

    /// `name` if present, otherwise the address as written.
    pub fn display_name(&self) -> String {
        match self
            .fields
            .get(NAME_KEY)
            .or_else(|| self.fields.get(ADDRESS_KEY))
        {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => self.key.to_string(),
        }
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.fields.get(ICON_URL_KEY).and_then(Value::as_str)
    }

    /// Set or overwrite `icon_url`. An existing key keeps its position.
    pub fn set_icon_url(&mut self, url: String) {
        self.fields.insert(ICON_URL_KEY.to_string(), Value::String(url));
    }
}
