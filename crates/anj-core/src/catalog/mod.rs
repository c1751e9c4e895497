//! The catalog document: an ordered TOML table of sections, each holding entries.
//!
//! The document is loaded whole, walked in file order, and written back with
//! section and field order intact (`toml` is built with `preserve_order`).

mod entry;

pub use entry::EntryMut;

use anyhow::{Context, Result};
use std::path::Path;
use toml::{Table, Value};

use crate::storage;

/// Key whose presence marks a record as a processable entry.
pub const ADDRESS_KEY: &str = "address";

/// In-memory catalog document.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    table: Table,
}

impl Catalog {
    /// Read and parse the catalog at `path`. Missing or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse catalog: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let table: Table = toml::from_str(text)?;
        Ok(Self { table })
    }

    pub fn from_table(table: Table) -> Self {
        Self { table }
    }

    pub fn as_table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&self.table)?)
    }

    /// Serialize and atomically replace the file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_toml_string()?;
        storage::write_atomic(path, text.as_bytes())
            .with_context(|| format!("write catalog: {}", path.display()))
    }

    /// Number of processable entries outside the `skip` sections.
    pub fn count_entries(&self, skip: &[String]) -> usize {
        self.table
            .iter()
            .filter(|(name, _)| !is_skipped(skip, name))
            .filter_map(|(_, section)| section.as_table())
            .flat_map(|items| items.values())
            .filter(|item| item.as_table().is_some_and(|t| t.contains_key(ADDRESS_KEY)))
            .count()
    }

    /// Processable entries outside the `skip` sections, in document order.
    pub fn entries_mut<'a>(
        &'a mut self,
        skip: &'a [String],
    ) -> impl Iterator<Item = EntryMut<'a>> + 'a {
        self.table
            .iter_mut()
            .filter(move |(name, _)| !is_skipped(skip, name))
            .filter_map(|(name, section)| section.as_table_mut().map(|items| (name, items)))
            .flat_map(|(section, items)| {
                items.iter_mut().filter_map(move |(key, item)| match item {
                    Value::Table(fields) if fields.contains_key(ADDRESS_KEY) => {
                        Some(EntryMut::new(section, key, fields))
                    }
                    _ => None,
                })
            })
    }
}

fn is_skipped(skip: &[String], name: &str) -> bool {
    skip.iter().any(|s| s == name)
}
