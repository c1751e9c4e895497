//! TOML catalog to JSON export.
//!
//! A pure re-encode: same keys, same order, same values. Output is
//! 2-space indented with non-ASCII text written literally.

use anyhow::{Context, Result};
use serde_json::{Map, Number, Value as Json};
use std::path::Path;
use toml::{Table, Value};

use crate::catalog::Catalog;
use crate::storage;

/// A TOML value with no JSON counterpart.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("non-finite float at `{path}` cannot be written as JSON")]
    NonFiniteFloat { path: String },
}

/// Convert a whole TOML document into a JSON object.
pub fn toml_to_json(table: &Table) -> Result<Json, ConvertError> {
    table_to_json(table, "")
}

fn table_to_json(table: &Table, path: &str) -> Result<Json, ConvertError> {
    let mut object = Map::with_capacity(table.len());
    for (key, value) in table {
        let child = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        object.insert(key.clone(), value_to_json(value, &child)?);
    }
    Ok(Json::Object(object))
}

fn value_to_json(value: &Value, path: &str) -> Result<Json, ConvertError> {
    Ok(match value {
        Value::String(s) => Json::String(s.clone()),
        Value::Integer(i) => Json::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f)
            .map(Json::Number)
            .ok_or_else(|| ConvertError::NonFiniteFloat {
                path: path.to_string(),
            })?,
        Value::Boolean(b) => Json::Bool(*b),
        // RFC 3339 text, as written in the source file.
        Value::Datetime(dt) => Json::String(dt.to_string()),
        Value::Array(items) => Json::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| value_to_json(item, &format!("{path}[{i}]")))
                .collect::<Result<_, _>>()?,
        ),
        Value::Table(t) => table_to_json(t, path)?,
    })
}

/// Render JSON the way `data.json` is published: 2-space indent, no trailing newline.
pub fn render_json(json: &Json) -> Result<String> {
    Ok(serde_json::to_string_pretty(json)?)
}

/// Read the catalog at `input` and write its JSON form to `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let catalog = Catalog::load(input)?;
    let json = toml_to_json(catalog.as_table())
        .with_context(|| format!("convert {}", input.display()))?;
    let text = render_json(&json)?;
    storage::write_atomic(output, text.as_bytes())
        .with_context(|| format!("write JSON: {}", output.display()))?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        sections = catalog.as_table().len(),
        "catalog exported"
    );
    Ok(())
}
