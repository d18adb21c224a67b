//! Loading categories and form values from JSON
//!
//! A category file holds either a single category object or a catalog:
//!
//! ```json
//! { "categories": [ { "id": "music", "title": "Top Artist", ... } ] }
//! ```
//!
//! Form value files are a flat object of field id → string or number.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{Category, FieldType, FormValue, FormValues};

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryFile {
    Catalog { categories: Vec<Category> },
    Single(Category),
}

/// Parse a category file's contents.
pub fn parse_categories(json: &str) -> Result<Vec<Category>> {
    let file: CategoryFile = serde_json::from_str(json)?;
    Ok(match file {
        CategoryFile::Catalog { categories } => categories,
        CategoryFile::Single(category) => vec![category],
    })
}

/// Load all categories from a JSON file.
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let content = std::fs::read_to_string(path)?;
    let categories = parse_categories(&content)?;
    tracing::debug!(path = %path.display(), count = categories.len(), "Loaded categories");
    Ok(categories)
}

/// Pick one category.
///
/// With an id, the category with that id is returned. Without one, a file
/// holding exactly one category yields it and anything else is an error.
pub fn pick_category(categories: Vec<Category>, id: Option<&str>) -> Result<Category> {
    match id {
        Some(id) => categories
            .into_iter()
            .find(|c| c.id.as_deref() == Some(id))
            .ok_or_else(|| Error::CategoryNotFound(id.to_string())),
        None => {
            let count = categories.len();
            let mut iter = categories.into_iter();
            match (iter.next(), count) {
                (Some(category), 1) => Ok(category),
                (None, _) => Err(Error::Config("category file is empty".to_string())),
                _ => Err(Error::Config(format!(
                    "category file holds {} categories; choose one by id",
                    count
                ))),
            }
        }
    }
}

/// Parse a form values file's contents.
///
/// Only strings and numbers are accepted; `null` entries are skipped.
pub fn parse_form_values(json: &str) -> Result<FormValues> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
    let mut values = FormValues::new();

    for (field, value) in raw {
        match value {
            serde_json::Value::String(s) => values.insert(field, FormValue::Text(s)),
            serde_json::Value::Number(n) => values.insert(field, FormValue::Number(n)),
            serde_json::Value::Null => {}
            other => {
                return Err(Error::InvalidFormValue {
                    field,
                    message: format!("expected a string or number, got {}", json_kind(&other)),
                })
            }
        }
    }

    Ok(values)
}

/// Load form values from a JSON file.
pub fn load_form_values(path: &Path) -> Result<FormValues> {
    let content = std::fs::read_to_string(path)?;
    parse_form_values(&content)
}

/// Parse an `id=value` assignment against a category.
///
/// Values for `number` fields become numbers when they parse as one; every
/// other field keeps the text exactly as given.
pub fn parse_assignment(assignment: &str, category: &Category) -> Result<(String, FormValue)> {
    let (id, value) = assignment.split_once('=').ok_or_else(|| Error::InvalidFormValue {
        field: assignment.to_string(),
        message: "expected id=value".to_string(),
    })?;

    let id = id.trim();
    if id.is_empty() {
        return Err(Error::InvalidFormValue {
            field: assignment.to_string(),
            message: "field id is empty".to_string(),
        });
    }

    let is_number_field = category
        .fields
        .iter()
        .any(|f| f.id == id && f.field_type == FieldType::Number);

    let value = match serde_json::from_str::<serde_json::Number>(value.trim()) {
        Ok(n) if is_number_field => FormValue::Number(n),
        _ => FormValue::Text(value.to_string()),
    };

    Ok((id.to_string(), value))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
