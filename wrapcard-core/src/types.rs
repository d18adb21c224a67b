//! Core domain types for wrapcard
//!
//! These types describe what a card is built from: a [`Category`] schema
//! supplied by the host application, the [`FormValues`] a person typed into
//! that category's form, and the per-render [`RenderInput`] bundle.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Category** | A themed set of form fields defining one wrapped-card type |
//! | **Field** | One input slot within a category (text, textarea, number) |
//! | **Form value** | What was entered for a field; a string or a number |
//! | **Present** | A value that is a non-empty string or a non-zero number |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================
// Category schema
// ============================================

/// A themed card type: title, background gradient and its input fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier used to pick a category out of a catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title shown in the card header
    pub title: String,
    /// Key into the gradient table
    pub gradient: String,
    /// Input fields, in display order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Category {
    /// Number of fields of type [`FieldType::Text`] (textarea excluded).
    pub fn text_field_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.field_type == FieldType::Text)
            .count()
    }
}

/// One input slot within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique within the category
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Field {
    /// Returns the placeholder if it is set and non-empty.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|p| !p.is_empty())
    }
}

/// Input kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    /// Numeric input
    Number,
    /// Any other input kind (date, select, ...); ignored by both layouts
    #[serde(other)]
    Other,
}

impl FieldType {
    /// Text and textarea fields both feed the generic layout's text slots.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::Textarea)
    }
}

// ============================================
// Form values
// ============================================

/// A value entered for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Number(serde_json::Number),
}

impl FormValue {
    /// Whether this value counts as entered.
    ///
    /// Empty strings and numeric zero are treated as "no value".
    pub fn is_present(&self) -> bool {
        match self {
            FormValue::Text(s) => !s.is_empty(),
            FormValue::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Text(s) => f.write_str(s),
            FormValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<i32> for FormValue {
    fn from(n: i32) -> Self {
        FormValue::Number(n.into())
    }
}

impl From<i64> for FormValue {
    fn from(n: i64) -> Self {
        FormValue::Number(n.into())
    }
}

/// Field id → entered value.
///
/// Ordered so that iteration (and therefore the card handle hash) is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FormValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<FormValue>) {
        self.0.insert(id.into(), value.into());
    }

    /// Raw lookup, regardless of presence.
    pub fn get(&self, id: &str) -> Option<&FormValue> {
        self.0.get(id)
    }

    /// Lookup that only yields values which count as entered.
    pub fn present(&self, id: &str) -> Option<&FormValue> {
        self.0.get(id).filter(|v| v.is_present())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FormValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================
// Render input
// ============================================

/// Everything one render needs from the caller.
///
/// Borrowed for the duration of a render; the renderer never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub category: &'a Category,
    pub form_values: &'a FormValues,
    pub image_url: Option<&'a str>,
    pub user_name: Option<&'a str>,
}

impl<'a> RenderInput<'a> {
    pub fn new(category: &'a Category, form_values: &'a FormValues) -> Self {
        Self {
            category,
            form_values,
            image_url: None,
            user_name: None,
        }
    }

    pub fn with_image(mut self, image_url: Option<&'a str>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn with_user(mut self, user_name: Option<&'a str>) -> Self {
        self.user_name = user_name;
        self
    }

    /// Image URL, if one was given and it is non-empty.
    pub fn image(&self) -> Option<&'a str> {
        self.image_url.filter(|u| !u.is_empty())
    }

    /// User name, if one was given and it is non-empty.
    pub fn user(&self) -> Option<&'a str> {
        self.user_name.filter(|u| !u.is_empty())
    }
}
