//! # wrapcard-core
//!
//! Core library for wrapcard - a renderer for "wrapped"-style summary cards.
//!
//! This library provides:
//! - Domain types for categories, fields and form values
//! - The card renderer and its view tree
//! - HTML and plain-text output
//! - Category / form value loading
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Rendering
//!
//! A render is a pure function of its input:
//! - **Input:** a [`Category`], its [`FormValues`], an optional image URL and
//!   an optional user name
//! - **Settings:** year label, watermark and gradient table ([`CardSettings`])
//! - **Output:** a [`RenderedCard`] holding the view tree and the
//!   [`CardHandle`] that identifies its root
//!
//! ## Example
//!
//! ```rust
//! use wrapcard_core::{html, render, CardSettings, Category, FormValues, RenderInput};
//!
//! let category: Category = serde_json::from_str(r#"{
//!     "title": "Role of the Year",
//!     "gradient": "sunset",
//!     "fields": [{"id": "role", "type": "text", "label": "Role", "placeholder": "Developer"}]
//! }"#).unwrap();
//! let values = FormValues::new();
//!
//! let card = render(&RenderInput::new(&category, &values), &CardSettings::default());
//! let fragment = html::render_fragment(&card);
//! assert!(fragment.contains("Developer"));
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use gradients::GradientTable;
pub use render::{
    render, CardBody, CardHandle, CardLayout, CardRenderer, CardSettings, CardView, RenderedCard,
};
pub use types::*;

// Public modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod gradients;
pub mod html;
pub mod logging;
pub mod render;
pub mod text;
pub mod types;
