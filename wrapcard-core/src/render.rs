//! Card rendering
//!
//! Turns a [`RenderInput`] into a [`RenderedCard`]: a layout-independent
//! view tree plus the [`CardHandle`] a caller uses to find the rendered
//! root later (e.g. to capture it as an image).
//!
//! Two layouts exist. [`CardLayout::select`] picks between them from the
//! category's field list alone:
//! - **Generic**: one headline value, an optional stat and an optional quote.
//! - **List**: numbered rows, one per short text field.
//!
//! Rendering never fails. Missing values fall back to placeholder text or
//! drop the block that would have shown them.

use chrono::{Datelike, Local};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::gradients::GradientTable;
use crate::types::{Category, FieldType, FormValues, RenderInput};

/// Default branding string in every card footer.
pub const DEFAULT_WATERMARK: &str = "wrapcard";

/// Text shown in a list row with no value.
pub const ELLIPSIS: &str = "...";

/// Static badge in the list layout header.
pub const COLLECTION_BADGE: &str = "#5";

/// Number of decorative marker dots in the footer.
pub const FOOTER_MARKERS: usize = 3;

/// Maximum card width in CSS pixels.
pub const CARD_MAX_WIDTH_PX: u32 = 380;

/// Text fields needed before a category renders as a list.
pub const LIST_LAYOUT_MIN_TEXT_FIELDS: usize = 4;

/// List rows that render even without a value.
const ALWAYS_VISIBLE_ROWS: usize = 3;

/// Constants the renderer consumes but does not compute.
#[derive(Debug, Clone)]
pub struct CardSettings {
    /// Year shown in the header label (e.g. "2025")
    pub year_label: String,
    /// Branding string appended to the footer
    pub watermark: String,
    /// Gradient name → CSS background
    pub gradients: GradientTable,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            year_label: current_year_label(),
            watermark: DEFAULT_WATERMARK.to_string(),
            gradients: GradientTable::builtin(),
        }
    }
}

/// The current local year as a label.
pub fn current_year_label() -> String {
    Local::now().year().to_string()
}

// ============================================
// View tree
// ============================================

/// Which of the two layouts a category renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    Generic,
    List,
}

impl CardLayout {
    /// Categories with four or more `text` fields render as a list.
    pub fn select(category: &Category) -> Self {
        if category.text_field_count() >= LIST_LAYOUT_MIN_TEXT_FIELDS {
            CardLayout::List
        } else {
            CardLayout::Generic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardLayout::Generic => "generic",
            CardLayout::List => "list",
        }
    }
}

/// Render result: the view plus the handle that identifies its root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCard {
    pub handle: CardHandle,
    pub view: CardView,
}

/// Stable reference to a rendered card root.
///
/// Renderers attach the id to the root element so capture tooling can find
/// the node after layout. Identical input yields the identical id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CardHandle {
    pub id: String,
}

impl CardHandle {
    /// Derive the handle from the render input.
    ///
    /// `wrapped-card-` followed by 32 hex chars of SHA-256 over the
    /// category, field ids, form values, image and user name.
    pub fn for_input(input: &RenderInput<'_>) -> Self {
        let category = input.category;
        let field_ids: Vec<&str> = category.fields.iter().map(|f| f.id.as_str()).collect();
        let hash_input = serde_json::to_string(&(
            category.id.as_deref(),
            &category.title,
            &category.gradient,
            field_ids,
            input.form_values,
            input.image(),
            input.user(),
        ))
        .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(hash_input.as_bytes());
        let result = hasher.finalize();

        Self {
            id: format!("wrapped-card-{}", hex::encode(&result[..16])),
        }
    }

    /// CSS selector matching the card root.
    pub fn selector(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Layout-independent description of one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// CSS background value
    pub background: String,
    pub max_width_px: u32,
    pub header: CardHeader,
    pub body: CardBody,
    pub footer: CardFooter,
}

impl CardView {
    pub fn layout(&self) -> CardLayout {
        match self.body {
            CardBody::Generic(_) => CardLayout::Generic,
            CardBody::List(_) => CardLayout::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardHeader {
    /// "{YEAR} WRAPPED" or "{YEAR} COLLECTION"
    pub label: String,
    pub title: String,
    pub badge: HeaderBadge,
}

/// Decoration in the header's top-right corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum HeaderBadge {
    /// Pulsing dot (generic layout)
    Pulse,
    /// Static text badge (list layout)
    Ordinal(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum CardBody {
    Generic(GenericBody),
    List(ListBody),
}

/// Headline-centred layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenericBody {
    pub image: Option<ImageBlock>,
    /// Absent only when the category has no text fields
    pub headline: Option<String>,
    pub stat: Option<StatBlock>,
    pub quote: Option<String>,
}

/// Square image with overlay. HTML output also emits a hidden cross-origin
/// preload copy of the image so capture tools see it cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    pub url: String,
}

/// Big number with a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub value: String,
    pub caption: String,
}

/// Enumerated layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListBody {
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub field_id: String,
    /// "01", "02", ...
    pub ordinal: String,
    /// None renders as [`ELLIPSIS`]
    pub value: Option<String>,
}

impl ListRow {
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(ELLIPSIS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFooter {
    pub markers: usize,
    pub user_name: Option<String>,
    pub watermark: String,
}

impl CardFooter {
    /// "by {user} • " prefix, if a user name was given.
    pub fn byline(&self) -> Option<String> {
        self.user_name.as_ref().map(|name| format!("by {} • ", name))
    }

    /// Full footer caption.
    pub fn caption(&self) -> String {
        match self.byline() {
            Some(byline) => format!("{}{}", byline, self.watermark),
            None => self.watermark.clone(),
        }
    }
}

/// Row ordinal: a literal "0" followed by the 1-based index.
pub fn row_ordinal(index: usize) -> String {
    format!("0{}", index + 1)
}

// ============================================
// Renderer
// ============================================

/// Renders cards against a fixed set of [`CardSettings`].
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    settings: CardSettings,
}

impl CardRenderer {
    pub fn new(settings: CardSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, input: &RenderInput<'_>) -> RenderedCard {
        render(input, &self.settings)
    }
}

/// Render one card.
pub fn render(input: &RenderInput<'_>, settings: &CardSettings) -> RenderedCard {
    let category = input.category;
    let layout = CardLayout::select(category);

    tracing::debug!(
        title = %category.title,
        layout = layout.as_str(),
        fields = category.fields.len(),
        values = input.form_values.len(),
        "Rendering card"
    );

    let (header, body) = match layout {
        CardLayout::Generic => (
            CardHeader {
                label: format!("{} WRAPPED", settings.year_label),
                title: category.title.clone(),
                badge: HeaderBadge::Pulse,
            },
            CardBody::Generic(generic_body(category, input.form_values, input.image())),
        ),
        CardLayout::List => (
            CardHeader {
                label: format!("{} COLLECTION", settings.year_label),
                title: category.title.clone(),
                badge: HeaderBadge::Ordinal(COLLECTION_BADGE.to_string()),
            },
            CardBody::List(list_body(category, input.form_values)),
        ),
    };

    let view = CardView {
        background: settings.gradients.resolve(&category.gradient).to_string(),
        max_width_px: CARD_MAX_WIDTH_PX,
        header,
        body,
        footer: CardFooter {
            markers: FOOTER_MARKERS,
            user_name: input.user().map(str::to_string),
            watermark: settings.watermark.clone(),
        },
    };

    RenderedCard {
        handle: CardHandle::for_input(input),
        view,
    }
}

fn generic_body(category: &Category, values: &FormValues, image_url: Option<&str>) -> GenericBody {
    let (text_fields, number_fields): (Vec<_>, Vec<_>) = category
        .fields
        .iter()
        .filter(|f| f.field_type.is_textual() || f.field_type == FieldType::Number)
        .partition(|f| f.field_type.is_textual());

    let headline = text_fields.first().map(|primary| {
        values
            .present(&primary.id)
            .map(|v| v.to_string())
            .or_else(|| primary.placeholder_text().map(str::to_string))
            .unwrap_or_else(|| primary.label.clone())
    });

    let quote = text_fields
        .get(1)
        .and_then(|secondary| values.present(&secondary.id))
        .map(|v| v.to_string());

    let stat = number_fields.first().and_then(|field| {
        values.present(&field.id).map(|v| StatBlock {
            value: v.to_string(),
            caption: field.label.clone(),
        })
    });

    GenericBody {
        image: image_url.map(|url| ImageBlock {
            url: url.to_string(),
        }),
        headline,
        stat,
        quote,
    }
}

fn list_body(category: &Category, values: &FormValues) -> ListBody {
    let rows = category
        .fields
        .iter()
        .filter(|f| f.field_type == FieldType::Text && !f.id.contains("name"))
        .enumerate()
        .filter_map(|(index, field)| {
            let value = values.present(&field.id).map(|v| v.to_string());
            if value.is_none() && index >= ALWAYS_VISIBLE_ROWS {
                return None;
            }
            Some(ListRow {
                field_id: field.id.clone(),
                ordinal: row_ordinal(index),
                value,
            })
        })
        .collect();

    ListBody { rows }
}
