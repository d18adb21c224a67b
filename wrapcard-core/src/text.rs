//! Plain-text output for terminals.

use std::fmt::Write as _;

use crate::render::{CardBody, HeaderBadge, RenderedCard};

const BOX_WIDTH: usize = 60;

/// Render the card as a boxed block of terminal text.
pub fn render_text(card: &RenderedCard) -> String {
    let view = &card.view;
    let mut out = String::new();

    let badge = match &view.header.badge {
        HeaderBadge::Pulse => String::new(),
        HeaderBadge::Ordinal(text) => format!(" {}", text),
    };
    let heading = format!("{}{}", view.header.label, badge);

    let _ = writeln!(out);
    let _ = writeln!(out, "╭{}╮", "─".repeat(BOX_WIDTH));
    let _ = writeln!(out, "│{:^width$}│", heading, width = BOX_WIDTH);
    let _ = writeln!(out, "│{:^width$}│", view.header.title, width = BOX_WIDTH);
    let _ = writeln!(out, "╰{}╯", "─".repeat(BOX_WIDTH));
    let _ = writeln!(out);

    match &view.body {
        CardBody::Generic(body) => {
            if let Some(image) = &body.image {
                let _ = writeln!(out, "   [image] {}", image.url);
                let _ = writeln!(out);
            }
            if let Some(headline) = &body.headline {
                let _ = writeln!(out, "   {}", headline);
            }
            if let Some(stat) = &body.stat {
                let _ = writeln!(out);
                let _ = writeln!(out, "   {}", stat.value);
                let _ = writeln!(out, "   {}", stat.caption.to_uppercase());
            }
            if let Some(quote) = &body.quote {
                let _ = writeln!(out);
                let _ = writeln!(out, "   │ \"{}\"", quote);
            }
        }
        CardBody::List(body) => {
            for row in &body.rows {
                let _ = writeln!(out, "   {:<4} {}", row.ordinal, row.display_value());
            }
        }
    }

    let markers = vec!["•"; view.footer.markers].join(" ");
    let _ = writeln!(out);
    let _ = writeln!(out, "   {}   {}", markers, view.footer.caption());
    let _ = writeln!(out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradients::GradientTable;
    use crate::render::{render, CardSettings};
    use crate::types::{Category, Field, FieldType, FormValues, RenderInput};

    fn settings() -> CardSettings {
        CardSettings {
            year_label: "2025".to_string(),
            watermark: "WRAPCARD".to_string(),
            gradients: GradientTable::builtin(),
        }
    }

    fn category(ids: &[&str], field_type: FieldType) -> Category {
        Category {
            id: None,
            title: "Top Picks".to_string(),
            gradient: "neon".to_string(),
            fields: ids
                .iter()
                .map(|id| Field {
                    id: id.to_string(),
                    field_type,
                    label: format!("{} label", id),
                    placeholder: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_generic_text() {
        let cat = category(&["song"], FieldType::Text);
        let values: FormValues = [("song", "Clair de Lune")].into_iter().collect();
        let input = RenderInput::new(&cat, &values).with_user(Some("ana"));
        let text = render_text(&render(&input, &settings()));

        assert!(text.contains("2025 WRAPPED"));
        assert!(text.contains("Top Picks"));
        assert!(text.contains("   Clair de Lune\n"));
        assert!(text.contains("• • •   by ana • WRAPCARD"));
    }

    #[test]
    fn test_list_text() {
        let cat = category(&["a", "b", "c", "d", "e"], FieldType::Text);
        let values: FormValues = [("a", "A"), ("e", "E")].into_iter().collect();
        let text = render_text(&render(&RenderInput::new(&cat, &values), &settings()));

        assert!(text.contains("2025 COLLECTION #5"));
        assert!(text.contains("   01   A\n"));
        assert!(text.contains("   02   ...\n"));
        assert!(text.contains("   03   ...\n"));
        assert!(!text.contains("   04 "));
        assert!(text.contains("   05   E\n"));
    }
}
