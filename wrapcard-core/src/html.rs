//! HTML output for rendered cards
//!
//! Produces a deterministic, asset-free HTML fragment for a [`RenderedCard`],
//! or a standalone document embedding it. The root element carries the
//! card handle as both `id` and `data-card-id` so capture tooling can find it.
//!
//! Every caller-supplied string is escaped. Class names mirror the view
//! tree; the document stylesheet gives them their look.

use std::fmt::Write as _;

use crate::render::{
    CardBody, CardFooter, CardHeader, GenericBody, HeaderBadge, ListBody, RenderedCard,
};

const STYLESHEET: &str = "\
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;background:#0b0b0f;}\
.wrapped-card{position:relative;box-sizing:border-box;width:100%;display:flex;flex-direction:column;padding:32px;color:#fff;border-radius:24px;border:1px solid rgba(255,255,255,.2);box-shadow:0 25px 50px -12px rgba(0,0,0,.6);font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;overflow-wrap:anywhere;}\
.wrapped-noise,.wrapped-sheen{position:absolute;inset:0;border-radius:24px;pointer-events:none;}\
.wrapped-noise{opacity:.2;mix-blend-mode:overlay;}\
.wrapped-sheen{background:linear-gradient(to bottom right,rgba(255,255,255,.2),transparent,rgba(0,0,0,.1));}\
.wrapped-content{position:relative;z-index:10;display:flex;flex-direction:column;}\
.wrapped-header{display:flex;justify-content:space-between;align-items:flex-start;margin-bottom:24px;padding-bottom:16px;border-bottom:1px solid rgba(255,255,255,.1);}\
.wrapped-heading{min-width:0;flex:1;padding-right:8px;}\
.wrapped-label{margin:0 0 4px;font-size:12px;font-weight:700;letter-spacing:.2em;text-transform:uppercase;opacity:.7;}\
.wrapped-title{margin:0;font-size:24px;font-weight:900;text-transform:uppercase;line-height:1;}\
.wrapped-badge{display:flex;align-items:center;justify-content:center;border-radius:9999px;border:1px solid rgba(255,255,255,.2);}\
.wrapped-badge-pulse{width:32px;height:32px;}\
.wrapped-pulse{width:12px;height:12px;border-radius:9999px;background:#fff;}\
.wrapped-badge-ordinal{width:48px;height:48px;font-size:20px;font-weight:700;}\
.wrapped-image{position:relative;width:100%;aspect-ratio:1/1;margin-bottom:24px;border-radius:16px;border:1px solid rgba(255,255,255,.2);overflow:hidden;}\
.wrapped-preload{position:absolute;width:1px;height:1px;opacity:0;pointer-events:none;}\
.wrapped-image-overlay{position:absolute;inset:0;z-index:10;background:linear-gradient(to top,rgba(0,0,0,.5),transparent);}\
.wrapped-image-fill{position:absolute;inset:0;background-size:cover;background-position:center;}\
.wrapped-headline{margin:0 0 16px;font-size:44px;font-weight:800;line-height:.9;letter-spacing:-.05em;}\
.wrapped-stat{display:inline-block;margin-top:16px;padding:16px;border-radius:16px;border:1px solid rgba(255,255,255,.1);background:rgba(255,255,255,.12);}\
.wrapped-stat-value{margin:0;font-size:60px;font-weight:900;}\
.wrapped-stat-caption{margin:4px 0 0;font-size:14px;font-weight:700;text-transform:uppercase;letter-spacing:.1em;opacity:.8;}\
.wrapped-quote{margin-top:24px;padding-left:24px;border-left:2px solid rgba(255,255,255,.3);}\
.wrapped-quote p{margin:0;font-size:18px;font-style:italic;opacity:.9;}\
.wrapped-list{display:flex;flex-direction:column;gap:16px;}\
.wrapped-row{display:flex;align-items:baseline;gap:16px;padding:12px;border-radius:12px;border:1px solid rgba(255,255,255,.05);}\
.wrapped-row-ordinal{font-size:30px;font-weight:900;font-style:italic;opacity:.3;}\
.wrapped-row-value{min-width:0;font-size:24px;font-weight:700;}\
.wrapped-footer{position:relative;display:flex;justify-content:space-between;align-items:flex-end;padding-top:24px;opacity:.6;}\
.wrapped-markers{display:flex;gap:4px;}\
.wrapped-marker{width:4px;height:4px;border-radius:9999px;background:#fff;}\
.wrapped-caption{margin:0;min-width:0;text-align:right;font-size:12px;font-weight:700;letter-spacing:.2em;text-transform:uppercase;}\
.wrapped-byline{opacity:.8;}";

/// Escape text for HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Quote a URL for a CSS `url()` value (before attribute escaping).
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 7);
    out.push_str("url(\"");
    for ch in url.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\r' | '\x0c' => {}
            _ => out.push(ch),
        }
    }
    out.push_str("\")");
    out
}

/// Render the card as an HTML fragment rooted at one `<div>`.
pub fn render_fragment(card: &RenderedCard) -> String {
    let mut html = HtmlBuilder::new();
    html.card(card);
    html.finish()
}

/// Render the card inside a standalone HTML document.
pub fn render_document(card: &RenderedCard) -> String {
    let mut html = HtmlBuilder::new();
    let _ = write!(
        html.buf,
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{}</title><style>{}</style></head><body>\n",
        escape(&card.view.header.title),
        STYLESHEET
    );
    html.card(card);
    html.buf.push_str("</body></html>\n");
    html.finish()
}

struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(4 * 1024),
        }
    }

    fn finish(self) -> String {
        self.buf
    }

    fn card(&mut self, card: &RenderedCard) {
        let view = &card.view;
        let id = escape(&card.handle.id);
        let style = format!(
            "max-width:{}px;background:{}",
            view.max_width_px, view.background
        );
        let _ = writeln!(
            self.buf,
            "<div id=\"{}\" data-card-id=\"{}\" data-layout=\"{}\" class=\"wrapped-card\" style=\"{}\">",
            id,
            id,
            view.layout().as_str(),
            escape(&style)
        );
        self.buf
            .push_str("<div class=\"wrapped-noise\"></div>\n<div class=\"wrapped-sheen\"></div>\n");

        self.buf.push_str("<div class=\"wrapped-content\">\n");
        self.header(&view.header);
        match &view.body {
            CardBody::Generic(body) => self.generic(body),
            CardBody::List(body) => self.list(body),
        }
        self.buf.push_str("</div>\n");

        self.footer(&view.footer);
        self.buf.push_str("</div>\n");
    }

    fn header(&mut self, header: &CardHeader) {
        let _ = writeln!(
            self.buf,
            "<div class=\"wrapped-header\"><div class=\"wrapped-heading\">\
             <p class=\"wrapped-label\">{}</p><h3 class=\"wrapped-title\">{}</h3></div>",
            escape(&header.label),
            escape(&header.title)
        );
        match &header.badge {
            HeaderBadge::Pulse => self.buf.push_str(
                "<div class=\"wrapped-badge wrapped-badge-pulse\"><div class=\"wrapped-pulse\"></div></div>",
            ),
            HeaderBadge::Ordinal(text) => {
                let _ = write!(
                    self.buf,
                    "<div class=\"wrapped-badge wrapped-badge-ordinal\"><span>{}</span></div>",
                    escape(text)
                );
            }
        }
        self.buf.push_str("</div>\n");
    }

    fn generic(&mut self, body: &GenericBody) {
        if let Some(image) = &body.image {
            let src = escape(&image.url);
            let _ = writeln!(
                self.buf,
                "<div class=\"wrapped-image\">\
                 <img src=\"{}\" alt=\"\" class=\"wrapped-preload\" crossorigin=\"anonymous\">\
                 <div class=\"wrapped-image-overlay\"></div>\
                 <div class=\"wrapped-image-fill\" style=\"background-image:{}\"></div></div>",
                src,
                escape(&css_url(&image.url))
            );
        }

        self.buf.push_str("<div class=\"wrapped-body\">\n");
        if let Some(headline) = &body.headline {
            let _ = writeln!(
                self.buf,
                "<h2 class=\"wrapped-headline\">{}</h2>",
                escape(headline)
            );
        }
        if let Some(stat) = &body.stat {
            let _ = writeln!(
                self.buf,
                "<div class=\"wrapped-stat\"><p class=\"wrapped-stat-value\">{}</p>\
                 <p class=\"wrapped-stat-caption\">{}</p></div>",
                escape(&stat.value),
                escape(&stat.caption)
            );
        }
        if let Some(quote) = &body.quote {
            let _ = writeln!(
                self.buf,
                "<div class=\"wrapped-quote\"><p>&quot;{}&quot;</p></div>",
                escape(quote)
            );
        }
        self.buf.push_str("</div>\n");
    }

    fn list(&mut self, body: &ListBody) {
        self.buf.push_str("<div class=\"wrapped-list\">\n");
        for row in &body.rows {
            let class = if row.value.is_some() {
                "wrapped-row"
            } else {
                "wrapped-row wrapped-row-empty"
            };
            let _ = writeln!(
                self.buf,
                "<div class=\"{}\" data-field-id=\"{}\"><span class=\"wrapped-row-ordinal\">{}</span>\
                 <span class=\"wrapped-row-value\">{}</span></div>",
                class,
                escape(&row.field_id),
                escape(&row.ordinal),
                escape(row.display_value())
            );
        }
        self.buf.push_str("</div>\n");
    }

    fn footer(&mut self, footer: &CardFooter) {
        self.buf
            .push_str("<div class=\"wrapped-footer\"><div class=\"wrapped-markers\">");
        for _ in 0..footer.markers {
            self.buf.push_str("<div class=\"wrapped-marker\"></div>");
        }
        self.buf.push_str("</div><p class=\"wrapped-caption\">");
        if let Some(byline) = footer.byline() {
            let _ = write!(
                self.buf,
                "<span class=\"wrapped-byline\">{}</span>",
                escape(&byline)
            );
        }
        let _ = writeln!(self.buf, "{}</p></div>", escape(&footer.watermark));
    }
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

    fn category(fields: &[(&str, FieldType)]) -> Category {
        Category {
            id: Some("test".to_string()),
            title: "Favourite Things".to_string(),
            gradient: "ocean".to_string(),
            fields: fields
                .iter()
                .map(|(id, field_type)| Field {
                    id: id.to_string(),
                    field_type: *field_type,
                    label: id.to_uppercase(),
                    placeholder: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_css_url_quotes() {
        assert_eq!(css_url("a\"b\\c\nd"), r#"url("a\"b\\cd")"#);
    }

    #[test]
    fn test_root_carries_handle_and_width() {
        let cat = category(&[("thing", FieldType::Text)]);
        let values = FormValues::new();
        let card = render(&RenderInput::new(&cat, &values), &settings());
        let html = render_fragment(&card);

        assert!(html.starts_with(&format!("<div id=\"{}\"", card.handle.id)));
        assert!(html.contains(&format!("data-card-id=\"{}\"", card.handle.id)));
        assert!(html.contains("max-width:380px;"));
        assert!(html.contains("data-layout=\"generic\""));
    }

    #[test]
    fn test_generic_fragment() {
        let cat = category(&[
            ("thing", FieldType::Text),
            ("why", FieldType::Textarea),
            ("count", FieldType::Number),
        ]);
        let values: FormValues = [("thing", "Tea <hot>"), ("why", "Warm")]
            .into_iter()
            .collect();
        let input = RenderInput::new(&cat, &values)
            .with_image(Some("https://img.example/tea.png"))
            .with_user(Some("sam"));
        let html = render_fragment(&render(&input, &settings()));

        assert!(html.contains("<p class=\"wrapped-label\">2025 WRAPPED</p>"));
        assert!(html.contains("<h2 class=\"wrapped-headline\">Tea &lt;hot&gt;</h2>"));
        assert!(html.contains("<p>&quot;Warm&quot;</p>"));
        assert!(!html.contains("wrapped-stat"));
        assert!(html.contains("crossorigin=\"anonymous\""));
        assert!(html.contains("background-image:url(&quot;https://img.example/tea.png&quot;)"));
        assert!(html.contains("<span class=\"wrapped-byline\">by sam • </span>WRAPCARD</p>"));
        assert_eq!(html.matches("class=\"wrapped-marker\"").count(), 3);

        // headline, then quote
        let headline = html.find("wrapped-headline").unwrap();
        let quote = html.find("wrapped-quote").unwrap();
        assert!(headline < quote);
    }

    #[test]
    fn test_list_fragment() {
        let cat = category(&[
            ("a", FieldType::Text),
            ("b", FieldType::Text),
            ("c", FieldType::Text),
            ("d", FieldType::Text),
        ]);
        let values: FormValues = [("a", "First")].into_iter().collect();
        let html = render_fragment(&render(&RenderInput::new(&cat, &values), &settings()));

        assert!(html.contains("2025 COLLECTION"));
        assert!(html.contains("<span>#5</span>"));
        assert!(html.contains(
            "<span class=\"wrapped-row-ordinal\">01</span><span class=\"wrapped-row-value\">First</span>"
        ));
        assert_eq!(html.matches("wrapped-row-empty").count(), 2);
        assert!(!html.contains("data-field-id=\"d\""));
        assert!(!html.contains("wrapped-byline"));
    }

    #[test]
    fn test_document_wraps_fragment() {
        let cat = category(&[("thing", FieldType::Text)]);
        let values = FormValues::new();
        let card = render(&RenderInput::new(&cat, &values), &settings());
        let doc = render_document(&card);

        assert!(doc.starts_with("<!doctype html>"));
        assert!(doc.contains("<title>Favourite Things</title>"));
        assert!(doc.contains(&render_fragment(&card)));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let cat = category(&[("thing", FieldType::Text)]);
        let values: FormValues = [("thing", "Same")].into_iter().collect();
        let input = RenderInput::new(&cat, &values);
        assert_eq!(
            render_fragment(&render(&input, &settings())),
            render_fragment(&render(&input, &settings()))
        );
    }
}
