//! wrapcard - Wrapped card renderer CLI
//!
//! Render a Spotify Wrapped-style summary card from a category definition
//! and the values entered for it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wrapcard_core::catalog::{load_categories, load_form_values, parse_assignment, pick_category};
use wrapcard_core::{html, text, CardRenderer, Config, FormValues, RenderInput, RenderedCard};

#[derive(Parser, Debug)]
#[command(name = "wrapcard")]
#[command(about = "Render a wrapped-style summary card")]
#[command(version)]
struct Args {
    /// Category file (a single category or a catalog of categories)
    #[arg(long)]
    category: PathBuf,

    /// Category id to use when the file holds a catalog
    #[arg(long)]
    pick: Option<String>,

    /// Form values file (JSON object of field id to string or number)
    #[arg(long)]
    values: Option<PathBuf>,

    /// Set a single form value (format: id=value); applied after --values
    #[arg(long = "set", value_name = "ID=VALUE")]
    assignments: Vec<String>,

    /// Image URL shown on the card
    #[arg(long)]
    image: Option<String>,

    /// User name shown in the footer
    #[arg(long)]
    user: Option<String>,

    /// Year label (default: from config, else the current year)
    #[arg(long)]
    year: Option<String>,

    /// Footer watermark (default: from config)
    #[arg(long)]
    watermark: Option<String>,

    /// Export format (html = fragment, document = standalone page, json, text)
    #[arg(long, default_value = "text")]
    export: String,

    /// Write output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = wrapcard_core::logging::init(&config.logging).ok();

    let categories = load_categories(&args.category)
        .with_context(|| format!("failed to load categories from {}", args.category.display()))?;
    let category =
        pick_category(categories, args.pick.as_deref()).context("failed to select category")?;

    let mut values = match &args.values {
        Some(path) => load_form_values(path)
            .with_context(|| format!("failed to load form values from {}", path.display()))?,
        None => FormValues::new(),
    };
    for assignment in &args.assignments {
        let (id, value) = parse_assignment(assignment, &category)
            .with_context(|| format!("invalid --set value: {}", assignment))?;
        values.insert(id, value);
    }

    let mut settings = config.card_settings();
    if let Some(year) = args.year {
        settings.year_label = year;
    }
    if let Some(watermark) = args.watermark {
        settings.watermark = watermark;
    }

    let renderer = CardRenderer::new(settings);
    let input = RenderInput::new(&category, &values)
        .with_image(args.image.as_deref())
        .with_user(args.user.as_deref());
    let card = renderer.render(&input);

    tracing::info!(
        handle = %card.handle.id,
        layout = card.view.layout().as_str(),
        export = %args.export,
        "Rendered card"
    );

    let output = match args.export.as_str() {
        "html" => html::render_fragment(&card),
        "document" => html::render_document(&card),
        "json" => export_json(&card)?,
        "text" => text::render_text(&card),
        other => anyhow::bail!(
            "Unknown export format: {}. Use 'html', 'document', 'json' or 'text'",
            other
        ),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Card {} written to {}", card.handle.id, path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn export_json(card: &RenderedCard) -> Result<String> {
    let mut json = serde_json::to_string_pretty(card)?;
    json.push('\n');
    Ok(json)
}
