use anyhow::{Context, Result};
use article_flow_config::{Config, RenderSettings};
use article_flow_engine::{
    Catalog, RenderOptions, RenderedArticle, RenderedBlock, RenderedText, Segment, io,
};
use std::path::PathBuf;
use std::{env, process};

fn usage(program: &str) {
    eprintln!("Usage: {program} [articles-folder-path] <article-link>");
    eprintln!("       {program} <articles-folder-path>   (list the catalog's articles)");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    // Articles path, requested article and render overrides come from the
    // CLI args, falling back to the config file for path and overrides.
    let (articles_path, link, settings) = match args.len() {
        3 => (
            PathBuf::from(&args[1]),
            Some(args[2].clone()),
            RenderSettings::default(),
        ),
        2 => match Config::load() {
            Ok(Some(config)) => (config.articles_path, Some(args[1].clone()), config.render),
            Ok(None) => (PathBuf::from(&args[1]), None, RenderSettings::default()),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                usage(&args[0]);
                process::exit(1);
            }
        },
        _ => {
            usage(&args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_articles_dir(&articles_path) {
        eprintln!(
            "Error: Articles path '{}' is invalid: {e}",
            articles_path.display()
        );
        process::exit(1);
    }

    let catalog = io::load_catalog(&articles_path.join("index.json"))
        .with_context(|| format!("loading catalog from {}", articles_path.display()))?;

    let Some(link) = link else {
        // No article requested: list what the catalog knows about.
        print!("{}", catalog_listing(&catalog));
        return Ok(());
    };

    // A missing article is not an error: the pipeline treats empty input as
    // "no content" and we show the placeholder message instead.
    let markdown = match io::read_article(&link, &articles_path) {
        Ok(text) => text,
        Err(io::IoError::NotFound(_)) => String::new(),
        Err(e) => return Err(e).with_context(|| format!("reading article '{link}'")),
    };

    if markdown.trim().is_empty() {
        println!("Content not available.");
        return Ok(());
    }

    let article = article_flow_engine::render(&markdown, &catalog, &render_options(settings));
    print!("{}", render_plain_text(&article));
    Ok(())
}

/// Engine defaults with any configured overrides applied on top.
fn render_options(settings: RenderSettings) -> RenderOptions {
    let mut options = RenderOptions::default();
    if let Some(max_width) = settings.max_width {
        options.max_width = Some(max_width);
    }
    if let Some(spacing) = settings.spacing {
        options.spacing = spacing;
    }
    if let Some(line_spacing) = settings.line_spacing {
        options.line_spacing = line_spacing;
    }
    options
}

/// One line per catalog entry: the extension-less link key (what
/// `read_article` accepts) and the article title, tab separated.
fn catalog_listing(catalog: &Catalog) -> String {
    let mut out = String::new();
    for topic in catalog.topics() {
        out.push_str(&format!("{}\t{}\n", topic.display_link(), topic.title));
    }
    out
}

/// Dumps a rendered article as plain text, one layout line per output line,
/// with reference badges shown as `[-> title]`.
fn render_plain_text(article: &RenderedArticle) -> String {
    let mut out = String::new();

    for block in &article.blocks {
        match block {
            RenderedBlock::Heading { level, content } => {
                let prefix = "#".repeat((*level).min(6));
                out.push_str(&format!("{} {}\n\n", prefix, flatten_lines(content).join(" ")));
            }
            RenderedBlock::Paragraph { content } => {
                for line in flatten_lines(content) {
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push('\n');
            }
            RenderedBlock::BulletList { items } => {
                for item in items {
                    out.push_str(&format!("• {}\n", flatten_lines(item).join(" ")));
                }
                out.push('\n');
            }
            RenderedBlock::Quote { content } => {
                for line in flatten_lines(content) {
                    out.push_str(&format!("> {line}\n"));
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Regroups a block's segments by the line index the flow layout assigned.
fn flatten_lines(content: &RenderedText) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for (segment, placement) in content.segments.iter().zip(&content.layout.placements) {
        while lines.len() <= placement.line {
            lines.push(String::new());
        }
        let line = &mut lines[placement.line];
        match segment {
            Segment::Text(text) => line.push_str(text.as_str()),
            Segment::Space => line.push(' '),
            Segment::Link { text, .. } => line.push_str(text.as_str()),
            Segment::Reference(reference) => {
                if reference.is_available() {
                    line.push_str(&format!("[-> {}]", reference.title));
                } else {
                    line.push_str("[Reference unavailable]");
                }
            }
        }
    }

    // Wrapped lines keep their leading/trailing space segments; tidy them.
    lines.iter().map(|l| l.trim().to_string()).collect()
}
