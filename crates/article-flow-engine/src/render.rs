use crate::layout::{FlowOptions, FlowResult, MeasuredSegment, SegmentMetrics, flow};
use crate::models::Catalog;
use crate::parsing::{Block, Segment, blocks, preprocess, tokenize};

/// Knobs for one render pass: container width plus the gaps and metrics the
/// flow layout uses to place segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub max_width: Option<f32>,
    pub spacing: f32,
    pub line_spacing: f32,
    pub metrics: SegmentMetrics,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: Some(360.0),
            spacing: 0.0,
            line_spacing: 4.0,
            metrics: SegmentMetrics::default(),
        }
    }
}

/// One block's inline content: its segments and their flow geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedText {
    pub segments: Vec<Segment>,
    pub layout: FlowResult,
}

/// A block paired with render-ready inline content.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBlock {
    Heading { level: usize, content: RenderedText },
    Paragraph { content: RenderedText },
    BulletList { items: Vec<RenderedText> },
    Quote { content: RenderedText },
}

/// A fully resolved article: ordered blocks, each with segments and layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedArticle {
    pub blocks: Vec<RenderedBlock>,
}

/// Runs the whole pipeline: preprocess → block parse → tokenize → flow.
///
/// Pure and total: any string input yields a displayable document; all
/// recovery is local (see the individual stages). Bullet list items are
/// tokenized and laid out independently of each other.
pub fn render(markdown: &str, catalog: &Catalog, options: &RenderOptions) -> RenderedArticle {
    let preprocessed = preprocess::process(markdown, catalog);

    let blocks = blocks::parse(&preprocessed.text)
        .into_iter()
        .map(|block| match block {
            Block::Heading { level, text } => RenderedBlock::Heading {
                level,
                content: render_text(&text, catalog, &preprocessed, options),
            },
            Block::Paragraph(text) => RenderedBlock::Paragraph {
                content: render_text(&text, catalog, &preprocessed, options),
            },
            Block::BulletList(items) => RenderedBlock::BulletList {
                items: items
                    .iter()
                    .map(|item| render_text(item, catalog, &preprocessed, options))
                    .collect(),
            },
            Block::Quote(text) => RenderedBlock::Quote {
                content: render_text(&text, catalog, &preprocessed, options),
            },
        })
        .collect();

    RenderedArticle { blocks }
}

fn render_text(
    text: &str,
    catalog: &Catalog,
    preprocessed: &preprocess::Preprocessed,
    options: &RenderOptions,
) -> RenderedText {
    let segments = tokenize(text, catalog, &preprocessed.references);
    let measured: Vec<MeasuredSegment<'_>> = segments
        .iter()
        .map(|segment| MeasuredSegment {
            segment,
            metrics: &options.metrics,
        })
        .collect();
    let layout = flow(
        &measured,
        FlowOptions {
            max_width: options.max_width,
            spacing: options.spacing,
            line_spacing: options.line_spacing,
        },
    );
    RenderedText { segments, layout }
}
