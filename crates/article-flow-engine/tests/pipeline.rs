use article_flow_engine::parsing::{Block, Segment, blocks, placeholder, preprocess};
use article_flow_engine::{ArticleTopic, Catalog, RenderOptions, RenderedBlock, render};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn catalog() -> Catalog {
    Catalog::new(vec![
        ArticleTopic::new("Better Sleep", "sleep.md"),
        ArticleTopic::new("Hydration Basics", "hydration.md"),
    ])
}

#[rstest]
#[case("")]
#[case("   \n\t\n")]
#[case("[1]: https://example.com/only-footnotes")]
#[case("just a paragraph")]
fn preprocess_then_parse_is_total(#[case] input: &str) {
    let preprocessed = preprocess::process(input, &catalog());
    let parsed = blocks::parse(&preprocessed.text);
    assert!(!parsed.is_empty());
}

#[test]
fn footnoted_article_renders_reference_badges() {
    let markdown = "\
# Sleep and recovery

Deep sleep matters [a lot][1], and hydration helps too [according to this][2].

- Go to bed on time
- Read [hydration](hydration.md) first

[1]: https://example.com/sleep-study
[2]: hydration.md
";
    let article = render(markdown, &catalog(), &RenderOptions::default());
    assert_eq!(article.blocks.len(), 3);

    let RenderedBlock::Paragraph { content } = &article.blocks[1] else {
        panic!("expected paragraph block");
    };
    let references: Vec<_> = content
        .segments
        .iter()
        .filter_map(|s| match s {
            Segment::Reference(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(references.len(), 2);
    // External footnote keeps the marker title.
    assert_eq!(references[0].title, "a lot");
    assert_eq!(
        references[0].url.as_deref(),
        Some("https://example.com/sleep-study")
    );
    // Internal footnote takes the catalog title.
    assert_eq!(references[1].title, "Hydration Basics");
    assert_eq!(references[1].article.as_deref(), Some("hydration.md"));

    // No placeholder text leaks into any text segment.
    for block in &article.blocks {
        let texts = match block {
            RenderedBlock::Heading { content, .. }
            | RenderedBlock::Paragraph { content }
            | RenderedBlock::Quote { content } => vec![content],
            RenderedBlock::BulletList { items } => items.iter().collect(),
        };
        for content in texts {
            for segment in &content.segments {
                if let Segment::Text(text) = segment {
                    assert!(!text.as_str().contains('\u{27e6}'));
                }
            }
        }
    }
}

#[test]
fn bullet_item_link_resolves_internally() {
    let markdown = "- Read [hydration](hydration.md) first";
    let article = render(markdown, &catalog(), &RenderOptions::default());
    let RenderedBlock::BulletList { items } = &article.blocks[0] else {
        panic!("expected bullet list");
    };
    let link = items[0]
        .segments
        .iter()
        .find_map(|s| match s {
            Segment::Link { text, reference } => Some((text, reference)),
            _ => None,
        })
        .expect("bullet item should contain a link segment");
    assert_eq!(link.0.as_str(), "hydration");
    assert_eq!(link.1.article.as_deref(), Some("hydration.md"));
}

#[test]
fn placeholder_glued_to_punctuation_splits_cleanly() {
    let markdown = "Sources agree ([see][1]).\n[1]: https://example.com/s";
    let preprocessed = preprocess::process(markdown, &catalog());
    assert_eq!(
        preprocessed.text,
        format!("Sources agree ({}).", placeholder(0))
    );

    let article = render(markdown, &catalog(), &RenderOptions::default());
    let RenderedBlock::Paragraph { content } = &article.blocks[0] else {
        panic!("expected paragraph");
    };
    let tail: Vec<_> = content
        .segments
        .iter()
        .skip_while(|s| !matches!(s, Segment::Reference(_)))
        .collect();
    assert!(matches!(tail[0], Segment::Reference(_)));
    let Segment::Text(after) = tail[1] else {
        panic!("expected closing punctuation after the badge");
    };
    assert_eq!(after.as_str(), ").");
}

#[test]
fn layout_geometry_is_deterministic_and_wraps() {
    let options = RenderOptions {
        max_width: Some(120.0),
        spacing: 0.0,
        line_spacing: 0.0,
        ..RenderOptions::default()
    };
    // 8px per char: "abcdefghij" is 80 wide, the space 8, and "klmno" 40,
    // so the second word cannot fit on the 120 wide line.
    let article = render("abcdefghij klmno", &catalog(), &options);
    let RenderedBlock::Paragraph { content } = &article.blocks[0] else {
        panic!("expected paragraph");
    };
    let lines: Vec<_> = content.layout.placements.iter().map(|p| p.line).collect();
    assert_eq!(lines, vec![0, 0, 1]);
    assert_eq!(content.layout.size.width, 120.0);

    let again = render("abcdefghij klmno", &catalog(), &options);
    assert_eq!(article, again);
}

#[test]
fn whitespace_only_article_falls_back_to_original_input() {
    let input = "  \n \n";
    let preprocessed = preprocess::process(input, &catalog());
    let parsed = blocks::parse(&preprocessed.text);
    assert_eq!(parsed, vec![Block::Paragraph(preprocessed.text.clone())]);
}

#[test]
fn unknown_reference_marker_survives_to_text_segments() {
    let article = render(
        "See [source][9] for details.",
        &catalog(),
        &RenderOptions::default(),
    );
    let RenderedBlock::Paragraph { content } = &article.blocks[0] else {
        panic!("expected paragraph");
    };
    assert!(content.segments.iter().all(|s| !matches!(s, Segment::Reference(_))));
    let joined: String = content
        .segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) => t.as_str().to_string(),
            Segment::Space => " ".to_string(),
            _ => String::new(),
        })
        .collect();
    assert_eq!(joined, "See [source][9] for details.");
}
