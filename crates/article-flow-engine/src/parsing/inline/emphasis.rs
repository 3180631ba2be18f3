use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::styled::TextStyle;

/// One formatted run produced by the inline emphasis pass: a piece of text
/// with uniform style, optionally carrying an explicit hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisRun {
    pub text: String,
    pub style: TextStyle,
    pub link: Option<String>,
}

/// Runs the off-the-shelf inline markdown pass over one block's text.
///
/// Bold/italic nesting is tracked with depth counters so `***x***` comes out
/// both bold and italic. Code spans keep their characters as plain text.
/// When the parser yields no text for non-empty input, the whole block falls
/// back to a single plain run so no characters are ever lost.
pub fn emphasis_runs(text: &str) -> Vec<EmphasisRun> {
    let parser = Parser::new(text);
    let mut runs: Vec<EmphasisRun> = Vec::new();
    let mut bold = 0u32;
    let mut italic = 0u32;
    let mut links: Vec<String> = Vec::new();
    let mut link_had_text = false;

    fn push(runs: &mut Vec<EmphasisRun>, text: &str, bold: u32, italic: u32, links: &[String]) {
        if text.is_empty() {
            return;
        }
        runs.push(EmphasisRun {
            text: text.to_string(),
            style: TextStyle {
                bold: bold > 0,
                italic: italic > 0,
            },
            link: links.last().cloned(),
        });
    }

    for event in parser {
        match event {
            Event::Start(Tag::Strong) => bold += 1,
            Event::End(TagEnd::Strong) => bold = bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => italic += 1,
            Event::End(TagEnd::Emphasis) => italic = italic.saturating_sub(1),
            Event::Start(Tag::Link { dest_url, .. }) => {
                links.push(dest_url.to_string());
                link_had_text = false;
            }
            Event::End(TagEnd::Link) => {
                let url = links.pop();
                // `[](url)` produces no text event; keep the link anyway so
                // the tokenizer can substitute fallback display text.
                if !link_had_text && let Some(url) = url {
                    runs.push(EmphasisRun {
                        text: String::new(),
                        style: TextStyle {
                            bold: bold > 0,
                            italic: italic > 0,
                        },
                        link: Some(url),
                    });
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if !links.is_empty() {
                    link_had_text = true;
                }
                push(&mut runs, &t, bold, italic, &links);
            }
            Event::SoftBreak | Event::HardBreak => push(&mut runs, "\n", bold, italic, &links),
            _ => {}
        }
    }

    if runs.is_empty() && !text.is_empty() {
        runs.push(EmphasisRun {
            text: text.to_string(),
            style: TextStyle::PLAIN,
            link: None,
        });
    }
    runs
}
