use crate::parsing::span::Span;

/// Inline formatting attributes carried by a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        bold: false,
        italic: false,
    };
}

/// A styled sub-range of a [`StyledText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    pub span: Span,
    pub style: TextStyle,
}

/// An immutable string with attached style spans.
///
/// Spans are contiguous, non-overlapping, and cover the whole text in order.
/// This is the explicit "formatted text slice" representation the word
/// splitter needs: `slice` extracts any byte sub-range in O(length) while
/// preserving the attributes of the surviving characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    spans: Vec<StyleSpan>,
}

impl StyledText {
    /// A run of unformatted text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::PLAIN)
    }

    /// A run with one uniform style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            vec![]
        } else {
            vec![StyleSpan {
                span: Span {
                    start: 0,
                    end: text.len(),
                },
                style,
            }]
        };
        Self { text, spans }
    }

    /// Appends a run, merging with the last span when the style matches.
    pub fn push_run(&mut self, text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        if let Some(last) = self.spans.last_mut()
            && last.style == style
        {
            last.span.end = end;
            return;
        }
        self.spans.push(StyleSpan {
            span: Span { start, end },
            style,
        });
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// The style at a byte offset. Offsets past the end report plain text.
    pub fn style_at(&self, offset: usize) -> TextStyle {
        self.spans
            .iter()
            .find(|s| s.span.start <= offset && offset < s.span.end)
            .map(|s| s.style)
            .unwrap_or(TextStyle::PLAIN)
    }

    /// Extracts the byte range `[start, end)` as a new `StyledText`,
    /// clipping style spans to the range and rebasing their offsets.
    ///
    /// Both bounds must lie on character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> StyledText {
        let end = end.min(self.text.len());
        let start = start.min(end);
        let text = self.text[start..end].to_string();

        let mut spans = Vec::new();
        for s in &self.spans {
            let clipped = Span {
                start: s.span.start.max(start),
                end: s.span.end.min(end),
            };
            if clipped.is_empty() {
                continue;
            }
            spans.push(StyleSpan {
                span: Span {
                    start: clipped.start - start,
                    end: clipped.end - start,
                },
                style: s.style,
            });
        }
        StyledText { text, spans }
    }
}
