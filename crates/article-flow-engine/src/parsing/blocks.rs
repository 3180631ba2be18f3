/// A structural markdown unit. Identity is positional within the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading level is the count of leading `#` characters, unclamped;
    /// the presentation layer decides what to do with deep levels.
    Heading { level: usize, text: String },
    Paragraph(String),
    BulletList(Vec<String>),
    Quote(String),
}

/// Line accumulators for paragraph and bullet-list runs.
#[derive(Debug, Default)]
struct BlockBuilder {
    paragraph_lines: Vec<String>,
    bullet_lines: Vec<String>,
    out: Vec<Block>,
}

impl BlockBuilder {
    fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush();
        } else if line.starts_with('#') {
            self.flush();
            let level = line.chars().take_while(|&c| c == '#').count();
            self.out.push(Block::Heading {
                level,
                text: line[level..].trim().to_string(),
            });
        } else if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            // Bullets interrupt a paragraph but not the other way round.
            self.flush_paragraph();
            self.bullet_lines.push(item.to_string());
        } else if let Some(rest) = line.strip_prefix('>') {
            self.flush();
            self.out.push(Block::Quote(rest.trim().to_string()));
        } else {
            self.paragraph_lines.push(line.to_string());
        }
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_bullets();
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph_lines.is_empty() {
            self.out.push(Block::Paragraph(self.paragraph_lines.join(" ")));
            self.paragraph_lines.clear();
        }
    }

    fn flush_bullets(&mut self) {
        if !self.bullet_lines.is_empty() {
            self.out
                .push(Block::BulletList(std::mem::take(&mut self.bullet_lines)));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.out
    }
}

/// Parses cleaned markdown into an ordered block sequence.
///
/// Total over arbitrary strings: when nothing parses to a block (empty or
/// whitespace-only input), the result is a single paragraph carrying the
/// unmodified input so the document is never silently empty.
pub fn parse(markdown: &str) -> Vec<Block> {
    let normalized = markdown.replace("\r\n", "\n");
    let mut builder = BlockBuilder::default();

    for raw in normalized.split('\n') {
        builder.push_line(raw.trim());
    }

    let blocks = builder.finish();
    if blocks.is_empty() {
        return vec![Block::Paragraph(markdown.to_string())];
    }
    blocks
}
