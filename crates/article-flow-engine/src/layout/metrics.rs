use super::{Measure, Size};
use crate::parsing::Segment;

/// Deterministic segment measurements.
///
/// The engine stays free of font machinery: text advances by a fixed
/// per-character width and reference badges have a fixed intrinsic size.
/// Callers with real glyph metrics implement [`Measure`] themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMetrics {
    pub char_width: f32,
    pub line_height: f32,
    pub badge_size: Size,
}

impl Default for SegmentMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 18.0,
            badge_size: Size::new(22.0, 22.0),
        }
    }
}

impl SegmentMetrics {
    /// Text reports its intrinsic width regardless of the available width;
    /// overflow is the flow algorithm's wrap signal, not the element's.
    fn text_size(&self, text: &str) -> Size {
        Size::new(
            text.chars().count() as f32 * self.char_width,
            self.line_height,
        )
    }
}

/// A segment paired with the metrics that size it, ready for [`flow`].
///
/// [`flow`]: super::flow
#[derive(Debug, Clone, Copy)]
pub struct MeasuredSegment<'a> {
    pub segment: &'a Segment,
    pub metrics: &'a SegmentMetrics,
}

impl Measure for MeasuredSegment<'_> {
    fn measure(&self, _max_width: Option<f32>) -> Size {
        match self.segment {
            Segment::Text(text) => self.metrics.text_size(text.as_str()),
            Segment::Space => Size::new(self.metrics.char_width, self.metrics.line_height),
            Segment::Link { text, .. } => self.metrics.text_size(text.as_str()),
            Segment::Reference(_) => self.metrics.badge_size,
        }
    }
}
