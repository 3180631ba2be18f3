pub mod metrics;

pub use metrics::{MeasuredSegment, SegmentMetrics};

/// A measured width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An element origin relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An inline element the flow algorithm can place.
///
/// `max_width` is the width still available to the element; `None` means the
/// container is unbounded. Elements report their size and may shrink to fit,
/// but the algorithm never assumes uniform metrics across elements.
pub trait Measure {
    fn measure(&self, max_width: Option<f32>) -> Size;
}

/// Flow parameters: container width plus inter-element and inter-line gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptions {
    pub max_width: Option<f32>,
    pub spacing: f32,
    pub line_spacing: f32,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            max_width: None,
            spacing: 0.0,
            line_spacing: 0.0,
        }
    }
}

/// One placed element: where it sits, how big it is, which line it landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Point,
    pub size: Size,
    pub line: usize,
}

/// The geometry produced by one flow pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowResult {
    pub placements: Vec<Placement>,
    pub size: Size,
}

/// Greedy single-pass line wrap over heterogeneous inline elements.
///
/// Each element is measured against the remaining width of the current line
/// (the full width when the container is unbounded). An element that would
/// overflow a non-empty line starts a new one and is re-measured against the
/// full container width; an oversized element on an empty line is placed
/// anyway rather than dropped. The total size is the container width when
/// finite, otherwise the widest line.
pub fn flow<E: Measure>(elements: &[E], opts: FlowOptions) -> FlowResult {
    let mut placements = Vec::with_capacity(elements.len());
    let mut origin_x = 0.0f32;
    let mut origin_y = 0.0f32;
    let mut line_height = 0.0f32;
    let mut line = 0usize;
    let mut line_len = 0usize;
    let mut widest = 0.0f32;

    for element in elements {
        let remaining = opts.max_width.map(|max| (max - origin_x).max(0.0));
        let mut size = element.measure(remaining);

        if let Some(max) = opts.max_width
            && origin_x + size.width > max
            && line_len > 0
        {
            origin_y += line_height + opts.line_spacing;
            origin_x = 0.0;
            line_height = 0.0;
            line += 1;
            line_len = 0;
            size = element.measure(Some(max));
        }

        placements.push(Placement {
            origin: Point {
                x: origin_x,
                y: origin_y,
            },
            size,
            line,
        });

        widest = widest.max(origin_x + size.width);
        origin_x += size.width + opts.spacing;
        line_height = line_height.max(size.height);
        line_len += 1;
    }

    let height = if placements.is_empty() {
        0.0
    } else {
        origin_y + line_height
    };
    let width = opts.max_width.unwrap_or(widest);

    FlowResult {
        placements,
        size: Size::new(width, height),
    }
}
