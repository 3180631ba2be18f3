pub mod io;
pub mod layout;
pub mod models;
pub mod parsing;
pub mod render;
pub mod resolve;

// Re-export key types for easier usage
pub use layout::{FlowOptions, FlowResult, Measure, Placement, Point, Size};
pub use models::{ArticleTopic, Catalog, LinkReference};
pub use parsing::{Block, Segment, StyledText, TextStyle};
pub use render::{RenderOptions, RenderedArticle, RenderedBlock, RenderedText, render};
pub use resolve::{TopicLookup, resolve};
