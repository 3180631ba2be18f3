pub mod blocks;
pub mod inline;
pub mod preprocess;
pub mod span;

pub use blocks::Block;
pub use inline::{Segment, StyledText, TextStyle, tokenize};
pub use preprocess::{Preprocessed, placeholder, process};
pub use span::Span;
