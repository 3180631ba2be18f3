pub mod emphasis;
pub mod styled;
pub mod tokenizer;

pub use styled::{StyleSpan, StyledText, TextStyle};
pub use tokenizer::{Segment, tokenize};
