pub mod reference;
pub mod topic;

pub use reference::LinkReference;
pub use topic::{ArticleTopic, Catalog};
