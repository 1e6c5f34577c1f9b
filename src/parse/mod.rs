pub mod splitter;
pub mod normalize;
