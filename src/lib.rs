pub mod loader;
pub mod normalize;
pub mod grouping;
pub mod report;
