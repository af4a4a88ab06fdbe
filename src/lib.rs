pub mod error;
pub mod extract;
pub mod graph;
pub mod render;
pub mod scan;
pub mod source;
