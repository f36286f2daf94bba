pub mod classify;
pub mod filter;
pub mod map;

pub use filter::RequestFilter;
pub use map::{MapOptions, map_document};
