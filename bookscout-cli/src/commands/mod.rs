//! CLI command implementations

mod details;
mod search;

pub use details::details;
pub use search::search;
