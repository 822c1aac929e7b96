//! Helper functions for presenting posts
//!
//! Date display, tag accents and permalinks, as the site's views use them.

mod date;
mod tags;
mod url;

pub use date::*;
pub use tags::*;
pub use url::*;
