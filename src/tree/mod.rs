//! Directory tree rendering
//!
//! - `sort` - case-insensitive sibling ordering
//! - `render` - `TreeRenderer`, the recursive walk that drives colored output

mod render;
mod sort;

pub use render::{TreeRenderer, render_to_string};
pub use sort::{compare_names, sort_entries};
