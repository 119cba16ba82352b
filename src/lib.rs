//! Standalone sequence and text utilities.
//!
//! Three pattern groups, each a module of independent functions over
//! caller-owned values:
//!
//! - [`arrays`]: element access, construction, copying, search, and
//!   joining over generic sequences.
//! - [`text`]: character access, slicing, splitting, case conversion,
//!   and replacement over strings.
//! - [`numbers`]: absolute-value sums, type filtering, min/max
//!   extraction, and fixed-format assembly over numeric sequences.
//!
//! Every function takes its inputs as parameters and returns a fresh
//! value. The one exception, [`arrays::change_element_at_index`], writes
//! through the slice it is given; see its docs.

pub mod arrays;
pub mod numbers;
pub mod text;
