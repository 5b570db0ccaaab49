//! Renderers over the inferred schema tree, plus the post-render union
//! normalization passes.

pub mod dedup;
pub mod interface;
pub mod json_schema;

pub use interface::render_interface;
pub use json_schema::{SchemaDocOptions, render_json_schema};
