//! json-limn: infer a structural schema from sample data and render it as a
//! TypeScript-style interface or a draft-07 JSON Schema document.
//!
//! Pipeline: raw value(s) → [`infer::infer`] (primitive classification +
//! unification) → [`node::SchemaNode`] tree → renderer → generated text,
//! with a union-normalization pass on the interface path and an `anyOf`
//! cleanup walk on the schema path.
//!
//! The core is synchronous and pure; every call returns a fresh,
//! independently owned node tree. I/O lives in [`source`] and [`cli`].

pub mod cli;
pub mod emit;
pub mod error;
pub mod infer;
pub mod node;
pub mod source;

pub use emit::{SchemaDocOptions, render_interface, render_json_schema};
pub use error::SchemaError;
pub use infer::{classify, infer, infer_samples, unify};
pub use node::{ObjectShape, SchemaNode, StringFormat};
