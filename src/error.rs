use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Unifying zero nodes has no defensible default; fail loudly instead of
    /// inventing one.
    #[error("cannot unify an empty set of schema nodes")]
    EmptyUnification,

    /// Serializing the generated schema document failed.
    #[error("failed to serialize schema document: {0}")]
    Emit(#[from] serde_json::Error),
}
