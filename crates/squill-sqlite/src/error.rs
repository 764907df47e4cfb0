//! Serializer error types.

/// Errors detected while serializing a statement tree.
///
/// Serialization either fully succeeds or fails atomically: no partial SQL
/// text is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
    /// The tree is constructible but cannot be rendered as valid SQL, e.g.
    /// `VALUES` with no rows or `SET` with no assignments. Failing here
    /// turns a confusing database syntax error into an immediate,
    /// attributable one.
    #[error("malformed statement: {0}")]
    MalformedStatement(&'static str),

    /// Expression or subquery nesting exceeded the maximum depth.
    #[error("statement nesting exceeds the maximum depth of {limit}")]
    TooDeeplyNested {
        /// The depth limit that was exceeded.
        limit: usize,
    },
}
