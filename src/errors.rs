use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// A single-parent query found more than one candidate parent.
    #[error("Ambiguous hierarchy: item has more than one parent")]
    AmbiguousParent,

    #[error("Hierarchy walk exceeded the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
