//! Error types for wound tension evaluation.

use thiserror::Error;

/// Result type for wound tension operations.
pub type WoundResult<T> = Result<T, WoundError>;

/// Errors that can occur while locating the wound rim or applying tension.
///
/// All of these describe a mesh that violates a precondition. None are
/// transient, so a failed evaluation should abort the simulation step.
#[derive(Debug, Error)]
pub enum WoundError {
    /// A boundary trace could not be completed.
    #[error("malformed boundary at node {node} (trace started at {start}): {reason}")]
    MalformedBoundary {
        /// Node the trace started from.
        start: usize,
        /// Node where the trace got stuck.
        node: usize,
        /// What went wrong.
        reason: String,
    },

    /// Fewer than two boundary loops could be found.
    #[error("need two boundary loops, found {found}")]
    InsufficientBoundaryLoops {
        /// Number of loops found.
        found: usize,
    },

    /// A traced loop has fewer than two nodes.
    #[error("boundary loop starting at node {start} has only {length} node(s)")]
    DegenerateLoop {
        /// Node the trace started from.
        start: usize,
        /// Number of nodes in the loop.
        length: usize,
    },

    /// The trace was asked to start at an interior node.
    #[error("node {node} is not a boundary node")]
    NotBoundaryNode {
        /// The interior node.
        node: usize,
    },

    /// A node index is not present in the mesh.
    #[error("node {index} does not exist")]
    NodeNotFound {
        /// The missing node index.
        index: usize,
    },

    /// An element index is not present in the mesh.
    #[error("element {index} does not exist")]
    ElementNotFound {
        /// The missing element index.
        index: usize,
    },

    /// A node claims to belong to an element that does not list it.
    #[error("node {node} is not part of element {element}")]
    NodeNotInElement {
        /// Node index.
        node: usize,
        /// Element index.
        element: usize,
    },

    /// The mesh has no length gradient for an element edge.
    #[error("no edge gradient at local index {local_index} of element {element}")]
    MissingEdgeGradient {
        /// Element index.
        element: usize,
        /// Local index of the edge's first node.
        local_index: usize,
    },

    /// The mesh cannot guarantee consistently wound elements.
    #[error("mesh elements are not consistently wound")]
    InconsistentWinding,

    /// Invalid tension parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl WoundError {
    /// Create a malformed boundary error.
    #[must_use]
    pub fn malformed(start: usize, node: usize, reason: impl Into<String>) -> Self {
        Self::MalformedBoundary {
            start,
            node,
            reason: reason.into(),
        }
    }

    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}
