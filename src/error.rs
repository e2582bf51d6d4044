use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors raised by graph construction, label lookup, generators and shortest-path queries.
///
/// The variants fall into two classes: range violations (a node or label that does not exist)
/// and invalid arguments (parameters that cannot describe a valid request).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A node index `>= n` was passed to a graph with `n` nodes
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange {
        node: Node,
        number_of_nodes: NumNodes,
    },

    /// A label was looked up that was never added
    #[error("label '{0}' does not exist")]
    UnknownLabel(char),

    /// A parameter is outside of its valid domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GraphError {
    /// Returns *true* if the error reports access to a non-existing node or label
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::NodeOutOfRange { .. } | Self::UnknownLabel(_))
    }

    /// Returns *true* if the error reports an invalid parameter
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Shorthand for returning `Err(GraphError::InvalidParameter)` early when a condition fails
macro_rules! invalid_unless {
    ($cond : expr, $($fmt : tt)+) => {
        if !($cond) {
            return Err($crate::error::GraphError::InvalidParameter(format!($($fmt)+)));
        }
    };
}

pub(crate) use invalid_unless;
