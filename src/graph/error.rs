use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError<IndexType> {
    MissingNode(IndexType),
    MissingEdge((IndexType, IndexType)),
    DuplicateEdge((IndexType, IndexType)),
    NonPositiveWeight((IndexType, IndexType), f64),
    AsymmetricEdge((IndexType, IndexType)),
}

impl<IndexType: fmt::Display> fmt::Display for GraphError<IndexType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode(id) => write!(f, "Node {} is not in the graph.", id),
            Self::MissingEdge((from, to)) => {
                write!(f, "Edge ({}, {}) is not in the graph.", from, to)
            }
            Self::DuplicateEdge((from, to)) => {
                write!(f, "Edge ({}, {}) is already in the graph.", from, to)
            }
            Self::NonPositiveWeight((from, to), weight) => write!(
                f,
                "Edge ({}, {}) has non-positive weight {}.",
                from, to, weight
            ),
            Self::AsymmetricEdge((from, to)) => write!(
                f,
                "Edge ({}, {}) has no matching reverse edge of equal weight.",
                from, to
            ),
        }
    }
}

impl<IndexType: fmt::Display + fmt::Debug> std::error::Error for GraphError<IndexType> {}
