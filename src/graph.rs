mod error;
mod map_graph;

pub use error::GraphError;
pub use map_graph::MapGraph;

use decorum::R64;
use std::fmt::{Debug, Display};
use std::hash::Hash;

pub type Edge<IndexType> = (IndexType, IndexType);

/// Read contract the routing engine needs from a graph.
///
/// The engine never mutates a graph; construction happens once in the
/// implementing type and the colony only ever looks up neighborhoods and
/// edge weights from it.
pub trait WeightedGraph {
    type IndexType: Clone + Ord + Hash + Debug + Display;

    /// Returns true if there are no nodes, or false otherwise.
    fn is_empty(&self) -> bool;

    /// Returns the number of nodes in this graph.
    fn order(&self) -> usize;

    /// Returns the number of undirected edges in this graph.
    fn size(&self) -> usize;

    /// Returns the node ids of this graph.
    fn node_ids(&self) -> Vec<Self::IndexType>;

    /// Returns true if node with id is a member, or false otherwise.
    fn has_node(&self, id: &Self::IndexType) -> bool;

    /// Returns an iterator over the neighbor ids of the given node together
    /// with the weight of the connecting edge, in ascending id order.
    /// Returns an error if the node is not in the graph.
    #[allow(clippy::type_complexity)]
    fn iter_neighbors(
        &self,
        id: &Self::IndexType,
    ) -> Result<
        Box<dyn Iterator<Item = (Self::IndexType, R64)> + '_>,
        GraphError<Self::IndexType>,
    >;

    /// Returns the weight of an edge.
    fn edge_weight(
        &self,
        edge: Edge<&Self::IndexType>,
    ) -> Result<R64, GraphError<Self::IndexType>>;
}
