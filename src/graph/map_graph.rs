use crate::graph::{Edge, GraphError, WeightedGraph};

use decorum::R64;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Implements a weighted, undirected graph using nested ordered maps.
///
/// Neighbors enumerate in ascending id order, so every traversal over the
/// same graph sees the same candidate order. The graph is built once and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MapGraph<IndexType: Ord> {
    adjacency: BTreeMap<IndexType, BTreeMap<IndexType, R64>>,
    size: usize,
}

impl<IndexType> MapGraph<IndexType>
where
    IndexType: Clone + Ord + Hash + Debug + Display,
{
    /// Creates a new graph from a node list and a list of undirected weighted
    /// edges. Every edge is inserted in both directions. Edges referencing
    /// nodes missing from the node list, duplicate edges and edges with
    /// weights that are not strictly positive are rejected.
    pub fn new(
        nodes: Vec<IndexType>,
        edges: Vec<(IndexType, IndexType, f64)>,
    ) -> Result<Self, GraphError<IndexType>> {
        let mut graph = MapGraph {
            adjacency: nodes
                .into_iter()
                .map(|id| (id, BTreeMap::new()))
                .collect(),
            size: 0,
        };

        for (from, to, weight) in edges.into_iter() {
            if !graph.adjacency.contains_key(&from) {
                return Err(GraphError::MissingNode(from));
            } else if !graph.adjacency.contains_key(&to) {
                return Err(GraphError::MissingNode(to));
            } else if !weight.is_finite() || weight <= 0.0 {
                return Err(GraphError::NonPositiveWeight((from, to), weight));
            } else if graph.adjacency[&from].contains_key(&to) {
                return Err(GraphError::DuplicateEdge((from, to)));
            }

            let mapped = R64::from_inner(weight);
            graph
                .adjacency
                .get_mut(&from)
                .unwrap()
                .insert(to.clone(), mapped);
            graph.adjacency.get_mut(&to).unwrap().insert(from, mapped);
            graph.size += 1;
        }

        Ok(graph)
    }

    /// Creates a new graph from a node -> {neighbor -> weight} description,
    /// the shape route configurations are authored in. The description must
    /// already contain both directions of every edge; a missing reverse
    /// entry or a reverse entry with a different weight is rejected, since
    /// the traversal and cost accounting rely on symmetric weights.
    pub fn from_adjacency(
        description: BTreeMap<IndexType, BTreeMap<IndexType, f64>>,
    ) -> Result<Self, GraphError<IndexType>> {
        let mut graph = MapGraph {
            adjacency: BTreeMap::new(),
            size: 0,
        };

        for (from, neighbors) in description.iter() {
            let mut mapped = BTreeMap::new();
            for (to, &weight) in neighbors.iter() {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(GraphError::NonPositiveWeight(
                        (from.clone(), to.clone()),
                        weight,
                    ));
                }

                let reverse = description.get(to).and_then(|back| back.get(from));
                if reverse != Some(&weight) {
                    return Err(GraphError::AsymmetricEdge((from.clone(), to.clone())));
                }

                mapped.insert(to.clone(), R64::from_inner(weight));
                if from <= to {
                    graph.size += 1;
                }
            }
            graph.adjacency.insert(from.clone(), mapped);
        }

        Ok(graph)
    }
}

impl<IndexType> WeightedGraph for MapGraph<IndexType>
where
    IndexType: Clone + Ord + Hash + Debug + Display,
{
    type IndexType = IndexType;

    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn node_ids(&self) -> Vec<IndexType> {
        self.adjacency.keys().cloned().collect()
    }

    fn has_node(&self, id: &IndexType) -> bool {
        self.adjacency.contains_key(id)
    }

    fn iter_neighbors(
        &self,
        id: &IndexType,
    ) -> Result<Box<dyn Iterator<Item = (IndexType, R64)> + '_>, GraphError<IndexType>> {
        match self.adjacency.get(id) {
            Some(neighbors) => Ok(Box::new(
                neighbors.iter().map(|(to, weight)| (to.clone(), *weight)),
            )),
            None => Err(GraphError::MissingNode(id.clone())),
        }
    }

    fn edge_weight(&self, edge: Edge<&IndexType>) -> Result<R64, GraphError<IndexType>> {
        let neighbors = self
            .adjacency
            .get(edge.0)
            .ok_or_else(|| GraphError::MissingNode(edge.0.clone()))?;

        neighbors
            .get(edge.1)
            .copied()
            .ok_or_else(|| GraphError::MissingEdge((edge.0.clone(), edge.1.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_weighted() -> MapGraph<char> {
        MapGraph::new(
            vec!['A', 'B', 'C'],
            vec![('A', 'B', 1.0), ('B', 'C', 2.5)],
        )
        .unwrap()
    }

    #[test]
    fn new_works() {
        let graph = valid_weighted();

        assert_eq!(graph.order(), 3, "Node count is wrong.");
        assert_eq!(graph.size(), 2, "Edge count is wrong.");
        assert!(!graph.is_empty(), "Graph should not be empty.");
        assert_eq!(graph.node_ids(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = valid_weighted();

        assert_eq!(
            graph.edge_weight((&'A', &'B')).unwrap(),
            graph.edge_weight((&'B', &'A')).unwrap(),
            "Reverse edge has a different weight."
        );
    }

    #[test]
    fn neighbors_enumerate_in_id_order() {
        let graph = MapGraph::new(
            vec!['A', 'B', 'C', 'D'],
            vec![('B', 'D', 1.0), ('B', 'A', 1.0), ('B', 'C', 1.0)],
        )
        .unwrap();

        let ids: Vec<char> = graph
            .iter_neighbors(&'B')
            .unwrap()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!['A', 'C', 'D']);
    }

    #[test]
    fn new_errors_on_missing_node() {
        let result = MapGraph::new(vec!['A', 'B'], vec![('A', 'X', 1.0)]);

        assert_eq!(result.unwrap_err(), GraphError::MissingNode('X'));
    }

    #[test]
    fn new_errors_on_duplicate_edge() {
        let result = MapGraph::new(
            vec!['A', 'B'],
            vec![('A', 'B', 1.0), ('B', 'A', 1.0)],
        );

        assert_eq!(result.unwrap_err(), GraphError::DuplicateEdge(('B', 'A')));
    }

    #[test]
    fn new_errors_on_non_positive_weight() {
        let result = MapGraph::new(vec!['A', 'B'], vec![('A', 'B', 0.0)]);

        assert_eq!(
            result.unwrap_err(),
            GraphError::NonPositiveWeight(('A', 'B'), 0.0)
        );
    }

    #[test]
    fn missing_node_lookups_error() {
        let graph = valid_weighted();

        assert!(graph.iter_neighbors(&'X').is_err());
        assert_eq!(
            graph.edge_weight((&'A', &'C')).unwrap_err(),
            GraphError::MissingEdge(('A', 'C'))
        );
    }

    fn adjacency(
        entries: Vec<(char, Vec<(char, f64)>)>,
    ) -> BTreeMap<char, BTreeMap<char, f64>> {
        entries
            .into_iter()
            .map(|(id, neighbors)| (id, neighbors.into_iter().collect()))
            .collect()
    }

    #[test]
    fn from_adjacency_works() {
        let graph = MapGraph::from_adjacency(adjacency(vec![
            ('A', vec![('B', 1.0)]),
            ('B', vec![('A', 1.0), ('C', 1.0)]),
            ('C', vec![('B', 1.0)]),
        ]))
        .unwrap();

        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
        assert_eq!(
            graph.edge_weight((&'B', &'C')).unwrap(),
            R64::from_inner(1.0)
        );
    }

    #[test]
    fn from_adjacency_errors_on_missing_reverse_edge() {
        let result = MapGraph::from_adjacency(adjacency(vec![
            ('A', vec![('B', 1.0)]),
            ('B', vec![]),
        ]));

        assert_eq!(result.unwrap_err(), GraphError::AsymmetricEdge(('A', 'B')));
    }

    #[test]
    fn from_adjacency_errors_on_mismatched_reverse_weight() {
        let result = MapGraph::from_adjacency(adjacency(vec![
            ('A', vec![('B', 1.0)]),
            ('B', vec![('A', 2.0)]),
        ]));

        assert_eq!(result.unwrap_err(), GraphError::AsymmetricEdge(('A', 'B')));
    }
}
