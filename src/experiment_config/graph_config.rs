use crate::experiment_config::ExperimentConfigError;
use crate::graph::MapGraph;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Road network as authored in config files: node -> {neighbor -> distance},
/// with both directions of every road spelled out.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GraphConfig {
    pub nodes: BTreeMap<String, BTreeMap<String, f64>>,
}

impl GraphConfig {
    pub fn to_graph(&self) -> Result<MapGraph<String>, ExperimentConfigError> {
        MapGraph::from_adjacency(self.nodes.clone())
            .map_err(|err| ExperimentConfigError::InvalidGraph(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn to_graph_builds_the_described_network() {
        let config: GraphConfig = serde_yaml::from_str(
            "nodes:\n  A: {B: 0.5}\n  B: {A: 0.5}\n",
        )
        .unwrap();

        let graph = config.to_graph().unwrap();

        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn to_graph_rejects_asymmetric_networks() {
        let config: GraphConfig = serde_yaml::from_str(
            "nodes:\n  A: {B: 0.5}\n  B: {A: 0.7}\n",
        )
        .unwrap();

        assert!(config.to_graph().is_err());
    }
}
