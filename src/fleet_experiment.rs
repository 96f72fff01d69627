use crate::experiment_config::{ExperimentConfig, ExperimentConfigError};
use crate::graph::GraphError;
use crate::metaheuristic::aco::{Params, Route, Supervisor};
use crate::metaheuristic::{Fleet, RouteRequest};

use csv::Writer;
use std::collections::VecDeque;
use std::fs::File;
use std::path::Path;

/// Outcome of one configured lorry request, numbered in input order.
#[derive(Debug)]
pub struct LorryRoute {
    pub lorry: usize,
    pub outcome: Result<Option<Route<String>>, GraphError<String>>,
}

/// Config-driven entry point: builds the graph, runs every configured
/// request through one fleet and hands the outcomes back in input order.
pub struct FleetExperiment;

impl FleetExperiment {
    pub fn run_config_file(path: &Path) -> Result<Vec<LorryRoute>, ExperimentConfigError> {
        let config = ExperimentConfig::from_file(path)?;
        Self::run_config(&config)
    }

    pub fn run_config(
        config: &ExperimentConfig,
    ) -> Result<Vec<LorryRoute>, ExperimentConfigError> {
        let graph = config.graph.to_graph()?;
        let params = Params::from(config.algorithm.cfg());
        let requests: Vec<RouteRequest<String>> =
            config.requests.iter().map(RouteRequest::from).collect();
        let mut fleet = Fleet::new(&graph, params);

        let outcomes = match &config.stats_path {
            Some(base) => {
                let mut writers: VecDeque<Writer<File>> = VecDeque::new();
                for index in 0..requests.len() {
                    let filename = format!("{}-{}.csv", base, index + 1);
                    let file = File::create(&filename).map_err(|err| {
                        ExperimentConfigError::Io(format!("{}: {}", filename, err))
                    })?;
                    writers.push_back(Writer::from_writer(file));
                }

                fleet.route_all_with(&requests, |_| {
                    Supervisor::new(writers.pop_front().expect("one stats writer per request"))
                })
            }
            None => fleet.route_all(&requests),
        };

        Ok(outcomes
            .into_iter()
            .enumerate()
            .map(|(index, outcome)| LorryRoute {
                lorry: index + 1,
                outcome,
            })
            .collect())
    }
}
