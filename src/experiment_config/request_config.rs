use crate::metaheuristic::RouteRequest;

use serde::{Deserialize, Serialize};

/// One lorry's trip as authored in config files.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RequestConfig {
    pub start: String,
    pub goal: String,
}

impl From<&RequestConfig> for RouteRequest<String> {
    fn from(config: &RequestConfig) -> Self {
        RouteRequest::new(config.start.clone(), config.goal.clone())
    }
}
