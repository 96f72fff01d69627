mod algo_config;
mod graph_config;
mod request_config;

pub use algo_config::{AcoExperiment, AlgoConfig, UnseededAcoExperiment};
pub use graph_config::GraphConfig;
pub use request_config::RequestConfig;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Completes a config variant that omits optional values into the full one.
pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

/// Everything one routing run needs: the algorithm parameters, the road
/// graph and the ordered list of lorry requests.
#[derive(Deserialize, Serialize, Debug)]
pub struct ExperimentConfig {
    pub algorithm: AlgoConfig,
    pub graph: GraphConfig,
    pub requests: Vec<RequestConfig>,
    /// Base path for per-request colony stats csv files. Stats go to stderr
    /// when unset.
    #[serde(default)]
    pub stats_path: Option<String>,
}

impl ExperimentConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ExperimentConfigError> {
        serde_yaml::from_str(raw)
            .map_err(|err| ExperimentConfigError::InvalidConfig(err.to_string()))
    }

    pub fn from_ron_str(raw: &str) -> Result<Self, ExperimentConfigError> {
        ron::de::from_str(raw)
            .map_err(|err| ExperimentConfigError::InvalidConfig(err.to_string()))
    }

    /// Loads a config file, choosing the format by file extension.
    pub fn from_file(path: &Path) -> Result<Self, ExperimentConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|err| ExperimentConfigError::Io(format!("{}: {}", path.display(), err)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            Some("ron") => Self::from_ron_str(&raw),
            other => Err(ExperimentConfigError::UnknownFormat(
                other.unwrap_or("").to_string(),
            )),
        }
    }
}

#[derive(Debug)]
pub enum ExperimentConfigError {
    Io(String),
    InvalidConfig(String),
    UnknownFormat(String),
    InvalidGraph(String),
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "{}", msg),
            Self::InvalidConfig(msg) => write!(f, "Config is not valid: {}", msg),
            Self::UnknownFormat(ext) => {
                write!(f, "Unknown config format \"{}\", expected yaml or ron.", ext)
            }
            Self::InvalidGraph(msg) => write!(f, "Graph config is not valid: {}", msg),
        }
    }
}

impl Error for ExperimentConfigError {}
