use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::metaheuristic::aco::Params;
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug)]
pub struct AcoExperiment {
    pub alpha: f64,
    pub beta: f64,
    pub q: f64,
    pub rho: f64,
    pub seed: u64,
    pub ant_count: usize,
    pub iterations: usize,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug)]
pub struct UnseededAcoExperiment {
    pub alpha: f64,
    pub beta: f64,
    pub q: f64,
    pub rho: f64,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Fix<AcoExperiment> for UnseededAcoExperiment {
    fn to_fixed(&self) -> AcoExperiment {
        AcoExperiment {
            alpha: self.alpha,
            beta: self.beta,
            q: self.q,
            rho: self.rho,
            ant_count: self.ant_count,
            iterations: self.iterations,
            seed: (os_random_seed() >> 64) as u64,
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum AlgoConfig {
    Seeded(AcoExperiment),
    Unseeded(UnseededAcoExperiment),
}

impl AlgoConfig {
    pub fn cfg(&self) -> AcoExperiment {
        match self {
            Self::Seeded(cfg) => *cfg,
            Self::Unseeded(cfg) => cfg.to_fixed(),
        }
    }
}

impl From<AcoExperiment> for Params {
    fn from(cfg: AcoExperiment) -> Self {
        Params::new(
            cfg.alpha,
            cfg.beta,
            cfg.q,
            cfg.rho,
            Some(cfg.seed as u128),
            cfg.ant_count,
            cfg.iterations,
        )
    }
}
