use crate::rng::os_random_seed;

#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub alpha: f64,
    pub beta: f64,
    pub q: f64,
    pub rho: f64,
    pub seed: u128,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Params {
    pub fn new(
        alpha: f64,
        beta: f64,
        q: f64,
        rho: f64,
        seed: Option<u128>,
        ant_count: usize,
        iterations: usize,
    ) -> Self {
        Params {
            alpha,
            beta,
            q,
            rho,
            seed: seed.unwrap_or_else(os_random_seed),
            ant_count,
            iterations,
        }
    }

    pub fn with_seed(&self, seed: u128) -> Self {
        Params { seed, ..*self }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new(1.0, 2.0, 100.0, 0.05, None, 10, 100)
    }
}
