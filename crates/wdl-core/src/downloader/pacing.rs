//! Politeness delay between sequential requests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::config::PacingConfig;

/// Called before every request except the first.
pub trait Pacer {
    fn pause(&mut self);
}

/// Requests back to back.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

/// Sleeps a uniform random duration in `[0, max)`.
#[derive(Debug)]
pub struct RandomDelay {
    max_secs: f64,
    rng: StdRng,
}

impl RandomDelay {
    pub fn new(max_secs: f64) -> Self {
        Self {
            max_secs,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic delays, for tests.
    pub fn with_seed(max_secs: f64, seed: u64) -> Self {
        Self {
            max_secs,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next delay to sleep; zero when the bound is not a positive number.
    pub fn next_delay(&mut self) -> Duration {
        if !self.max_secs.is_finite() || self.max_secs <= 0.0 {
            return Duration::ZERO;
        }
        let secs = self.rng.gen_range(0.0..self.max_secs);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl Pacer for RandomDelay {
    fn pause(&mut self) {
        let delay = self.next_delay();
        tracing::debug!("pacing: sleeping {:?}", delay);
        std::thread::sleep(delay);
    }
}

/// Pacer selected by the `[pacing]` config section.
pub fn from_config(cfg: &PacingConfig) -> Box<dyn Pacer> {
    if cfg.enabled {
        Box::new(RandomDelay::new(cfg.max_delay_secs))
    } else {
        Box::new(NoDelay)
    }
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self) {
        (**self).pause()
    }
}
