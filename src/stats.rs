use lazy_static::lazy_static;
use metrics::{counter, histogram, Counter, Histogram};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub validator_creations: Counter,

    // The number of country specs in the registry of each validator created
    pub registry_size: Histogram,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            validator_creations: counter!("validator.creations"),
            registry_size: histogram!("validator.registry_size"),
        }
    }
}
