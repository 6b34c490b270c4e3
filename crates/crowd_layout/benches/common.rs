#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use crowd_layout::prelude::*;

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// Stage area the app places crowds in.
pub const STAGE: PlacementBounds = PlacementBounds {
    x_min: 5.0,
    x_max: 92.0,
    y_min: 15.0,
    y_max: 85.0,
};

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

pub fn entities(n: usize) -> Vec<Entity> {
    (0..n)
        .map(|i| Entity::new(format!("user-{i}"), format!("User {i}")))
        .collect()
}

/// `k` outcomes with uneven weights, some of them zero.
pub fn outcomes(k: usize) -> Vec<Outcome> {
    (0..k)
        .map(|i| Outcome::new(format!("o{i}"), (i * 7 % 11) as f64))
        .collect()
}
