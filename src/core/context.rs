// src/core/context.rs

use std::sync::Arc;

use super::primitives::{DEFAULT_PAGE_SIZE, SawWeighting};
use crate::motor::MotorRepository;

/// Everything an operation needs besides its own input.
///
/// Cheap to clone; the repository is shared read-only and nothing in here is
/// mutated per request.
#[derive(Clone)]
pub struct OpContext {
    pub records: Arc<dyn MotorRepository>,
    pub saw_weighting: SawWeighting,
    pub default_page_size: i64,
}

impl OpContext {
    pub fn new(records: Arc<dyn MotorRepository>) -> Self {
        Self {
            records,
            saw_weighting: SawWeighting::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_saw_weighting(mut self, saw_weighting: SawWeighting) -> Self {
        self.saw_weighting = saw_weighting;
        self
    }

    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }
}
