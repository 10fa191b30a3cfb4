// src/state.rs
// Shared axum state: the record source plus ranking settings

use std::sync::Arc;

use crate::core::OpContext;
use crate::core::primitives::SawWeighting;
use crate::motor::MotorRepository;

#[derive(Clone)]
pub struct AppState {
    pub ctx: OpContext,
}

impl AppState {
    pub fn new(records: Arc<dyn MotorRepository>) -> Self {
        Self {
            ctx: OpContext::new(records),
        }
    }

    pub fn with_saw_weighting(mut self, saw_weighting: SawWeighting) -> Self {
        self.ctx = self.ctx.with_saw_weighting(saw_weighting);
        self
    }

    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.ctx = self.ctx.with_default_page_size(page_size);
        self
    }
}
