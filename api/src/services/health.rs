// Health check service implementation

use crate::handlers::AppState;

pub struct HealthChecker<'a> {
    state: &'a AppState,
}

impl<'a> HealthChecker<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Healthy while the asset loader worker still accepts jobs
    pub fn check(&self) -> bool {
        self.state.asset_loader_queue.is_open()
    }
}
