use crate::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{error, info};

/// Timing handle for one service operation; closing it records metrics.
#[derive(Debug)]
pub struct OperationContext {
    name: &'static str,
    method: Method,
    start_time: Instant,
}

impl OperationContext {
    pub fn start(name: &'static str, method: Method) -> Self {
        info!("Starting operation: {name}");

        Self {
            name,
            method,
            start_time: Instant::now(),
        }
    }

    pub fn success(self, metrics: &Metrics, message: &str) {
        info!("Operation {} completed successfully: {message}", self.name);
        self.complete(metrics, Status::Success);
    }

    pub fn error(self, metrics: &Metrics, message: &str) {
        error!("Operation {} failed: {message}", self.name);
        self.complete(metrics, Status::Error);
    }

    fn complete(self, metrics: &Metrics, status: Status) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        metrics.record(self.method, status, elapsed);
    }
}
