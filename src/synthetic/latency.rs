use std::time::Duration;

/// Which request is being delayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    History,
    Forecast,
}

/// Artificial delay before a response is returned
///
/// Purely a presentation affordance: the generated data does not depend on it.
pub trait LatencyStrategy: Send + Sync {
    fn delay(&self, operation: Operation) -> Duration;
}

/// Respond immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl LatencyStrategy for NoLatency {
    fn delay(&self, _operation: Operation) -> Duration {
        Duration::ZERO
    }
}

/// Fixed per-operation delays that mimic a remote service
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    pub history: Duration,
    pub forecast: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            history: Duration::from_millis(800),
            forecast: Duration::from_millis(1000),
        }
    }
}

impl LatencyStrategy for SimulatedLatency {
    fn delay(&self, operation: Operation) -> Duration {
        match operation {
            Operation::History => self.history,
            Operation::Forecast => self.forecast,
        }
    }
}

/// Suspend the current task for the strategy's delay without blocking others
pub async fn simulate(strategy: &dyn LatencyStrategy, operation: Operation) {
    let delay = strategy.delay(operation);
    if delay.is_zero() {
        return;
    }
    tracing::trace!(?operation, delay_ms = delay.as_millis() as u64, "Simulating latency");
    tokio::time::sleep(delay).await;
}
