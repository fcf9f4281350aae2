use opentelemetry::Context;
use tokio::time::Instant;

/// Span context of one service operation plus the instant it started.
pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}
