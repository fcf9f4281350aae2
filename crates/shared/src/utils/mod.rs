mod logs;
mod metrics;
mod otel;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::otel::TracingContext;
