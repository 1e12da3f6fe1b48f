mod gracefull;
mod logs;
mod metrics;
mod otel;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::otel::{ServiceTracer, TracingContext};
