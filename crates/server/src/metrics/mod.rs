pub mod middleware;
pub mod registry;

pub use middleware::{MessageMetrics, MetricsRecorder, metrics_middleware};
pub use registry::{gather_metric_families, gather_metrics, init};
