pub mod get_metrics;

pub use get_metrics::{get_metrics, get_metrics_json};
