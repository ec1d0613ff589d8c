use axum::{Json, http::StatusCode, response::IntoResponse};
use prometheus::proto::MetricFamily;
use serde_json::{Value, json};

/// Prometheus text exposition of the service registry.
pub async fn get_metrics() -> impl IntoResponse {
    match crate::metrics::gather_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            metrics,
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {}", err),
        )
            .into_response(),
    }
}

/// The same registry contents rendered as JSON, for dashboards that do
/// not speak the text exposition format.
pub async fn get_metrics_json() -> impl IntoResponse {
    match crate::metrics::gather_metric_families() {
        Ok(families) => {
            let rendered: Vec<Value> = families.iter().map(render_family).collect();
            (StatusCode::OK, Json(rendered)).into_response()
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {}", err),
        )
            .into_response(),
    }
}

fn render_family(family: &MetricFamily) -> Value {
    let metrics: Vec<Value> = family
        .get_metric()
        .iter()
        .map(|metric| {
            let labels: Vec<Value> = metric
                .get_label()
                .iter()
                .map(|label| json!({ "name": label.get_name(), "value": label.get_value() }))
                .collect();

            let value = if metric.has_counter() {
                json!(metric.get_counter().get_value())
            } else if metric.has_histogram() {
                let histogram = metric.get_histogram();
                json!({
                    "sample_count": histogram.get_sample_count(),
                    "sample_sum": histogram.get_sample_sum(),
                })
            } else {
                Value::Null
            };

            json!({ "labels": labels, "value": value })
        })
        .collect();

    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{CounterVec, Histogram, HistogramOpts, Opts, Registry};

    #[test]
    fn test_render_counter_family() {
        let registry = Registry::new();
        let counter = CounterVec::new(
            Opts::new("tx_messages_decoded", "Messages decoded"),
            &["network", "message_type"],
        )
        .unwrap();
        registry.register(Box::new(counter.clone())).unwrap();
        counter.with_label_values(&["COSMOS", "MsgSend"]).inc();

        let families = registry.gather();
        let rendered = render_family(&families[0]);

        assert_eq!(rendered["name"], "tx_messages_decoded");
        assert_eq!(rendered["type"], "COUNTER");
        assert_eq!(rendered["metrics"][0]["value"], 1.0);
        let labels = rendered["metrics"][0]["labels"].as_array().unwrap();
        assert!(labels.iter().any(|label| label["value"] == "MsgSend"));
    }

    #[test]
    fn test_render_histogram_family() {
        let registry = Registry::new();
        let histogram = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "Request durations",
        ))
        .unwrap();
        registry.register(Box::new(histogram.clone())).unwrap();
        histogram.observe(0.25);
        histogram.observe(0.75);

        let families = registry.gather();
        let rendered = render_family(&families[0]);

        assert_eq!(rendered["type"], "HISTOGRAM");
        assert_eq!(rendered["metrics"][0]["value"]["sample_count"], 2);
        assert_eq!(rendered["metrics"][0]["value"]["sample_sum"], 1.0);
    }
}
