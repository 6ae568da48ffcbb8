use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Central metrics registry for the key service
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Derivation Metrics
    pub derivations_total: CounterVec,
    pub derivation_duration_seconds: HistogramVec,

    // SS58 Metrics
    pub ss58_operations_total: CounterVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        // HTTP Metrics
        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace("keys"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace("keys")
                .buckets(vec![0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        // Derivation Metrics
        let derivations_total = CounterVec::new(
            Opts::new("derivations_total", "Total key derivations").namespace("keys"),
            &["curve", "outcome"],
        )?;
        registry.register(Box::new(derivations_total.clone()))?;

        let derivation_duration_seconds = HistogramVec::new(
            HistogramOpts::new("derivation_duration_seconds", "Key derivation duration")
                .namespace("keys")
                .buckets(vec![0.0001, 0.00025, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.05]),
            &["curve"],
        )?;
        registry.register(Box::new(derivation_duration_seconds.clone()))?;

        // SS58 Metrics
        let ss58_operations_total = CounterVec::new(
            Opts::new("ss58_operations_total", "Total SS58 encode/decode operations")
                .namespace("keys"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(ss58_operations_total.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            derivations_total,
            derivation_duration_seconds,
            ss58_operations_total,
        }))
    }

    /// Record one derivation; `outcome` is `ok` or an error kind.
    pub fn record_derivation(&self, curve: &str, outcome: &str, duration_secs: f64) {
        self.derivations_total
            .with_label_values(&[curve, outcome])
            .inc();
        self.derivation_duration_seconds
            .with_label_values(&[curve])
            .observe(duration_secs);
    }

    pub fn record_ss58(&self, operation: &str, outcome: &str) {
        self.ss58_operations_total
            .with_label_values(&[operation, outcome])
            .inc();
    }

    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
