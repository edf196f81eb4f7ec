use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: hotels created.
pub const HOTELS_CREATED_TOTAL: &str = "innkeep_hotels_created_total";

/// Counter: bookings committed.
pub const BOOKINGS_TOTAL: &str = "innkeep_bookings_total";

/// Counter: booking attempts rejected by an occupancy conflict.
pub const BOOKING_CONFLICTS_TOTAL: &str = "innkeep_booking_conflicts_total";

/// Counter: availability queries served.
pub const AVAILABILITY_QUERIES_TOTAL: &str = "innkeep_availability_queries_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Histogram: WAL group-commit flush duration in seconds.
pub const WAL_FLUSH_DURATION_SECONDS: &str = "innkeep_wal_flush_duration_seconds";

/// Histogram: WAL group-commit batch size (events per flush).
pub const WAL_FLUSH_BATCH_SIZE: &str = "innkeep_wal_flush_batch_size";

/// Install the Prometheus metrics exporter on the given port. No-op if
/// port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Install the default fmt tracing subscriber. Embedding applications
/// that bring their own subscriber skip this.
pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}
