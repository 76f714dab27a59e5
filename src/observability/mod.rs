pub mod error_tracking;

use std::sync::atomic::{AtomicU64, Ordering};

/// Which proximity endpoint served a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityQuery {
    NearestOne,
    NearestWithin,
}

/// Process-wide counters rendered in the Prometheus text format.
#[derive(Default)]
pub struct AppMetrics {
    request_count: AtomicU64,
    server_error_count: AtomicU64,
    client_error_count: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_count: AtomicU64,
    locations_inserted: AtomicU64,
    nearest_one_queries: AtomicU64,
    nearest_within_queries: AtomicU64,
    empty_results: AtomicU64,
}

impl AppMetrics {
    pub fn record_request(&self, status: u16, latency_ms: u64) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        match status {
            500.. => {
                self.server_error_count.fetch_add(1, Ordering::Relaxed);
            }
            400..=499 => {
                self.client_error_count.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
        self.latency_total_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locations_inserted(&self, count: u64) {
        self.locations_inserted.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_proximity_query(&self, kind: ProximityQuery, matched: usize) {
        let counter = match kind {
            ProximityQuery::NearestOne => &self.nearest_one_queries,
            ProximityQuery::NearestWithin => &self.nearest_within_queries,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        if matched == 0 {
            self.empty_results.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn render_prometheus(&self, db_size: u32, db_idle: usize) -> String {
        let count = self.latency_count.load(Ordering::Relaxed).max(1);
        let avg_latency = self.latency_total_ms.load(Ordering::Relaxed) as f64 / count as f64;

        format!(
            concat!(
                "# TYPE http_requests_total counter\n",
                "http_requests_total {}\n",
                "# TYPE http_error_total counter\n",
                "http_error_total {}\n",
                "# TYPE http_client_error_total counter\n",
                "http_client_error_total {}\n",
                "# TYPE http_latency_avg_ms gauge\n",
                "http_latency_avg_ms {:.2}\n",
                "# TYPE locations_inserted_total counter\n",
                "locations_inserted_total {}\n",
                "# TYPE proximity_queries_total counter\n",
                "proximity_queries_total{{kind=\"nearest_one\"}} {}\n",
                "proximity_queries_total{{kind=\"nearest_within\"}} {}\n",
                "# TYPE proximity_empty_results_total counter\n",
                "proximity_empty_results_total {}\n",
                "# TYPE db_pool_size gauge\n",
                "db_pool_size {}\n",
                "# TYPE db_pool_idle gauge\n",
                "db_pool_idle {}\n",
            ),
            self.request_count.load(Ordering::Relaxed),
            self.server_error_count.load(Ordering::Relaxed),
            self.client_error_count.load(Ordering::Relaxed),
            avg_latency,
            self.locations_inserted.load(Ordering::Relaxed),
            self.nearest_one_queries.load(Ordering::Relaxed),
            self.nearest_within_queries.load(Ordering::Relaxed),
            self.empty_results.load(Ordering::Relaxed),
            db_size,
            db_idle,
        )
    }
}
