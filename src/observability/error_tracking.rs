use tracing::error;
use uuid::Uuid;

/// Logs an unexpected server failure under a fresh event id so it can be
/// correlated with the request log. Statuses below 500 are ignored.
pub fn capture_unexpected_5xx(
    path: &str,
    method: &str,
    status: u16,
    request_id: &str,
) -> Option<Uuid> {
    if status < 500 {
        return None;
    }

    let event_id = Uuid::new_v4();
    error!(
        tracking_backend = "log",
        event_id = %event_id,
        request_id = %request_id,
        method = %method,
        path = %path,
        status = status,
        "error-tracking capture for unexpected 5xx"
    );
    Some(event_id)
}
