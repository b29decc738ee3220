use std::time::Duration;

/// Completes after `ms` milliseconds (zero when omitted). Dropping the future is the only way out.
pub async fn delay(ms: Option<u64>) {
    tokio::time::sleep(Duration::from_millis(ms.unwrap_or(0))).await;
}
