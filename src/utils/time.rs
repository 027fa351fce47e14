use rand::Rng;
use std::time::Duration;

/// Sleeps `base_ms` plus up to `jitter_ms`; a zero budget returns immediately.
pub async fn sleep_with_jitter(base_ms: u64, jitter_ms: u64) {
    if base_ms == 0 && jitter_ms == 0 {
        return;
    }
    let jitter = rand::rng().random_range(0..=jitter_ms);
    tokio::time::sleep(Duration::from_millis(base_ms + jitter)).await;
}
