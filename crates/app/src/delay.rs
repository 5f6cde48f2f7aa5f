use std::time::Duration;

/// Suspend the calling task for `ms` milliseconds. Zero returns immediately.
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    let duration = Duration::from_millis(ms);

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_requested_time() {
        let started = tokio::time::Instant::now();
        sleep_ms(1000).await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_returns_without_advancing() {
        let started = tokio::time::Instant::now();
        sleep_ms(0).await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
