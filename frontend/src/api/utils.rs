use log::warn;
use std::future::Future;

/// Extracts a user-readable message from a non-2xx response, preferring
/// the backend's own error body over the bare status code. The admin API
/// reports errors under `error` while the company report uses `message`,
/// so both keys are tried.
pub async fn error_message(response: gloo_net::http::Response) -> String {
    let fallback = format!("Request failed with status {}", response.status());
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .or_else(|| body.get("message"))
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// Runs an async operation up to `attempts` times with linear backoff: one
/// second after the first failure, two after the second, and so on. The
/// last error is returned when every attempt fails.
pub async fn with_retries<T, F, Fut>(attempts: u32, mut operation: F) -> Result<T, String>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let mut last_error = "No attempts were made".to_string();
    for attempt in 1..=attempts {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Attempt {} of {} failed: {}", attempt, attempts, e);
                last_error = e;
                if attempt < attempts {
                    delay_ms(1_000 * attempt).await;
                }
            }
        }
    }
    Err(last_error)
}

#[cfg(target_arch = "wasm32")]
async fn delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Browser timers are unavailable off-wasm; native tests exercise the retry
// logic without the waits
#[cfg(not(target_arch = "wasm32"))]
async fn delay_ms(_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_succeeds_after_two_failures() {
        let calls = Cell::new(0u32);
        let result = block_on(with_retries(3, |attempt| {
            calls.set(calls.get() + 1);
            let outcome = if attempt < 3 {
                Err(format!("failure {}", attempt))
            } else {
                Ok("payload".to_string())
            };
            async move { outcome }
        }));
        assert_eq!(result, Ok("payload".to_string()));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_first_success_short_circuits() {
        let calls = Cell::new(0u32);
        let result = block_on(with_retries(3, |_| {
            calls.set(calls.get() + 1);
            async { Ok(42) }
        }));
        assert_eq!(result, Ok(42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_exhausted_attempts_return_last_error() {
        let result: Result<(), String> = block_on(with_retries(3, |attempt| async move {
            Err(format!("failure {}", attempt))
        }));
        assert_eq!(result, Err("failure 3".to_string()));
    }
}
