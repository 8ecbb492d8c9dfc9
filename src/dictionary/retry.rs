//! Timeout and retry around a dictionary oracle

use super::{DictionaryOracle, Verdict};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// How patiently to wait for an oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OracleConfig {
    /// Per-call deadline in milliseconds
    pub timeout_ms: u64,
    /// Extra attempts after an `Unavailable` answer
    pub retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            retries: 2,
            retry_delay_ms: 250,
        }
    }
}

/// Wraps an oracle so slow calls become `Unavailable` and `Unavailable`
/// answers are retried
///
/// `NotFound` is final and never retried.
#[derive(Debug, Clone)]
pub struct RetryingOracle<O> {
    inner: O,
    config: OracleConfig,
}

impl<O: DictionaryOracle> RetryingOracle<O> {
    pub const fn new(inner: O, config: OracleConfig) -> Self {
        Self { inner, config }
    }

    pub const fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: DictionaryOracle> DictionaryOracle for RetryingOracle<O> {
    fn lookup(&self, word: &str) -> impl Future<Output = Verdict> + Send {
        async move {
            let timeout = Duration::from_millis(self.config.timeout_ms);
            let delay = Duration::from_millis(self.config.retry_delay_ms);
            let mut retries_left = self.config.retries;

            loop {
                let verdict = tokio::time::timeout(timeout, self.inner.lookup(word))
                    .await
                    .unwrap_or_else(|_| {
                        Verdict::Unavailable(format!(
                            "lookup timed out after {} ms",
                            self.config.timeout_ms
                        ))
                    });

                match verdict {
                    Verdict::Unavailable(reason) if retries_left > 0 => {
                        retries_left -= 1;
                        tracing::warn!(word, %reason, retries_left, "dictionary unavailable, retrying");
                        tokio::time::sleep(delay).await;
                    }
                    other => return other,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::testing::CountingOracle;

    fn quick(retries: u32) -> OracleConfig {
        OracleConfig {
            timeout_ms: 50,
            retries,
            retry_delay_ms: 1,
        }
    }

    #[tokio::test]
    async fn found_passes_through() {
        let oracle = RetryingOracle::new(CountingOracle::new(["moist"]), quick(2));

        assert_eq!(oracle.lookup("moist").await, Verdict::Found);
        assert_eq!(oracle.inner().calls(), 1);
    }

    #[tokio::test]
    async fn not_found_is_not_retried() {
        let oracle = RetryingOracle::new(CountingOracle::new(["moist"]), quick(3));

        assert_eq!(oracle.lookup("mist").await, Verdict::NotFound);
        assert_eq!(oracle.inner().calls(), 1);
    }

    #[tokio::test]
    async fn unavailable_is_retried_until_success() {
        let inner = CountingOracle::new(["moist"]).failing_first(2);
        let oracle = RetryingOracle::new(inner, quick(2));

        assert_eq!(oracle.lookup("moist").await, Verdict::Found);
        assert_eq!(oracle.inner().calls(), 3);
    }

    #[tokio::test]
    async fn retries_run_out() {
        let inner = CountingOracle::new(["moist"]).failing_first(5);
        let oracle = RetryingOracle::new(inner, quick(1));

        assert!(matches!(
            oracle.lookup("moist").await,
            Verdict::Unavailable(_)
        ));
        assert_eq!(oracle.inner().calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_oracle_times_out() {
        let inner = CountingOracle::new(["moist"]).with_delay(Duration::from_secs(10));
        let oracle = RetryingOracle::new(inner, quick(0));

        let verdict = oracle.lookup("moist").await;
        assert_eq!(
            verdict,
            Verdict::Unavailable("lookup timed out after 50 ms".to_string())
        );
    }
}
