//! Test oracle that records how often it is asked

use super::{DictionaryOracle, Verdict};
use rustc_hash::FxHashSet;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) struct CountingOracle {
    words: FxHashSet<String>,
    calls: AtomicUsize,
    failures_left: AtomicUsize,
    delay: Option<Duration>,
}

impl CountingOracle {
    pub(crate) fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
            calls: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Answer `Unavailable` for the first `n` calls
    pub(crate) fn failing_first(self, n: usize) -> Self {
        self.failures_left.store(n, Ordering::SeqCst);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DictionaryOracle for CountingOracle {
    fn lookup(&self, word: &str) -> impl Future<Output = Verdict> + Send {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let failing = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();

            if failing {
                Verdict::Unavailable("simulated outage".to_string())
            } else if self.words.contains(word) {
                Verdict::Found
            } else {
                Verdict::NotFound
            }
        }
    }
}
