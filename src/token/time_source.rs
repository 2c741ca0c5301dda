//! Sorgente del tempo corrente usata da issuer e verifier

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Fornisce l'istante corrente in secondi Unix
pub trait TimeSource: Send + Sync {
    fn now(&self) -> i64;
}

/// Orologio di sistema
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Orologio controllabile manualmente, pensato per i test
#[derive(Debug)]
pub struct StubTimeSource {
    now: AtomicI64,
}

impl StubTimeSource {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl TimeSource for StubTimeSource {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_time_source() {
        let time = StubTimeSource::new(100);
        assert_eq!(time.now(), 100);

        time.advance(50);
        assert_eq!(time.now(), 150);

        time.set(10);
        assert_eq!(time.now(), 10);
    }

    #[test]
    fn test_system_time_source_is_after_2020() {
        assert!(SystemTimeSource.now() > 1_577_836_800);
    }
}
