use std::sync::atomic::{AtomicU64, Ordering};

/// Write counters. All updates are `Relaxed`: these are observability
/// numbers, a snapshot may tear across fields.
#[derive(Debug, Default)]
pub struct BridgeStats {
    chunks: AtomicU64,
    bytes: AtomicU64,
    records_emitted: AtomicU64,
    parse_errors: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub chunks: u64,
    pub bytes: u64,
    pub records_emitted: u64,
    pub parse_errors: u64,
}

impl BridgeStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_chunk(&self, len: usize) {
        self.chunks.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(len as u64, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_emit(&self) {
        self.records_emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_parse_error(&self) {
        self.parse_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            chunks: self.chunks.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
            records_emitted: self.records_emitted.load(Ordering::Relaxed),
            parse_errors: self.parse_errors.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = BridgeStats::new();
        stats.record_chunk(10);
        stats.record_chunk(5);
        stats.record_emit();
        stats.record_parse_error();

        let snap = stats.snapshot();
        assert_eq!(snap.chunks, 2);
        assert_eq!(snap.bytes, 15);
        assert_eq!(snap.records_emitted, 1);
        assert_eq!(snap.parse_errors, 1);
    }

    #[test]
    fn test_concurrent_updates() {
        use std::sync::Arc;
        use std::thread;

        let stats = Arc::new(BridgeStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_emit();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.snapshot().records_emitted, 4000);
    }
}
