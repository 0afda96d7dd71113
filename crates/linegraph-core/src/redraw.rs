// File: crates/linegraph-core/src/redraw.rs
// Summary: Hook through which a graph asks its hosting container to repaint soon.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Implemented by the hosting container. Must be cheap and must not paint re-entrantly:
/// record the request and repaint later from the host's own loop.
pub trait RedrawRequester: Send + Sync {
    fn request_redraw(&self);
}

/// Ignores every request; for headless use where the caller renders explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRedraw;

impl RedrawRequester for NoRedraw {
    fn request_redraw(&self) {}
}

/// Coalescing flag: any number of requests collapse into one pending redraw.
#[derive(Debug, Default)]
pub struct RedrawFlag {
    pending: AtomicBool,
    requests: AtomicU64,
}

impl RedrawFlag {
    pub fn new() -> Self { Self::default() }

    /// Clear and return the pending state. A host's paint loop calls this once per tick.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Total requests received, coalesced or not.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

impl RedrawRequester for RedrawFlag {
    fn request_redraw(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_coalesce_until_taken() {
        let flag = RedrawFlag::new();
        assert!(!flag.take());
        flag.request_redraw();
        flag.request_redraw();
        assert!(flag.is_pending());
        assert!(flag.take());
        assert!(!flag.take());
        assert_eq!(flag.request_count(), 2);
    }
}
