// framefix-core/src/external/mocks.rs

// --- Fake probers for tests ---

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::AspectRatioProber;
use crate::error::{CoreError, CoreResult};
use crate::processing::aspect::DisplayAspectRatio;

/// Always answers with the same ratio.
#[derive(Debug, Clone, Copy)]
pub struct StaticProber {
    ratio: f64,
}

impl StaticProber {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }
}

impl AspectRatioProber for StaticProber {
    fn name(&self) -> &'static str {
        "static"
    }

    fn probe(&self, _input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        DisplayAspectRatio::new(self.ratio)
    }
}

/// Always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingProber {
    message: String,
}

impl FailingProber {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AspectRatioProber for FailingProber {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn probe(&self, _input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        Err(CoreError::AspectRatioParse(self.message.clone()))
    }
}

/// Wraps another prober and counts how often it is asked.
#[derive(Debug, Default)]
pub struct CountingProber<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> CountingProber<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P: AspectRatioProber> AspectRatioProber for CountingProber<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn probe(&self, input_path: &Path) -> CoreResult<DisplayAspectRatio> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.probe(input_path)
    }
}
