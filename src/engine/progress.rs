//! Progress reporting for long compress/decompress calls.
//!
//! A [`Progress`] sink receives integer percentages. The engine promises
//! strictly increasing values below 100 while it works, then exactly one 100
//! when the call succeeds. Reports are advisory: output never depends on them.

/// Receiver of progress percentages (0..=100).
pub trait Progress {
    fn report(&mut self, percent: u8);
}

impl<F: FnMut(u8)> Progress for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Sink that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Turns item indices into throttled percentage reports.
pub(crate) struct ProgressTracker<'a, P: Progress + ?Sized> {
    sink: &'a mut P,
    step: u8,
    total: u64,
    next_threshold: u8,
}

impl<'a, P: Progress + ?Sized> ProgressTracker<'a, P> {
    pub(crate) fn new(sink: &'a mut P, step: u8, total: usize) -> Self {
        Self {
            sink,
            step: step.max(1),
            total: total as u64,
            next_threshold: 0,
        }
    }

    /// Called before processing item `done` (0-based).
    pub(crate) fn advance(&mut self, done: usize) {
        if self.total == 0 {
            return;
        }
        let percent = (done as u64 * 100 / self.total) as u8;
        if percent >= self.next_threshold && percent < 100 {
            self.sink.report(percent);
            self.next_threshold = percent.saturating_add(self.step);
        }
    }

    pub(crate) fn finish(self) {
        self.sink.report(100);
    }
}
