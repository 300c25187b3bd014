use tracing::debug;

/// Receives row-level progress events from a running filter.
pub trait ProgressSink {
    fn row_filtered(&mut self, row: usize, total_rows: usize);
}

/// Sink that drops every event.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn row_filtered(&mut self, _row: usize, _total_rows: usize) {}
}

/// Sink that logs every `every`-th row through `tracing`.
pub struct TracingProgress {
    every: usize,
}

impl TracingProgress {
    pub const DEFAULT_EVERY: usize = 50;

    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for TracingProgress {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EVERY)
    }
}

impl ProgressSink for TracingProgress {
    fn row_filtered(&mut self, row: usize, total_rows: usize) {
        if row % self.every == 0 {
            debug!("Processed {}/{} rows", row, total_rows);
        }
    }
}
