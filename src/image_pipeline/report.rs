//! Run reporting: progress events while filtering and the cumulative
//! comparison log on disk.

mod log;
mod progress;

pub use log::{ComparisonLog, LogRow};

pub use progress::{NullProgress, ProgressSink, TracingProgress};
