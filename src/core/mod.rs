/// Field rendering and the two row escaping policies.
pub mod format;

/// Typed shapes of the scraped datasets.
pub mod record;

/// Outcome reporting for export calls.
pub mod report;

/// Destination resolution and the directory-ensuring write step.
pub mod sink;
