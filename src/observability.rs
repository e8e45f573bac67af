// Metric names recorded through the `metrics` facade. The embedding
// application installs its own recorder/exporter.

/// Counter: bookings committed.
pub const BOOKINGS_TOTAL: &str = "roombook_bookings_total";

/// Counter: booking requests refused because the room was taken.
pub const BOOKINGS_UNAVAILABLE_TOTAL: &str = "roombook_bookings_unavailable_total";

/// Counter: bookings cancelled.
pub const CANCELLATIONS_TOTAL: &str = "roombook_cancellations_total";

/// Counter: availability queries served.
pub const AVAILABILITY_QUERIES_TOTAL: &str = "roombook_availability_queries_total";

/// Counter: confirmation sends that failed after commit.
pub const NOTIFY_FAILURES_TOTAL: &str = "roombook_notify_failures_total";
