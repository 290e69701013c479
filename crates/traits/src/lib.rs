pub mod metrics;
pub mod sink;

pub use metrics::{
    BASE_FONT_FAMILY, CachedMetrics, DEFAULT_CACHE_ENTRIES, MetricsError, StandardMetrics,
    TextMetrics,
};
pub use sink::{DocumentSink, InMemorySink, PDF_MIME_TYPE, SinkError, StoredDocument};
