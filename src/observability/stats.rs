//! Per-stream counters
//!
//! Plain counters: a stream is consumed by one caller at a time, so no
//! atomics are needed.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Data lines pulled from the source (header excluded)
    pub lines_read: u64,
    /// Records yielded, partially converted ones included
    pub records: u64,
    /// Records yielded with at least one unconverted field
    pub partial_records: u64,
    /// Lines that yielded no record
    pub null_markers: u64,
    /// Individual field conversion failures
    pub field_errors: u64,
}

impl StreamStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters as log fields
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("field_errors", self.field_errors.to_string()),
            ("lines_read", self.lines_read.to_string()),
            ("null_markers", self.null_markers.to_string()),
            ("partial_records", self.partial_records.to_string()),
            ("records", self.records.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let stats = StreamStats::new();
        assert_eq!(stats.lines_read, 0);
        assert_eq!(stats.records, 0);
        assert_eq!(stats.null_markers, 0);
    }

    #[test]
    fn test_serializes_all_counters() {
        let stats = StreamStats {
            lines_read: 3,
            records: 2,
            partial_records: 1,
            null_markers: 1,
            field_errors: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["lines_read"], 3);
        assert_eq!(json["null_markers"], 1);
        assert_eq!(stats.log_fields().len(), 5);
    }
}
