use chrono::Utc;
use serde_json::{json, Value};

/// JSON-lines logger. Every event goes to stderr so stdout stays reserved
/// for search results.
#[derive(Clone, Debug)]
pub struct Logger {
    rid: u64,
    verbose: bool,
}

impl Logger {
    /// Creates a new `Logger`.
    ///
    /// # Panics
    ///
    /// Panics if `rid` is zero.
    #[must_use]
    pub fn new(rid: u64) -> Self {
        assert!(rid > 0, "Logger rid must be non-zero");
        Self { rid, verbose: false }
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Info events are dropped unless the logger is verbose.
    pub fn info(&self, subsystem: &str, action: &str, message: &str) {
        if self.verbose {
            eprintln!("{}", self.entry("info", subsystem, action, message));
        }
    }

    pub fn error(&self, subsystem: &str, action: &str, message: &str) {
        eprintln!("{}", self.entry("error", subsystem, action, message));
    }

    fn entry(&self, level: &str, subsystem: &str, action: &str, message: &str) -> Value {
        json!({
            "ts": Utc::now().to_rfc3339(),
            "level": level,
            "rid": self.rid,
            "subsystem": subsystem,
            "action": action,
            "msg": message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_carries_all_fields() {
        let logger = Logger::new(7);
        let entry = logger.entry("error", "scan", "read_failed", "a.txt: denied");
        assert_eq!(entry["level"], "error");
        assert_eq!(entry["rid"], 7);
        assert_eq!(entry["subsystem"], "scan");
        assert_eq!(entry["action"], "read_failed");
        assert_eq!(entry["msg"], "a.txt: denied");
        assert!(entry["ts"].is_string());
    }

    #[test]
    #[should_panic(expected = "rid must be non-zero")]
    fn zero_rid_panics() {
        let _ = Logger::new(0);
    }
}
