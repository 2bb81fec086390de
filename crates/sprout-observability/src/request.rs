//! Request identifiers.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new request ID.
    ///
    /// Unique within a process; ids from different processes are told
    /// apart by the pid component.
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:x}-{:x}", nanos, std::process::id(), seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = RequestId::generate();
        let b = RequestId::generate();

        assert_ne!(a, b);
        assert_eq!(a.as_str().split('-').count(), 3);
    }

    #[test]
    fn test_from_string() {
        let id = RequestId::from_string("req-1");
        assert_eq!(id.to_string(), "req-1");
    }
}
