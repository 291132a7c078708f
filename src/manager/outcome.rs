//! Per-call results for mutating operations.
//!
//! Each call reports its own success flag and messages. Callers that want to
//! collect messages across a request keep an `ErrorLog` and record into it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub messages: Vec<String>,
}

impl Outcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            messages: Vec::new(),
        }
    }

    /// A validation conflict: false plus a human-readable reason.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            messages: vec![message.into()],
        }
    }

    /// The disk refused the operation; no message is added.
    pub fn failed() -> Self {
        Self {
            success: false,
            messages: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    /// Files stored successfully
    pub stored: usize,
    pub messages: Vec<String>,
}

/// Caller-owned, ordered message log. Never cleared implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorLog(Vec<String>);

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the messages of `outcome` and hand back its success flag.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        self.0.extend(outcome.messages);
        outcome.success
    }

    /// Append the messages of an upload report and hand back the stored count.
    pub fn record_upload(&mut self, report: UploadReport) -> usize {
        self.0.extend(report.messages);
        report.stored
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
