use serde::{Deserialize, Serialize};

// ============================================================================
// Status lattice — the five Cucumber result statuses with a total severity
// order used for worst-status reduction
// ============================================================================

/// Result status of a step, or derived status of a scenario/feature/build.
///
/// Severity order (worst to best): failed > undefined > pending > skipped >
/// passed. A container with no children reduces to `Skipped`, never `Passed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
}

impl Status {
    /// Severity rank; higher is worse.
    pub fn severity(self) -> u8 {
        match self {
            Status::Failed => 4,
            Status::Undefined => 3,
            Status::Pending => 2,
            Status::Skipped => 1,
            Status::Passed => 0,
        }
    }

    /// The worse of two statuses.
    pub fn worst(self, other: Status) -> Status {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    /// Reduce an iterator of statuses to the worst one.
    ///
    /// An empty iterator yields `Skipped`: an empty container is a no-op
    /// unit and must not be reported as passed.
    pub fn worst_of(statuses: impl IntoIterator<Item = Status>) -> Status {
        statuses
            .into_iter()
            .fold(None, |acc: Option<Status>, s| {
                Some(acc.map_or(s, |a| a.worst(s)))
            })
            .unwrap_or(Status::Skipped)
    }

    /// Lowercase display label, matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Skipped => "skipped",
            Status::Pending => "pending",
            Status::Undefined => "undefined",
        }
    }
}

// ============================================================================
// Per-status counters
// ============================================================================

/// Counts of items per status at one granularity (step, scenario, feature).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub pending: usize,
    pub undefined: usize,
}

impl StatusCounts {
    /// Increment the counter for one observed status.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Passed => self.passed += 1,
            Status::Failed => self.failed += 1,
            Status::Skipped => self.skipped += 1,
            Status::Pending => self.pending += 1,
            Status::Undefined => self.undefined += 1,
        }
    }

    /// Counter value for one status.
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Passed => self.passed,
            Status::Failed => self.failed,
            Status::Skipped => self.skipped,
            Status::Pending => self.pending,
            Status::Undefined => self.undefined,
        }
    }

    /// Sum across all five statuses.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.pending + self.undefined
    }
}
