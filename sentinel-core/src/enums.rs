//! Status and routing enums for Sentinel

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a status or agent kind from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown value: {0}")]
pub struct StatusParseError(pub String);

/// Lifecycle status of an investigation.
///
/// The only legal transitions are forward:
/// Pending -> InProgress -> {Completed, Failed}. Completed and Failed are
/// terminal. The wire format matches the stored representation
/// (`"PENDING"`, `"IN_PROGRESS"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationStatus {
    /// Record created, task not yet picked up by a worker
    #[default]
    Pending,
    /// A worker owns the task and is running retrieval/synthesis
    InProgress,
    /// Terminal: analysis succeeded, summary holds the result
    Completed,
    /// Terminal: analysis failed, summary holds the error description
    Failed,
}

impl InvestigationStatus {
    /// Check if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InvestigationStatus::Completed | InvestigationStatus::Failed
        )
    }

    /// Check whether moving to `next` is a legal forward transition.
    pub fn can_transition_to(&self, next: InvestigationStatus) -> bool {
        match (self, next) {
            (InvestigationStatus::Pending, InvestigationStatus::InProgress) => true,
            (InvestigationStatus::InProgress, InvestigationStatus::Completed) => true,
            (InvestigationStatus::InProgress, InvestigationStatus::Failed) => true,
            _ => false,
        }
    }

    /// Convert to database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            InvestigationStatus::Pending => "PENDING",
            InvestigationStatus::InProgress => "IN_PROGRESS",
            InvestigationStatus::Completed => "COMPLETED",
            InvestigationStatus::Failed => "FAILED",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self, StatusParseError> {
        match s {
            "PENDING" => Ok(InvestigationStatus::Pending),
            "IN_PROGRESS" => Ok(InvestigationStatus::InProgress),
            "COMPLETED" => Ok(InvestigationStatus::Completed),
            "FAILED" => Ok(InvestigationStatus::Failed),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

impl fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for InvestigationStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(InvestigationStatus::Pending),
            "in_progress" | "in-progress" => Ok(InvestigationStatus::InProgress),
            "completed" | "complete" => Ok(InvestigationStatus::Completed),
            "failed" | "failure" => Ok(InvestigationStatus::Failed),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// Kind of agent a task message routes to.
///
/// Unrecognized kinds deserialize to `Unknown` rather than failing, so a
/// message carrying a kind this build does not know about can be observed
/// and dropped instead of poisoning the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Log analysis: semantic retrieval over log entries + LLM synthesis
    #[default]
    LogAnalyst,
    /// Fallback for kinds this build does not recognize
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentKind::LogAnalyst => "log_analyst",
            AgentKind::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// TESTS
// =============================================================================


// =============================================================================
// PROPERTY-BASED TESTS
// =============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_status() -> impl Strategy<Value = InvestigationStatus> {
        prop_oneof![
            Just(InvestigationStatus::Pending),
            Just(InvestigationStatus::InProgress),
            Just(InvestigationStatus::Completed),
            Just(InvestigationStatus::Failed),
        ]
    }

    proptest! {
        /// Terminal states admit no outgoing transitions at all.
        #[test]
        fn prop_terminal_states_are_absorbing(
            from in arb_status(),
            to in arb_status(),
        ) {
            if from.is_terminal() {
                prop_assert!(!from.can_transition_to(to));
            }
        }

        /// The transition relation contains exactly the three forward edges.
        #[test]
        fn prop_transition_relation_is_forward_only(
            from in arb_status(),
            to in arb_status(),
        ) {
            let expected = matches!(
                (from, to),
                (InvestigationStatus::Pending, InvestigationStatus::InProgress)
                    | (InvestigationStatus::InProgress, InvestigationStatus::Completed)
                    | (InvestigationStatus::InProgress, InvestigationStatus::Failed)
            );
            prop_assert_eq!(from.can_transition_to(to), expected);
        }

        /// Wire format round-trips through serde.
        #[test]
        fn prop_status_serde_round_trip(status in arb_status()) {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: InvestigationStatus = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, status);
        }
    }
}
