//! Sentinel Core - Entity Types
//!
//! Data types shared by every Sentinel crate: the `Investigation` status
//! record, its status state machine, agent routing kinds, and the error
//! taxonomy. All other crates depend on this.

pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;

pub use entities::Investigation;
pub use enums::{AgentKind, InvestigationStatus, StatusParseError};
pub use error::{LlmError, QueueError, SentinelError, SentinelResult, StorageError};
pub use identity::{new_entity_id, EntityId, InvestigationId, Timestamp};
