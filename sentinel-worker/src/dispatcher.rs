//! Agent dispatcher keyed on `AgentKind`.
//!
//! Task messages carry an agent kind; the dispatcher maps each kind to a
//! registered handler. Kinds without a handler (including
//! `AgentKind::Unknown`, the serde fallback for kinds this build does not
//! recognize) resolve to `None` and the caller records the investigation
//! as failed instead of guessing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sentinel_core::{AgentKind, Investigation, SentinelResult};

/// An agent that can run one investigation to a summary.
#[async_trait]
pub trait InvestigationAgent: Send + Sync {
    /// Run the analysis for an investigation and return the summary text.
    async fn run(&self, investigation: &Investigation) -> SentinelResult<String>;

    /// Identifier of this agent for logging.
    fn agent_id(&self) -> &str;
}

/// Enum-keyed handler table for investigation agents.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<AgentKind, Arc<dyn InvestigationAgent>>,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an agent kind.
    /// Replaces any previously registered handler for that kind.
    pub fn register(&mut self, kind: AgentKind, agent: Arc<dyn InvestigationAgent>) {
        self.handlers.insert(kind, agent);
    }

    /// Look up the handler for an agent kind.
    pub fn agent_for(&self, kind: AgentKind) -> Option<Arc<dyn InvestigationAgent>> {
        self.handlers.get(&kind).cloned()
    }

    /// Check if a handler is registered for the kind.
    pub fn handles(&self, kind: AgentKind) -> bool {
        self.handlers.contains_key(&kind)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("kinds", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoAgent;

    #[async_trait]
    impl InvestigationAgent for EchoAgent {
        async fn run(&self, investigation: &Investigation) -> SentinelResult<String> {
            Ok(format!("Analyzed logs for: {}", investigation.query))
        }

        fn agent_id(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_registered_kind_resolves() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(AgentKind::LogAnalyst, Arc::new(EchoAgent));

        assert!(dispatcher.handles(AgentKind::LogAnalyst));
        let agent = dispatcher.agent_for(AgentKind::LogAnalyst).unwrap();
        let summary = agent.run(&Investigation::new("failed logins")).await.unwrap();
        assert_eq!(summary, "Analyzed logs for: failed logins");
    }

    #[test]
    fn test_unknown_kind_has_no_handler() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(AgentKind::LogAnalyst, Arc::new(EchoAgent));

        assert!(!dispatcher.handles(AgentKind::Unknown));
        assert!(dispatcher.agent_for(AgentKind::Unknown).is_none());
    }
}
