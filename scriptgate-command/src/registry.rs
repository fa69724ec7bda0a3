//! The command registry — an explicit name-to-handler map, built once
//! and handed to the host by reference.

use crate::command::Command;
use crate::policy::{CallerTrust, GatePolicy, PolicyDecision, TrustPolicy};
use scriptgate_core::CommandError;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps command names to handlers and gates dispatches through a
/// [`TrustPolicy`].
///
/// Construct at startup, register every command, then share by
/// reference with the dispatch host. Registration after that point is
/// possible but the host sees updates only through the shared reference;
/// there is no ambient global registry to mutate.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    policy: Arc<dyn TrustPolicy>,
}

impl CommandRegistry {
    /// Create an empty registry with the default [`GatePolicy`].
    pub fn new() -> Self {
        Self::with_policy(Arc::new(GatePolicy))
    }

    /// Create an empty registry with an explicit policy.
    pub fn with_policy(policy: Arc<dyn TrustPolicy>) -> Self {
        Self {
            commands: HashMap::new(),
            policy,
        }
    }

    /// Register a command under its own name. Replaces any previous
    /// command with the same name.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        tracing::debug!(name = command.name(), gated = command.gated(), "registering command");
        self.commands.insert(command.name().to_string(), command);
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }

    /// The registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Dispatch one input line.
    ///
    /// Always returns a string for the host pipe: the command's output,
    /// or `Error: <message>` for unknown names and policy refusals. A
    /// refused dispatch never reaches the command's handler.
    pub async fn dispatch(&self, name: &str, args: &str, caller: CallerTrust) -> String {
        let Some(command) = self.commands.get(name) else {
            return render(CommandError::Unknown(name.to_string()));
        };

        match self.policy.check(command.as_ref(), caller) {
            PolicyDecision::Allow => command.call(args).await,
            PolicyDecision::Deny { reason } => {
                tracing::warn!(name, ?caller, reason, "dispatch refused by policy");
                render(CommandError::PermissionDenied {
                    command: name.to_string(),
                    reason,
                })
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn render(err: CommandError) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl Command for Echo {
        fn name(&self) -> &str {
            "echo"
        }
        fn help(&self) -> &str {
            "(text) – echoes its argument"
        }
        async fn call(&self, args: &str) -> String {
            args.to_string()
        }
    }

    struct Gated;

    #[async_trait]
    impl Command for Gated {
        fn name(&self) -> &str {
            "secret"
        }
        fn help(&self) -> &str {
            ""
        }
        fn gated(&self) -> bool {
            true
        }
        async fn call(&self, _args: &str) -> String {
            "the secret".into()
        }
    }

    #[tokio::test]
    async fn dispatch_routes_to_the_named_command() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(Echo));

        let out = registry.dispatch("echo", "hello", CallerTrust::Standard).await;
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn unknown_command_is_an_error_string() {
        let registry = CommandRegistry::new();

        let out = registry.dispatch("nope", "", CallerTrust::Elevated).await;
        assert_eq!(out, "Error: unknown command: nope");
    }

    #[tokio::test]
    async fn gated_command_refused_for_standard_caller() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(Gated));

        let out = registry.dispatch("secret", "", CallerTrust::Standard).await;
        assert!(out.starts_with("Error: command 'secret' denied"), "got: {out}");

        let out = registry.dispatch("secret", "", CallerTrust::Elevated).await;
        assert_eq!(out, "the secret");
    }

    #[tokio::test]
    async fn names_are_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(Gated));
        registry.register(Arc::new(Echo));

        assert_eq!(registry.names(), vec!["echo", "secret"]);
    }
}
