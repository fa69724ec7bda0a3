//! Gateway configuration — deadlines and engine limits.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits applied to every execution unit.
///
/// The engine limits bound what untrusted text can consume regardless of
/// mode. The deadline applies to async-mode units only — sync units have
/// no suspension points and are bounded by the operation limit instead.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Wall-clock deadline for async-mode units. When it elapses the
    /// outcome is a `Timeout` failure and the in-flight unit is abandoned.
    /// `None` means no deadline.
    pub deadline: Option<Duration>,
    /// Maximum script operations before the engine terminates the unit.
    /// `0` disables the check.
    pub max_operations: u64,
    /// Maximum function call nesting depth.
    pub max_call_levels: usize,
    /// Maximum expression nesting depth.
    pub max_expr_depth: usize,
    /// Maximum size of any script string, in bytes.
    pub max_string_size: usize,
    /// Maximum number of elements in any script array.
    pub max_array_size: usize,
    /// Maximum number of entries in any script map.
    pub max_map_size: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            deadline: None,
            max_operations: 1_000_000,
            max_call_levels: 64,
            max_expr_depth: 64,
            max_string_size: 16 * 1024,
            max_array_size: 10_000,
            max_map_size: 1_000,
        }
    }
}

impl GatewayConfig {
    /// Set the async-mode deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the operation limit. `0` disables the check.
    #[must_use]
    pub fn with_max_operations(mut self, max_operations: u64) -> Self {
        self.max_operations = max_operations;
        self
    }
}
