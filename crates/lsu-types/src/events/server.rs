//! Server lifecycle occurrences.

use super::impl_event;

/// Direction of a server change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerChangeType {
    Connected,
    Disconnected,
}

/// The player connected to or disconnected from a server.
///
/// Used by features for lifecycle management and state cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerChange {
    change: ServerChangeType,
    server_address: String,
}

impl ServerChange {
    pub fn new(change: ServerChangeType, server_address: impl Into<String>) -> Self {
        Self {
            change,
            server_address: server_address.into(),
        }
    }

    pub fn connected(server_address: impl Into<String>) -> Self {
        Self::new(ServerChangeType::Connected, server_address)
    }

    pub fn disconnected(server_address: impl Into<String>) -> Self {
        Self::new(ServerChangeType::Disconnected, server_address)
    }

    pub fn change(&self) -> ServerChangeType {
        self.change
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn is_connected(&self) -> bool {
        self.change == ServerChangeType::Connected
    }

    pub fn is_disconnected(&self) -> bool {
        self.change == ServerChangeType::Disconnected
    }
}

impl_event!(ServerChange);

/// The player moved to a different named shard of the current server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSwap {
    shard_name: String,
}

impl ShardSwap {
    pub fn new(shard_name: impl Into<String>) -> Self {
        Self {
            shard_name: shard_name.into(),
        }
    }

    /// Name of the new shard, e.g. `lifesteal-spawn-79dll`.
    pub fn shard_name(&self) -> &str {
        &self.shard_name
    }
}

impl_event!(ShardSwap);
