use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceRole {
    Provider,
    Consumer,
}

impl ResourceRole {
    pub fn opposite(self) -> Self {
        match self {
            Self::Provider => Self::Consumer,
            Self::Consumer => Self::Provider,
        }
    }
}

/// One end of a connection: a resource port on a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub block_id: String,
    pub resource_name: String,
}

impl Endpoint {
    pub fn new(block_id: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            resource_name: resource_name.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.block_id, self.resource_name)
    }
}

/// A directed edge from a provider port to a consumer port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub provider: Endpoint,
    pub consumer: Endpoint,
}

impl Connection {
    pub fn new(provider: Endpoint, consumer: Endpoint) -> Self {
        Self { provider, consumer }
    }

    /// Builds a connection from two endpoints given in either order.
    ///
    /// Returns `None` when both ends carry the same role.
    pub fn between(
        a: Endpoint,
        a_role: ResourceRole,
        b: Endpoint,
        b_role: ResourceRole,
    ) -> Option<Self> {
        match (a_role, b_role) {
            (ResourceRole::Provider, ResourceRole::Consumer) => Some(Self::new(a, b)),
            (ResourceRole::Consumer, ResourceRole::Provider) => Some(Self::new(b, a)),
            _ => None,
        }
    }

    /// Stable identity of the connection: provider endpoint first, then consumer endpoint.
    ///
    /// Both creation orders of the same two ports produce the same id.
    pub fn id(&self) -> String {
        format!("{}->{}", self.provider, self.consumer)
    }

    pub fn endpoint(&self, role: ResourceRole) -> &Endpoint {
        match role {
            ResourceRole::Provider => &self.provider,
            ResourceRole::Consumer => &self.consumer,
        }
    }

    pub fn touches_block(&self, block_id: &str) -> bool {
        self.provider.block_id == block_id || self.consumer.block_id == block_id
    }
}
