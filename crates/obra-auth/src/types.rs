use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier for a single authorizable action.
///
/// The closed enumeration lives in [`crate::catalog`]; the id is what gets
/// persisted and what travels in the `permissions` cookie.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(pub u32);

impl fmt::Debug for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PermissionId({})", self.0)
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single permission entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionDef {
    pub id: PermissionId,
    pub label: String,
    pub description: String,
}
