use serde::{Deserialize, Serialize};

/// A find-site map reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLocation {
    pub id: i64,
    pub name: String,
}
