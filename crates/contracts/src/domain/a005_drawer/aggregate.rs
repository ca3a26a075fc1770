use serde::{Deserialize, Serialize};

/// A drawer within a rack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub rack_id: Option<i64>,
}
