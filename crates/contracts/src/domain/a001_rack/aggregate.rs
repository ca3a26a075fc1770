use serde::{Deserialize, Serialize};

/// A storage rack; collections reference racks by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rack {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
