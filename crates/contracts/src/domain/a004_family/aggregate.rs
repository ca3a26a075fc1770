use serde::{Deserialize, Serialize};

/// A taxonomic family used to classify specimens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    pub id: i64,
    pub name: String,
}
