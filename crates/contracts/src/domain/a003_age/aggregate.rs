use serde::{Deserialize, Serialize};

/// A geological age used to classify specimens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Age {
    pub id: i64,
    pub name: String,
}
