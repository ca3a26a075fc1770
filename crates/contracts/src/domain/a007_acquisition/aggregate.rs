use serde::{Deserialize, Serialize};

/// How a specimen entered the museum (donation, excavation, purchase...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acquisition {
    pub id: i64,
    pub name: String,
}
