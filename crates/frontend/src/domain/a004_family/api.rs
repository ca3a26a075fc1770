use contracts::domain::a004_family::Family;

use crate::shared::api_utils::get_json;

/// Fetch all families
pub async fn fetch_families(token: &str) -> Result<Vec<Family>, String> {
    get_json("/api/family", token).await
}
