use contracts::domain::a003_age::Age;

use crate::shared::api_utils::get_json;

/// Fetch all geological ages
pub async fn fetch_ages(token: &str) -> Result<Vec<Age>, String> {
    get_json("/api/age", token).await
}
