use contracts::domain::a001_rack::Rack;

use crate::shared::api_utils::get_json;

/// Fetch all racks
pub async fn fetch_racks(token: &str) -> Result<Vec<Rack>, String> {
    get_json("/api/rack", token).await
}
