use contracts::domain::a006_map_location::MapLocation;

use crate::shared::api_utils::get_json;

/// Fetch all map locations
pub async fn fetch_maps(token: &str) -> Result<Vec<MapLocation>, String> {
    get_json("/api/map", token).await
}
