use contracts::domain::a005_drawer::Drawer;

use crate::shared::api_utils::get_json;

/// Fetch all drawers
pub async fn fetch_drawers(token: &str) -> Result<Vec<Drawer>, String> {
    get_json("/api/drawer", token).await
}
