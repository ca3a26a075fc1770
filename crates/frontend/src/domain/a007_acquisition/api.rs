use contracts::domain::a007_acquisition::Acquisition;

use crate::shared::api_utils::get_json;

/// Fetch all acquisitions
pub async fn fetch_acquisitions(token: &str) -> Result<Vec<Acquisition>, String> {
    get_json("/api/acquisition", token).await
}
