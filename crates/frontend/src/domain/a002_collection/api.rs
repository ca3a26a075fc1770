use contracts::domain::a002_collection::aggregate::{Collection, CollectionDto};
use contracts::shared::api_message::MutationOutcome;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, get_json};

/// Fetch all collections
pub async fn fetch_collections(token: &str) -> Result<Vec<Collection>, String> {
    get_json("/api/collection", token).await
}

/// Create a collection. The backend answers with a message/status envelope
/// for both accepted and rejected input.
pub async fn create_collection(dto: &CollectionDto, token: &str) -> Result<MutationOutcome, String> {
    let response = Request::post(&api_url("/api/collection"))
        .header("Accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<MutationOutcome>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update a collection by id
pub async fn update_collection(
    id: i64,
    dto: &CollectionDto,
    token: &str,
) -> Result<MutationOutcome, String> {
    let response = Request::put(&api_url(&format!("/api/collection/{}", id)))
        .header("Accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<MutationOutcome>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a collection by id
pub async fn delete_collection(id: i64, token: &str) -> Result<MutationOutcome, String> {
    let response = Request::delete(&api_url(&format!("/api/collection/{}", id)))
        .header("Accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<MutationOutcome>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
