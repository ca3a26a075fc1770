use contracts::system::users::User;

use crate::shared::api_utils::get_json;

/// Fetch all users
pub async fn fetch_users(token: &str) -> Result<Vec<User>, String> {
    get_json("/api/user", token).await
}
