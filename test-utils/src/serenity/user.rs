use serde_json::Value;

/// Builds the JSON for a Discord user without a legacy discriminator or avatar.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `bot` - Whether the account is a bot
///
/// # Returns
/// - `Value` - User JSON, embeddable in messages and channels
pub fn test_user(user_id: u64, username: &str, bot: bool) -> Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
    })
}
