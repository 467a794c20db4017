//! Test factories for creating Serenity channel objects.

use serde_json::Value;
use serenity::all::{GuildChannel, PrivateChannel};

use crate::serenity::user::test_user;

/// Builds the JSON for a role permission overwrite.
///
/// # Arguments
/// - `role_id` - Role the overwrite applies to
/// - `deny` - Raw permission bits denied to the role
pub fn role_overwrite(role_id: u64, deny: u64) -> Value {
    overwrite(role_id, 0, deny)
}

/// Builds the JSON for a member permission overwrite.
///
/// # Arguments
/// - `user_id` - Member the overwrite applies to
/// - `deny` - Raw permission bits denied to the member
pub fn member_overwrite(user_id: u64, deny: u64) -> Value {
    overwrite(user_id, 1, deny)
}

fn overwrite(id: u64, kind: u8, deny: u64) -> Value {
    serde_json::json!({
        "id": id.to_string(),
        "type": kind,
        "allow": "0",
        "deny": deny.to_string(),
    })
}

/// Creates a test Serenity text channel in a guild.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name without the leading `#`
/// - `nsfw` - Age-restricted channel flag
/// - `overwrites` - Overwrite JSON from `role_overwrite` / `member_overwrite`
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_guild_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    nsfw: bool,
    overwrites: Vec<Value>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 0,
        "name": name,
        "position": 0,
        "topic": null,
        "nsfw": nsfw,
        "parent_id": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "permission_overwrites": overwrites,
        "flags": 0,
    }))
    .expect("Failed to create test guild channel - invalid JSON structure")
}

/// Creates a test Serenity direct message channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `recipient_id` - User ID of the other participant
/// - `recipient_name` - Username of the other participant
///
/// # Returns
/// - `PrivateChannel` - A valid Serenity PrivateChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a PrivateChannel (indicates invalid test data)
pub fn create_test_private_channel(
    channel_id: u64,
    recipient_id: u64,
    recipient_name: &str,
) -> PrivateChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": 1,
        "last_message_id": null,
        "recipients": [test_user(recipient_id, recipient_name, false)],
    }))
    .expect("Failed to create test private channel - invalid JSON structure")
}
